
// imports
use std::collections::HashMap;
use ndarray::Array1;

use crate::space::{Dictionary, Model, SparseIndex};

// the shared resolution step behind both the batch table builder and the
// direct two-word query. callers decide how to react to a degenerate result,
// the batch path drops the word and the direct path raises.
pub(crate) fn resolve_word<D: Dictionary, M: Model>(
    word: &str,
    dictionary: &D,
    model: &M) -> (SparseIndex, Array1<f32>) {

    let sparse = dictionary.resolve(word);
    let vector = model.project(&sparse);
    (sparse, vector)

}

/// a fully resolved word: its sparse features and its dense coordinates.
/// retained entries always carry exactly the table's num_dims components.
pub struct LookupEntry {
    pub word: String,
    pub sparse: SparseIndex,
    pub vector: Array1<f32>,
}

pub struct LookupTable {
    entries: HashMap<String, LookupEntry>,
    num_dims: usize,
}

impl LookupTable {

    // resolves every vocabulary word against the dictionary and model, keeping
    // only words whose projected vector carries the full num_dims components.
    // anything else is unresolvable and silently left out, duplicated words
    // re-insert an identical entry.
    pub fn build<D: Dictionary, M: Model>(
        vocabulary: &[String],
        dictionary: &D,
        model: &M,
        num_dims: usize) -> LookupTable {

        let mut entries: HashMap<String, LookupEntry> = HashMap::new();
        for word in vocabulary {

            let (sparse, vector) = resolve_word(word, dictionary, model);
            if vector.len() != num_dims { continue }

            let entry = LookupEntry {
                word: word.to_owned(),
                sparse: sparse,
                vector: vector
            };
            entries.insert(word.to_owned(), entry);

        }

        Self {
            entries: entries,
            num_dims: num_dims
        }

    }

    pub fn get(&self, word: &str) -> Option<&LookupEntry> {
        self.entries.get(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn num_dims(&self) -> usize {
        self.num_dims
    }

}
