
// imports
use std::collections::HashMap;
use ndarray::{Array1, Array2};

/// a word's bag-of-features form, (feature id, weight) entries.
/// an empty index means the word is unknown to the dictionary.
pub type SparseIndex = Vec<(usize, f32)>;

// defines the behavior needed for resolving words into sparse features
pub trait Dictionary {
    fn resolve(&self, word: &str) -> SparseIndex;
}

// defines the behavior needed for projecting sparse features into the dense topic space
pub trait Model {
    fn project(&self, sparse: &SparseIndex) -> Array1<f32>;
}

pub struct TokenDictionary {
    t2i: HashMap<String, usize>,
}

impl TokenDictionary {

    pub fn new(t2i: HashMap<String, usize>) -> TokenDictionary {
        Self { t2i: t2i }
    }

    pub fn len(&self) -> usize {
        self.t2i.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t2i.is_empty()
    }

}

impl Dictionary for TokenDictionary {

    // a known word maps to a single (row index, 1.0) feature, an unknown word to nothing
    fn resolve(&self, word: &str) -> SparseIndex {
        match self.t2i.get(word) {
            Some(i) => vec![(*i, 1.0)],
            None => Vec::new()
        }
    }

}

pub struct TopicModel {
    w: Array2<f32>,
}

impl TopicModel {

    pub fn new(w: Array2<f32>) -> TopicModel {
        Self { w: w }
    }

    // the dimensionality of the space the model projects into
    pub fn num_dims(&self) -> usize {
        self.w.ncols()
    }

}

impl Model for TopicModel {

    // weighted sum of the weight matrix rows selected by the sparse index.
    // an index that selects no valid row projects to a zero-length vector,
    // the degenerate case the lookup builder later drops.
    fn project(&self, sparse: &SparseIndex) -> Array1<f32> {

        let mut vector: Array1<f32> = Array1::zeros(self.w.ncols());
        let mut selected = false;
        for (feature, weight) in sparse {
            if *feature < self.w.nrows() {
                vector.scaled_add(*weight, &self.w.row(*feature));
                selected = true;
            }
        }

        if selected { vector } else { Array1::zeros(0) }

    }

}
