
// imports
use std::collections::HashSet;
use ndarray::Array1;

use crate::lookup::LookupTable;

/// an unordered word pair carried with both dense vectors, still unscored.
/// slot 1 holds the word that appears first in the input vocabulary.
pub struct WordPair {
    pub word1: String,
    pub word2: String,
    pub vector1: Array1<f32>,
    pub vector2: Array1<f32>,
}

pub struct PairTable {
    rows: Vec<WordPair>,
}

impl PairTable {

    // generates every unordered two-word combination of the vocabulary, in
    // combinatorial order: fix the first word, walk the remainder, advance.
    // a pair survives only when both words have a lookup entry (inner join)
    // and, with a non-empty winnow set, when at least one word is a member.
    // winnowing preserves insertion order, the optional ascending sort by
    // (word1, word2) is applied last.
    pub fn assemble(
        vocabulary: &[String],
        lookup_table: &LookupTable,
        winnow: &[String],
        ascending: bool) -> PairTable {

        let winnow: HashSet<&str> = winnow.iter().map(|w| w.as_str()).collect();
        let mut rows: Vec<WordPair> = Vec::new();

        let n = vocabulary.len();
        for i in 0..n {
            for j in i + 1..n {

                let word1 = &vocabulary[i];
                let word2 = &vocabulary[j];
                if word1 == word2 { continue }

                // both sides must have survived the lookup build
                let entry1 = match lookup_table.get(word1) {
                    Some(entry1) => entry1,
                    None => continue
                };
                let entry2 = match lookup_table.get(word2) {
                    Some(entry2) => entry2,
                    None => continue
                };

                // one member of the pair must belong to the winnow set, when given
                if !winnow.is_empty()
                    && !winnow.contains(word1.as_str())
                    && !winnow.contains(word2.as_str()) {
                    continue
                }

                rows.push(WordPair {
                    word1: word1.to_owned(),
                    word2: word2.to_owned(),
                    vector1: entry1.vector.clone(),
                    vector2: entry2.vector.clone()
                });

            }
        }

        if ascending {
            rows.sort_by(|a, b| {
                (a.word1.as_str(), a.word2.as_str()).cmp(&(b.word1.as_str(), b.word2.as_str()))
            });
        }

        Self { rows: rows }

    }

    pub fn rows(&self) -> &[WordPair] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<WordPair> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

}


#[cfg(test)]
mod tests {

    use std::collections::HashMap;
    use ndarray::Array2;

    use super::PairTable;
    use crate::lookup::LookupTable;
    use crate::space::{TokenDictionary, TopicModel};

    // a space where every listed word projects to a distinct unit axis
    fn toy_space(words: &[&str]) -> (TokenDictionary, TopicModel) {

        let mut t2i: HashMap<String, usize> = HashMap::new();
        for (i, word) in words.iter().enumerate() {
            t2i.insert(word.to_string(), i);
        }
        let w: Array2<f32> = Array2::eye(words.len());
        (TokenDictionary::new(t2i), TopicModel::new(w))

    }

    fn vocab(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn words_of(table: &PairTable) -> Vec<(String, String)> {
        table.rows().iter().map(|p| (p.word1.to_owned(), p.word2.to_owned())).collect()
    }

    #[test]
    fn combinations_follow_vocabulary_order() {

        let words = ["d", "c", "b", "a"];
        let (dictionary, model) = toy_space(&words);
        let vocabulary = vocab(&words);
        let lookup_table = LookupTable::build(&vocabulary, &dictionary, &model, 4);

        let table = PairTable::assemble(&vocabulary, &lookup_table, &[], false);

        let golden = [
            ("d", "c"), ("d", "b"), ("d", "a"),
            ("c", "b"), ("c", "a"),
            ("b", "a")
        ].map(|(w1, w2)| (w1.to_string(), w2.to_string())).to_vec();
        assert_eq!(words_of(&table), golden);

    }

    #[test]
    fn ascending_sorts_by_both_slots() {

        let words = ["fish", "cat", "dog"];
        let (dictionary, model) = toy_space(&words);
        let vocabulary = vocab(&words);
        let lookup_table = LookupTable::build(&vocabulary, &dictionary, &model, 3);

        let table = PairTable::assemble(&vocabulary, &lookup_table, &[], true);

        assert_eq!(table.len(), 3);
        let pairs = words_of(&table);
        for window in pairs.windows(2) {
            assert!(window[0] <= window[1]);
        }

    }

    #[test]
    fn dropped_words_appear_in_no_pair() {

        // the space only knows three of the four vocabulary words
        let (dictionary, model) = toy_space(&["cat", "dog", "fish"]);
        let vocabulary = vocab(&["cat", "xyzzy", "dog", "fish"]);
        let lookup_table = LookupTable::build(&vocabulary, &dictionary, &model, 3);

        let table = PairTable::assemble(&vocabulary, &lookup_table, &[], false);

        assert_eq!(table.len(), 3); // C(3,2), not C(4,2)
        for row in table.rows() {
            assert_ne!(row.word1, "xyzzy");
            assert_ne!(row.word2, "xyzzy");
        }

    }

    #[test]
    fn winnowed_pairs_all_touch_the_set() {

        let words = ["a", "b", "c", "d"];
        let (dictionary, model) = toy_space(&words);
        let vocabulary = vocab(&words);
        let lookup_table = LookupTable::build(&vocabulary, &dictionary, &model, 4);

        let winnow = vocab(&["b"]);
        let table = PairTable::assemble(&vocabulary, &lookup_table, &winnow, false);

        let golden = [("a", "b"), ("b", "c"), ("b", "d")]
            .map(|(w1, w2)| (w1.to_string(), w2.to_string())).to_vec();
        assert_eq!(words_of(&table), golden);

        // the complement holds exactly the pairs touching no winnow word
        let full = PairTable::assemble(&vocabulary, &lookup_table, &[], false);
        let kept = words_of(&table);
        for pair in words_of(&full) {
            let touches = pair.0 == "b" || pair.1 == "b";
            assert_eq!(kept.contains(&pair), touches);
        }

    }

    #[test]
    fn empty_winnow_keeps_every_joined_pair() {

        let words = ["a", "b", "c", "d"];
        let (dictionary, model) = toy_space(&words);
        let vocabulary = vocab(&words);
        let lookup_table = LookupTable::build(&vocabulary, &dictionary, &model, 4);

        let table = PairTable::assemble(&vocabulary, &lookup_table, &[], false);
        assert_eq!(table.len(), 6); // C(4,2)

    }

    #[test]
    fn table_never_exceeds_all_combinations() {

        let (dictionary, model) = toy_space(&["a", "b"]);
        let vocabulary = vocab(&["a", "b", "c", "d", "e"]);
        let lookup_table = LookupTable::build(&vocabulary, &dictionary, &model, 2);

        let table = PairTable::assemble(&vocabulary, &lookup_table, &[], false);
        assert!(table.len() <= 10); // C(5,2)
        assert_eq!(table.len(), 1); // only (a,b) joins

    }

}
