
// imports
use ndarray::Array1;
use rayon::prelude::*;
use thiserror::Error;

use crate::lookup::resolve_word;
use crate::pairs::PairTable;
use crate::space::{Dictionary, Model};

#[derive(Debug, Error)]
pub enum SimilarityError {
    /// a direct two-word query hit a word with no features in the topic space
    #[error("word pair not found in topic space: {word1},{word2}")]
    NotFound { word1: String, word2: String },
    /// the two vectors of a pair disagree on dimensionality
    #[error("vector length mismatch: {left} vs {right}")]
    InvalidInput { left: usize, right: usize },
}

/// a word pair carried with both dense vectors and its similarity score
pub struct ScoredPair {
    pub word1: String,
    pub word2: String,
    pub vector1: Array1<f32>,
    pub vector2: Array1<f32>,
    pub score: f32,
}

// cosine similarity of the two vectors, i.e. 1 - cosine distance, so
// same-direction vectors score 1.0 and opposite-direction vectors -1.0.
// the lookup builder guarantees matching lengths upstream, a mismatch
// here is a caller error.
pub fn score_pair(vec1: &Array1<f32>, vec2: &Array1<f32>) -> Result<f32, SimilarityError> {

    if vec1.len() != vec2.len() {
        return Err(SimilarityError::InvalidInput { left: vec1.len(), right: vec2.len() });
    }

    let norm1 = vec1.dot(vec1).sqrt();
    let norm2 = vec2.dot(vec2).sqrt();
    Ok(vec1.dot(vec2) / (norm1 * norm2))

}

// scores every row of an assembled table. rows are independent, so the map
// runs on the rayon pool and keeps the table order. a failing row fails the
// whole call, though which of several concurrent errors surfaces is not fixed.
pub fn score_table(table: PairTable) -> Result<Vec<ScoredPair>, SimilarityError> {

    table
    .into_rows()
    .into_par_iter()
    .map(|row| {
        let score = score_pair(&row.vector1, &row.vector2)?;
        Ok(ScoredPair {
            word1: row.word1,
            word2: row.word2,
            vector1: row.vector1,
            vector2: row.vector2,
            score: score
        })
    })
    .collect()

}

// direct two-word query, bypassing the table pipeline. unlike the batch
// builder's silent drop, a word with no features in the topic space is a
// hard error here naming both words of the query.
pub fn word_similarity<D: Dictionary, M: Model>(
    word1: &str,
    word2: &str,
    dictionary: &D,
    model: &M) -> Result<f32, SimilarityError> {

    let (sparse1, vector1) = resolve_word(word1, dictionary, model);
    let (sparse2, vector2) = resolve_word(word2, dictionary, model);

    if sparse1.is_empty() || sparse2.is_empty() {
        return Err(SimilarityError::NotFound {
            word1: word1.to_owned(),
            word2: word2.to_owned()
        });
    }

    score_pair(&vector1, &vector2)

}
