
mod config;
mod space;
mod lookup;
mod pairs;
mod scoring;
mod pipeline;

pub use config::{files_handling, Config};
pub use space::{Dictionary, Model, SparseIndex, TokenDictionary, TopicModel};
pub use lookup::{LookupEntry, LookupTable};
pub use pairs::{PairTable, WordPair};
pub use scoring::{score_pair, score_table, word_similarity, ScoredPair, SimilarityError};
pub use pipeline::Pipeline;
