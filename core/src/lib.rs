//! Bag-of-words document similarity: extract, tokenize, count, vectorize, search.

pub mod config;
pub mod corpus;
pub mod counter;
pub mod error;
pub mod extract;
pub mod neighbors;
pub mod tokenizer;
pub mod vectorize;

pub use config::EngineConfig;
pub use corpus::{Corpus, DocumentProfile};
pub use counter::{count_words, WordCounts};
pub use error::{Error, Result};
pub use extract::{extract, extract_from_reader, extract_str, Document};
pub use neighbors::{euclidean_distance, nearest_neighbors};
pub use tokenizer::{tokenize, tokenize_with, TextFilter, WikiMarkupFilter};
pub use vectorize::{encode_word_counts, DocumentTermMatrix, Vocabulary};
