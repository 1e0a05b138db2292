//! In-memory document index with tf-idf relevance ranking.
//!
//! Documents are ingested as raw text under a [`DocumentId`]. The [`SearchEngine`]
//! keeps an inverted index (term -> documents) and a forward index
//! (document -> term counts), and answers membership queries as well as
//! ranked lookups through [`TfIdfRanker`].

pub mod document;
pub mod error;
pub mod index;
pub mod rank;
pub mod shared;
pub mod tokenizer;

pub use document::DocumentId;
pub use error::{EngineError, Result};
pub use index::SearchEngine;
pub use rank::{RankWeights, TfIdfRanker};
pub use shared::SharedSearchEngine;
