use crate::DocumentId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The document was never passed to `ingest`.
    #[error("Document id not in search engine: {0}")]
    UnknownDocument(DocumentId),
}
