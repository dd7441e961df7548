use thiserror::Error;

/// Error taxonomy for the retrieval core.
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// Malformed or empty input to the chunker
    #[error("chunking error: {0}")]
    Chunking(String),

    /// Embedding backend could not be initialized or reached
    #[error("embedding backend unavailable: {0}")]
    EmbeddingInit(String),

    /// A single embedding call failed
    #[error("embedding failed: {0}")]
    Embedding(String),

    /// A write to the vector store failed
    #[error("store write failed: {0}")]
    StoreWrite(String),

    /// Any other vector store operation failed
    #[error("store error: {0}")]
    Store(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AdvisorError {
    pub fn chunking<S: Into<String>>(msg: S) -> Self {
        Self::Chunking(msg.into())
    }

    pub fn embedding_init<S: Into<String>>(msg: S) -> Self {
        Self::EmbeddingInit(msg.into())
    }

    pub fn embedding<S: Into<String>>(msg: S) -> Self {
        Self::Embedding(msg.into())
    }

    pub fn store_write<S: Into<String>>(msg: S) -> Self {
        Self::StoreWrite(msg.into())
    }

    pub fn store<S: Into<String>>(msg: S) -> Self {
        Self::Store(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
