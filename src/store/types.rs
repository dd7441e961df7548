use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Provenance of a chunk within its source document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChunkMetadata {
    pub page: u32,
    pub source: String,
}

/// A bounded substring of source text, produced by the chunker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentChunk {
    pub text: String,
    pub metadata: ChunkMetadata,
}

impl DocumentChunk {
    pub fn new(text: &str, page: u32, source: &str) -> Self {
        Self {
            text: text.to_string(),
            metadata: ChunkMetadata {
                page,
                source: source.to_string(),
            },
        }
    }
}

/// A chunk with its embedding, as persisted by the vector store. The id is
/// generated at store time; re-storing the same chunk yields a new record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorRecord {
    pub id: String,
    pub text: String,
    pub metadata: ChunkMetadata,
    pub embedding: Vec<f32>,
    pub created_at: DateTime<Utc>,
}

impl VectorRecord {
    pub fn new(chunk: DocumentChunk, embedding: Vec<f32>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: chunk.text,
            metadata: chunk.metadata,
            embedding,
            created_at: Utc::now(),
        }
    }
}

/// What retrieval hands back to the caller: chunk text and provenance, no
/// embedding and no score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RetrievedChunk {
    pub text: String,
    pub metadata: ChunkMetadata,
}

impl From<&VectorRecord> for RetrievedChunk {
    fn from(record: &VectorRecord) -> Self {
        Self {
            text: record.text.clone(),
            metadata: record.metadata.clone(),
        }
    }
}
