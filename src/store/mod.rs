mod json;
mod memory;
mod types;

pub use json::JsonStore;
pub use memory::MemoryStore;
pub use types::{ChunkMetadata, DocumentChunk, RetrievedChunk, VectorRecord};

use crate::error::Result;
use async_trait::async_trait;

/// A persistent, namespaced id -> record mapping. Implementations provide
/// per-record atomicity only; a batch of `put` calls interrupted mid-way may
/// be partially persisted.
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Insert or overwrite a record by id. Rejects records whose embedding
    /// dimensionality differs from what the store already holds.
    async fn put(&self, record: VectorRecord) -> Result<()>;

    /// Full scan. Records are returned sorted by id so a fixed snapshot
    /// ranks deterministically across runs.
    async fn iterate_all(&self) -> Result<Vec<VectorRecord>>;

    /// Remove every record in the namespace.
    async fn clear(&self) -> Result<()>;

    /// Load persisted state, if any.
    async fn load(&self) -> Result<()>;

    /// Write current state to durable storage.
    async fn persist(&self) -> Result<()>;

    /// Number of records currently held.
    async fn count(&self) -> Result<usize>;
}

/// Cosine similarity of two vectors. Defined as 0 when the vectors differ in
/// length or either norm is 0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;

    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 {
        0.0
    } else {
        dot / denom
    }
}
