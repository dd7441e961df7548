use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{AdvisorError, Result};

use super::{VectorRecord, VectorStore};

/// In-memory vector store for tests and ephemeral sessions. `load` and
/// `persist` are no-ops; state lives for the lifetime of the value.
#[derive(Default)]
pub struct MemoryStore {
    data: RwLock<HashMap<String, VectorRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VectorStore for MemoryStore {
    async fn put(&self, record: VectorRecord) -> Result<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| AdvisorError::store_write(e.to_string()))?;

        if let Some(existing) = data.values().next() {
            if existing.embedding.len() != record.embedding.len() {
                return Err(AdvisorError::store_write(format!(
                    "embedding dimensionality {} does not match the store's {}",
                    record.embedding.len(),
                    existing.embedding.len()
                )));
            }
        }

        data.insert(record.id.clone(), record);
        Ok(())
    }

    async fn iterate_all(&self) -> Result<Vec<VectorRecord>> {
        let data = self
            .data
            .read()
            .map_err(|e| AdvisorError::store(e.to_string()))?;
        let mut records: Vec<VectorRecord> = data.values().cloned().collect();
        records.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(records)
    }

    async fn clear(&self) -> Result<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| AdvisorError::store(e.to_string()))?;
        data.clear();
        Ok(())
    }

    async fn load(&self) -> Result<()> {
        Ok(())
    }

    async fn persist(&self) -> Result<()> {
        Ok(())
    }

    async fn count(&self) -> Result<usize> {
        let data = self
            .data
            .read()
            .map_err(|e| AdvisorError::store(e.to_string()))?;
        Ok(data.len())
    }
}
