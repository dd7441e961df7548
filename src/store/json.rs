use async_trait::async_trait;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::error::{AdvisorError, Result};

use super::{VectorRecord, VectorStore};

/// File-backed vector store: one JSON file per namespace, with an in-memory
/// map behind a lock. Writes go through a temp file and rename so a crash
/// mid-persist never leaves a truncated store on disk.
pub struct JsonStore {
    path: PathBuf,
    data: RwLock<HashMap<String, VectorRecord>>,
}

impl JsonStore {
    pub fn new(dir: &Path, namespace: &str) -> Self {
        Self::at_path(dir.join(format!("{}.json", namespace)))
    }

    pub fn at_path(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn atomic_write(&self, data: &HashMap<String, VectorRecord>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| AdvisorError::store_write(e.to_string()))?;
        }

        let temp_path = self.path.with_extension("tmp");
        let json =
            serde_json::to_vec(data).map_err(|e| AdvisorError::store_write(e.to_string()))?;
        fs::write(&temp_path, json).map_err(|e| AdvisorError::store_write(e.to_string()))?;
        fs::rename(temp_path, &self.path).map_err(|e| AdvisorError::store_write(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl VectorStore for JsonStore {
    async fn put(&self, record: VectorRecord) -> Result<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| AdvisorError::store_write(e.to_string()))?;

        if let Some(existing) = data.values().next() {
            if existing.embedding.len() != record.embedding.len() {
                return Err(AdvisorError::store_write(format!(
                    "embedding dimensionality {} does not match the store's {}; \
                     clear the store before switching backends",
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

        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| AdvisorError::store(e.to_string()))?;
        }

        Ok(())
    }

    async fn load(&self) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }

        let content = fs::read(&self.path).map_err(|e| AdvisorError::store(e.to_string()))?;
        let loaded: HashMap<String, VectorRecord> =
            serde_json::from_slice(&content).map_err(|e| AdvisorError::store(e.to_string()))?;

        let mut data = self
            .data
            .write()
            .map_err(|e| AdvisorError::store(e.to_string()))?;
        *data = loaded;

        Ok(())
    }

    async fn persist(&self) -> Result<()> {
        let data = self
            .data
            .read()
            .map_err(|e| AdvisorError::store_write(e.to_string()))?;
        self.atomic_write(&data)
    }

    async fn count(&self) -> Result<usize> {
        let data = self
            .data
            .read()
            .map_err(|e| AdvisorError::store(e.to_string()))?;
        Ok(data.len())
    }
}
