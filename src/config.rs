use std::path::PathBuf;

/// Window and overlap sizes for the chunker, in characters.
#[derive(Debug, Clone)]
pub struct ChunkingConfig {
    pub chunk_size: usize,
    pub overlap: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            overlap: 200,
        }
    }
}

impl ChunkingConfig {
    pub fn new(chunk_size: usize, overlap: usize) -> Self {
        Self {
            chunk_size,
            overlap,
        }
    }
}

/// Retrieval defaults.
#[derive(Debug, Clone)]
pub struct RetrievalConfig {
    /// Number of chunks returned per query
    pub top_k: usize,
    /// Concurrent embed+store operations per ingestion batch
    pub embed_batch_size: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: 3,
            embed_batch_size: 5,
        }
    }
}

/// Location of the persistent vector store. Each namespace maps to its own
/// file under `dir`, so multiple logical stores can coexist.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub dir: PathBuf,
    pub namespace: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        let dir = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("course-advisor");
        Self {
            dir,
            namespace: "vector-store".to_string(),
        }
    }
}

impl StoreConfig {
    /// Default config, with the store directory overridden when given.
    pub fn with_dir(dir: Option<PathBuf>) -> Self {
        let mut config = Self::default();
        if let Some(dir) = dir {
            config.dir = dir;
        }
        config
    }

    /// Path of the backing file for this namespace.
    pub fn store_path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.namespace))
    }
}
