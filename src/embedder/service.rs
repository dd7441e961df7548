use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::error::Result;

use super::{create_embedder, Embedder, EmbedderConfig};

/// Lazily initialized handle to the embedding backend.
///
/// The backend is created and health-checked exactly once; concurrent first
/// callers wait on the same in-flight initialization instead of each loading
/// their own backend. A failed initialization is not cached, so a later call
/// retries.
pub struct EmbeddingService {
    config: EmbedderConfig,
    backend: OnceCell<Arc<dyn Embedder>>,
}

impl EmbeddingService {
    pub fn new(config: EmbedderConfig) -> Self {
        Self {
            config,
            backend: OnceCell::new(),
        }
    }

    /// Build a service around an already-constructed backend. Used by tests
    /// to inject a mock; skips the health check.
    pub fn with_backend(backend: Arc<dyn Embedder>) -> Self {
        Self {
            config: EmbedderConfig::default(),
            backend: OnceCell::new_with(Some(backend)),
        }
    }

    /// Initialize the backend if it has not been yet.
    pub async fn initialize(&self) -> Result<Arc<dyn Embedder>> {
        self.backend
            .get_or_try_init(|| async {
                let backend = create_embedder(&self.config);
                backend.health_check().await?;
                Ok(backend)
            })
            .await
            .map(Arc::clone)
    }

    pub async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let backend = self.initialize().await?;
        backend.embed(text).await
    }

    pub async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        let backend = self.initialize().await?;
        backend.embed_batch(texts).await
    }

    pub fn dimensions(&self) -> usize {
        self.backend
            .get()
            .map(|b| b.dimensions())
            .unwrap_or(self.config.dimensions)
    }
}
