use std::cmp::Ordering;
use std::sync::Arc;
use tokio::task::JoinSet;

use crate::config::RetrievalConfig;
use crate::embedder::EmbeddingService;
use crate::error::{AdvisorError, Result};
use crate::store::{cosine_similarity, DocumentChunk, RetrievedChunk, VectorRecord, VectorStore};

/// Ties the chunk pipeline together: embeds chunks into the vector store and
/// answers queries with the top-K most similar stored chunks.
pub struct Retriever {
    store: Arc<dyn VectorStore>,
    embeddings: Arc<EmbeddingService>,
    batch_size: usize,
}

impl Retriever {
    pub fn new(store: Arc<dyn VectorStore>, embeddings: Arc<EmbeddingService>) -> Self {
        Self::with_config(store, embeddings, &RetrievalConfig::default())
    }

    pub fn with_config(
        store: Arc<dyn VectorStore>,
        embeddings: Arc<EmbeddingService>,
        config: &RetrievalConfig,
    ) -> Self {
        Self {
            store,
            embeddings,
            batch_size: config.embed_batch_size.max(1),
        }
    }

    /// Embed and store a set of chunks. Chunks are processed in fixed-size
    /// batches; within a batch the embed+put operations run concurrently and
    /// the whole batch completes before the next starts, bounding peak
    /// memory and model-queue pressure. The first failure aborts the
    /// ingestion; records written by completed batches stay in the store.
    ///
    /// Returns the number of records written.
    pub async fn ingest(&self, chunks: Vec<DocumentChunk>) -> Result<usize> {
        if chunks.is_empty() {
            return Ok(0);
        }

        self.store.load().await?;

        let mut stored = 0usize;
        for batch in chunks.chunks(self.batch_size) {
            let mut tasks: JoinSet<Result<()>> = JoinSet::new();

            for chunk in batch.iter().cloned() {
                let store = Arc::clone(&self.store);
                let embeddings = Arc::clone(&self.embeddings);
                tasks.spawn(async move {
                    let embedding = embeddings.embed(&chunk.text).await?;
                    store.put(VectorRecord::new(chunk, embedding)).await
                });
            }

            while let Some(joined) = tasks.join_next().await {
                match joined {
                    Ok(Ok(())) => stored += 1,
                    Ok(Err(e)) => {
                        tasks.abort_all();
                        return Err(e);
                    }
                    Err(e) => {
                        tasks.abort_all();
                        return Err(AdvisorError::embedding(format!(
                            "ingestion task failed: {}",
                            e
                        )));
                    }
                }
            }
        }

        self.store.persist().await?;
        Ok(stored)
    }

    /// Return the `top_k` stored chunks most similar to the query, ordered
    /// by descending cosine similarity. An empty store yields an empty
    /// result. The query is embedded once; every stored record is scored.
    pub async fn retrieve(&self, query: &str, top_k: usize) -> Result<Vec<RetrievedChunk>> {
        self.store.load().await?;

        let query_vector = self.embeddings.embed(query).await?;
        let records = self.store.iterate_all().await?;

        let mut scored: Vec<(f32, &VectorRecord)> = records
            .iter()
            .map(|r| (cosine_similarity(&query_vector, &r.embedding), r))
            .collect();

        // Stable sort: ties keep the store's iteration order.
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
        scored.truncate(top_k);

        Ok(scored.into_iter().map(|(_, r)| r.into()).collect())
    }
}
