use anyhow::Result;
use console::{style, Emoji};
use std::sync::Arc;

use crate::catalog::{generate_course_response, is_course_related_query, sample_catalog};
use crate::config::{RetrievalConfig, StoreConfig};
use crate::embedder::{EmbedderConfig, EmbeddingService};
use crate::retriever::Retriever;
use crate::store::{JsonStore, VectorStore};

static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "");

/// The advisor flow: course-looking queries are answered from the catalog;
/// anything else is answered with retrieved document context. A retrieval
/// failure degrades to an empty context instead of aborting.
pub async fn run_ask(query: &str, store_config: &StoreConfig) -> Result<()> {
    if is_course_related_query(query) {
        println!("{}", generate_course_response(query, sample_catalog()));
        return Ok(());
    }

    let embeddings = Arc::new(EmbeddingService::new(EmbedderConfig::default()));
    let store: Arc<dyn VectorStore> =
        Arc::new(JsonStore::at_path(store_config.store_path()));
    let retriever = Retriever::new(store, embeddings);

    let top_k = RetrievalConfig::default().top_k;
    let context = match retriever.retrieve(query, top_k).await {
        Ok(chunks) => chunks,
        Err(e) => {
            eprintln!(
                "{}Retrieval failed, continuing without document context: {}",
                WARN,
                style(e).red()
            );
            Vec::new()
        }
    };

    if context.is_empty() {
        println!(
            "I don't have any uploaded document context for that. \
             Try `course-advisor ingest <file>` or ask about courses."
        );
        return Ok(());
    }

    println!("Here's what your uploaded documents say:\n");
    for chunk in &context {
        println!(
            "{} {}",
            style(format!(
                "[{} p.{}]",
                chunk.metadata.source, chunk.metadata.page
            ))
            .dim(),
            chunk.text
        );
        println!();
    }

    Ok(())
}
