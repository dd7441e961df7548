use anyhow::Result;
use console::{style, Emoji};
use std::sync::Arc;

use crate::config::StoreConfig;
use crate::embedder::{EmbedderConfig, EmbeddingService};
use crate::retriever::Retriever;
use crate::store::{JsonStore, VectorStore};

static SEARCH: Emoji<'_, '_> = Emoji("🔍 ", "");
static PAGE: Emoji<'_, '_> = Emoji("📄 ", "");

pub async fn run_search(
    query: &str,
    limit: usize,
    json: bool,
    store_config: &StoreConfig,
) -> Result<()> {
    let store_path = store_config.store_path();
    if !store_path.exists() {
        anyhow::bail!("no vector store found; run `course-advisor ingest <file>` first");
    }

    let embeddings = Arc::new(EmbeddingService::new(EmbedderConfig::default()));
    let store: Arc<dyn VectorStore> = Arc::new(JsonStore::at_path(store_path));
    let retriever = Retriever::new(store, embeddings);

    let results = retriever.retrieve(query, limit).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No results found for: {}", style(query).italic());
        return Ok(());
    }

    println!(
        "\n{}Found {} chunks for: {}\n",
        SEARCH,
        style(results.len()).cyan(),
        style(query).yellow().bold()
    );

    for (i, chunk) in results.iter().enumerate() {
        println!(
            "{} {}. {} {}",
            PAGE,
            style(i + 1).dim(),
            style(&chunk.metadata.source).green(),
            style(format!("(page {})", chunk.metadata.page)).dim()
        );

        let preview: String = chunk.text.chars().take(200).collect();
        if preview.chars().count() < chunk.text.chars().count() {
            println!("   {}...", style(preview).dim());
        } else {
            println!("   {}", style(preview).dim());
        }
        println!();
    }

    Ok(())
}
