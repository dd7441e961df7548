use anyhow::Result;
use console::{style, Emoji};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::chunker::chunk_document;
use crate::config::{ChunkingConfig, StoreConfig};
use crate::embedder::{EmbedderConfig, EmbeddingService};
use crate::retriever::Retriever;
use crate::store::{JsonStore, VectorStore};

static INGEST: Emoji<'_, '_> = Emoji("📥 ", "");
static SUCCESS: Emoji<'_, '_> = Emoji("✅ ", "");
static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "");
static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "");

pub async fn run_ingest(
    file: &Path,
    source: Option<String>,
    chunking: &ChunkingConfig,
    store_config: &StoreConfig,
) -> Result<()> {
    let text = fs::read_to_string(file)?;
    let source = source.unwrap_or_else(|| {
        file.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.display().to_string())
    });

    let chunks = chunk_document(&text, &source, chunking);
    if chunks.is_empty() {
        anyhow::bail!("no text to ingest in {}", file.display());
    }
    let chunk_count = chunks.len();

    println!("{}Checking embedding backend...", INFO);
    let embeddings = Arc::new(EmbeddingService::new(EmbedderConfig::default()));
    embeddings.initialize().await?;

    let store: Arc<dyn VectorStore> = Arc::new(JsonStore::new(
        &store_config.dir,
        &store_config.namespace,
    ));
    let retriever = Retriever::new(Arc::clone(&store), embeddings);

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(format!(
        "{}Embedding {} chunks from {}...",
        INGEST, chunk_count, source
    ));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let stored = retriever.ingest(chunks).await?;

    pb.finish_and_clear();

    println!("\n{}Ingestion complete!\n", SUCCESS);
    println!("  Source:          {}", style(&source).green());
    println!("  Chunks stored:   {}", style(stored).cyan());
    println!(
        "  Store:           {}",
        style(store_config.store_path().display()).dim()
    );

    Ok(())
}

pub async fn run_status(store_config: &StoreConfig) -> Result<()> {
    let store_path = store_config.store_path();

    if !store_path.exists() {
        println!("{}No vector store found at {}", INFO, store_path.display());
        println!("Run `course-advisor ingest <file>` to build one.");
        return Ok(());
    }

    let store = JsonStore::at_path(store_path.clone());
    store.load().await?;

    println!("\n{}Vector store: {}\n", INFO, store_path.display());
    println!(
        "  Records:   {}",
        style(store.count().await?).cyan()
    );
    let size = fs::metadata(&store_path)?.len();
    println!("  Size:      {} KB", style(size / 1024).yellow());

    Ok(())
}

/// Reset flow: a failing clear is reported as a notice, not an error, so the
/// surrounding session keeps going.
pub async fn run_clear(store_config: &StoreConfig) -> Result<()> {
    let store = JsonStore::at_path(store_config.store_path());

    match store.clear().await {
        Ok(()) => println!("{}Vector store cleared.", SUCCESS),
        Err(e) => println!("{}Could not clear the vector store: {}", WARN, style(e).red()),
    }

    Ok(())
}
