use clap::Parser;

use course_advisor::cli::{self, Args, Command};
use course_advisor::config::{ChunkingConfig, StoreConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let store_config = StoreConfig::with_dir(args.store_dir);

    match args.command {
        Command::Ingest {
            file,
            source,
            chunk_size,
            overlap,
        } => {
            let chunking = ChunkingConfig::new(chunk_size, overlap);
            cli::run_ingest(&file, source, &chunking, &store_config).await
        }
        Command::Search { query, limit, json } => {
            cli::run_search(&query, limit, json, &store_config).await
        }
        Command::Ask { query } => cli::run_ask(&query, &store_config).await,
        Command::Courses { query, json } => cli::run_courses(&query, json),
        Command::Status => cli::run_status(&store_config).await,
        Command::Clear => cli::run_clear(&store_config).await,
    }
}
