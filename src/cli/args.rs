use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "course-advisor",
    version,
    about = "Retrieval core for a course-advisor assistant: ingest extracted document text, search it, and query the course catalog"
)]
pub struct Args {
    /// Directory holding the vector store (defaults to the platform data dir)
    #[arg(long, global = true)]
    pub store_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Chunk, embed, and store a document's extracted text
    Ingest {
        /// Plain-text file of extracted page text, pages separated by form feeds
        file: PathBuf,

        /// Document identifier stored with each chunk (defaults to the file name)
        #[arg(long)]
        source: Option<String>,

        /// Maximum chunk size in characters
        #[arg(long, default_value_t = 1000)]
        chunk_size: usize,

        /// Overlap between consecutive chunks in characters
        #[arg(long, default_value_t = 200)]
        overlap: usize,
    },

    /// Retrieve the stored chunks most similar to a query
    Search {
        query: String,

        /// Maximum number of chunks to return
        #[arg(short, long, default_value_t = 3)]
        limit: usize,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Answer a query from the course catalog or from stored document context
    Ask { query: String },

    /// Score the course catalog against a query
    Courses {
        query: String,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show vector store statistics
    Status,

    /// Remove every stored record
    Clear,
}
