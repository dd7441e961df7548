pub mod catalog;
pub mod chunker;
pub mod cli;
pub mod config;
pub mod embedder;
pub mod error;
pub mod retriever;
pub mod store;

pub use error::{AdvisorError, Result};
