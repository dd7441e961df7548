mod args;
mod ask;
mod courses;
mod ingest;
mod search;

pub use args::{Args, Command};
pub use ask::run_ask;
pub use courses::run_courses;
pub use ingest::{run_clear, run_ingest, run_status};
pub use search::run_search;
