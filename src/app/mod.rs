//! Orchestration of a single run: strategy, CSV sink, upload and cleanup.
mod cleanup;
mod runner;

pub use runner::{build_strategy, execute_strategy, publish_results, run_local};
