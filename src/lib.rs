//! Core library for the `loadprobe` CLI.
//!
//! The binary parses its settings, runs one load test strategy against a
//! single URL, writes every request outcome to a CSV file and optionally
//! uploads that file to a Cloud Storage bucket. The modules below are the
//! building blocks of that flow.
pub mod app;
pub mod args;
pub mod config;
pub mod entry;
pub mod error;
pub mod http;
pub mod logger;
pub mod results;
pub mod sinks;
pub mod strategy;

#[cfg(test)]
mod test_support;
