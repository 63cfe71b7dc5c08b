//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
mod test_support;

pub use cli::TesterArgs;
pub use defaults::{
    DEFAULT_BUCKET, DEFAULT_OUTPUT_DIR, DEFAULT_STORAGE_ENDPOINT, DEFAULT_TEST_TYPE, DEFAULT_URL,
};
pub use types::{PositiveUsize, Seconds, TestType};

#[cfg(test)]
pub(crate) use test_support::parse_test_args;
