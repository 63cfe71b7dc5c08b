//! Per-request outcome records and the collector shared by one run.
mod collector;
mod record;
mod summary;

#[cfg(test)]
mod tests;

pub use collector::ResultCollector;
pub use record::{ERROR_PREFIX, RequestStatus, ResultRecord, TIMESTAMP_FORMAT, format_timestamp};
pub use summary::RunSummary;
