//! Output sinks for the drained results of a run.
pub mod csv;
pub mod storage;

pub use csv::{CSV_HEADER, export_csv, results_filename, sanitize_url, write_results};
pub use storage::{HmacCredentials, StorageTarget, object_url, upload_results};
