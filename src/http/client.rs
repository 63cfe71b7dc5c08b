use reqwest::Client;

use crate::error::{AppError, AppResult, HttpError};

/// Builds the client shared by every request of a run.
///
/// Transport defaults (timeouts, redirects, pooling) are left untouched.
///
/// # Errors
///
/// Returns an error when the TLS backend cannot be initialised.
pub fn build_client() -> AppResult<Client> {
    Client::builder()
        .build()
        .map_err(|err| AppError::http(HttpError::BuildClientFailed { source: err }))
}
