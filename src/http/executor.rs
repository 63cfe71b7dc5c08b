use std::sync::Arc;

use async_trait::async_trait;
use chrono::Local;
use reqwest::{Client, StatusCode};
use tokio::time::Instant;
use tracing::warn;

use crate::results::{RequestStatus, ResultRecord};

/// Performs one attempt against a target and reports the outcome as data.
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    /// Issues a single request. Failures are folded into the returned record,
    /// never surfaced to the caller.
    async fn execute(&self, url: &str) -> ResultRecord;
}

pub type SharedExecutor = Arc<dyn RequestExecutor>;

/// Plain `GET` executor: no headers, no body, no retry.
#[derive(Debug, Clone)]
pub struct HttpExecutor {
    client: Client,
}

impl HttpExecutor {
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RequestExecutor for HttpExecutor {
    async fn execute(&self, url: &str) -> ResultRecord {
        let started_at = Local::now();
        let start = Instant::now();
        let outcome = self.client.get(url).send().await;
        let response_time = start.elapsed();

        let status = match outcome {
            Ok(response) => {
                let line = status_line(response.status());
                // Body is never read; dropping releases the connection.
                drop(response);
                RequestStatus::Response(line)
            }
            Err(err) => {
                let description = describe_error(&err);
                warn!("Request to {} failed: {}", url, description);
                RequestStatus::Error(description)
            }
        };

        ResultRecord::new(url, status, started_at, response_time)
    }
}

pub(super) fn status_line(status: StatusCode) -> String {
    status.canonical_reason().map_or_else(
        || status.as_str().to_owned(),
        |reason| format!("{} {}", status.as_str(), reason),
    )
}

/// Renders an error with its source chain, skipping causes that the outer
/// message already repeats.
pub(super) fn describe_error(err: &(dyn std::error::Error + 'static)) -> String {
    let mut description = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !description.contains(&text) {
            description.push_str(": ");
            description.push_str(&text);
        }
        source = cause.source();
    }
    description
}
