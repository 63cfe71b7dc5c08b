use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Local};

/// Layout of the attempt start time (local time, second precision).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Prefix of the rendered status of an attempt that got no response.
pub const ERROR_PREFIX: &str = "Error: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestStatus {
    /// Status line of the received response, e.g. `200 OK`.
    Response(String),
    /// Why the request could not be completed.
    Error(String),
}

impl RequestStatus {
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Response(line) => f.write_str(line),
            Self::Error(description) => write!(f, "{}{}", ERROR_PREFIX, description),
        }
    }
}

/// Outcome of a single request attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRecord {
    pub url: String,
    pub status: RequestStatus,
    pub response_time: Duration,
    pub timestamp: String,
}

impl ResultRecord {
    #[must_use]
    pub fn new(
        url: &str,
        status: RequestStatus,
        started_at: DateTime<Local>,
        response_time: Duration,
    ) -> Self {
        Self {
            url: url.to_owned(),
            status,
            response_time,
            timestamp: format_timestamp(started_at),
        }
    }

    #[must_use]
    pub fn response_time_secs(&self) -> f64 {
        self.response_time.as_secs_f64()
    }
}

#[must_use]
pub fn format_timestamp(at: DateTime<Local>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}
