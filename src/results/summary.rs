use std::time::Duration;

use super::record::ResultRecord;

/// Outcome counts of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub total_requests: u64,
    pub responses: u64,
    pub errors: u64,
    pub elapsed: Duration,
}

impl RunSummary {
    #[must_use]
    pub fn from_records(records: &[ResultRecord], elapsed: Duration) -> Self {
        let mut summary = Self {
            total_requests: 0,
            responses: 0,
            errors: 0,
            elapsed,
        };
        for record in records {
            summary.total_requests = summary.total_requests.saturating_add(1);
            if record.status.is_error() {
                summary.errors = summary.errors.saturating_add(1);
            } else {
                summary.responses = summary.responses.saturating_add(1);
            }
        }
        summary
    }
}
