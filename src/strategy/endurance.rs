use std::time::Duration;

use tokio::time::Instant;

use crate::http::SharedExecutor;
use crate::results::ResultCollector;

/// Sequential requests until a wall-clock budget runs out.
///
/// The deadline is checked between requests only; the request in flight when
/// it passes is allowed to finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endurance {
    pub duration: Duration,
}

impl Endurance {
    pub async fn run(&self, executor: &SharedExecutor, url: &str, collector: &ResultCollector) {
        // An unrepresentable deadline means the run never expires.
        let deadline = Instant::now().checked_add(self.duration);
        while deadline.is_none_or(|deadline| Instant::now() < deadline) {
            collector.append(executor.execute(url).await);
        }
    }
}
