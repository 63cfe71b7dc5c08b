use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use tokio::task::JoinSet;
use tracing::{debug, error};

use crate::http::SharedExecutor;
use crate::results::{RequestStatus, ResultCollector, ResultRecord};

/// One burst of concurrent requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stress {
    pub concurrent_requests: usize,
}

impl Stress {
    pub async fn run(&self, executor: &SharedExecutor, url: &str, collector: &ResultCollector) {
        burst(executor, url, self.concurrent_requests, collector).await;
    }
}

/// Starts `concurrency` requests without ordering between them and returns
/// once every one has completed and appended its record. A task that dies
/// before producing a record is recorded as an error instead.
pub(super) async fn burst(
    executor: &SharedExecutor,
    url: &str,
    concurrency: usize,
    collector: &ResultCollector,
) {
    if concurrency == 0 {
        return;
    }
    debug!("Starting burst of {} requests", concurrency);

    let target: Arc<str> = Arc::from(url);
    let mut tasks = JoinSet::new();
    for _ in 0..concurrency {
        let executor = Arc::clone(executor);
        let target = Arc::clone(&target);
        let collector = collector.clone();
        tasks.spawn(async move {
            let record = executor.execute(&target).await;
            collector.append(record);
        });
    }

    while let Some(joined) = tasks.join_next().await {
        if let Err(err) = joined {
            error!("Request task failed: {}", err);
            collector.append(ResultRecord::new(
                url,
                RequestStatus::Error(format!("request task failed: {}", err)),
                Local::now(),
                Duration::ZERO,
            ));
        }
    }
    debug!("Burst of {} requests finished", concurrency);
}
