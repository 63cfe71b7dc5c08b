use std::time::Duration;

use tokio::time::sleep;
use tracing::debug;

use super::stress::burst;
use crate::http::SharedExecutor;
use crate::results::ResultCollector;

/// Concurrency of every spike burst.
pub const SPIKE_CONCURRENCY: usize = 5;

/// Repeated fixed-size bursts separated by idle pauses.
///
/// The pause also follows the last burst.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spike {
    pub spikes: u64,
    pub interval: Duration,
}

impl Spike {
    pub async fn run(&self, executor: &SharedExecutor, url: &str, collector: &ResultCollector) {
        for spike in 1..=self.spikes {
            debug!("Spike {}/{}", spike, self.spikes);
            burst(executor, url, SPIKE_CONCURRENCY, collector).await;
            sleep(self.interval).await;
        }
    }
}
