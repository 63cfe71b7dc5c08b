use std::num::NonZeroUsize;
use std::time::Duration;

use tokio::time::sleep;
use tracing::debug;

use super::stress::burst;
use crate::http::SharedExecutor;
use crate::results::ResultCollector;

/// Bursts of 1, 2, ..., `max_users` concurrent requests.
///
/// Each burst is followed by the same pause of `ramp_up_period_secs /
/// max_users` whole seconds (integer division), including the last one. A
/// period shorter than `max_users` therefore yields no pause at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RampUp {
    pub max_users: NonZeroUsize,
    pub ramp_up_period_secs: u64,
}

impl RampUp {
    // TODO: offer a fractional step pause (`Duration::from_secs(period) / users`)
    // behind a flag so existing pacing stays reproducible.
    #[must_use]
    pub fn step_pause(&self) -> Duration {
        let users = u64::try_from(self.max_users.get()).unwrap_or(u64::MAX);
        Duration::from_secs(self.ramp_up_period_secs.checked_div(users).unwrap_or(0))
    }

    pub async fn run(&self, executor: &SharedExecutor, url: &str, collector: &ResultCollector) {
        let pause = self.step_pause();
        for users in 1..=self.max_users.get() {
            debug!("Ramp-up step with {} users", users);
            burst(executor, url, users, collector).await;
            sleep(pause).await;
        }
    }
}
