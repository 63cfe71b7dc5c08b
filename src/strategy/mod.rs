//! Load patterns that schedule requests against a single target.
//!
//! Every strategy runs to completion before returning and appends exactly one
//! record per issued request to the collector it is handed.
mod endurance;
mod ramp_up;
mod simple;
mod spike;
mod stress;


pub use endurance::Endurance;
pub use ramp_up::RampUp;
pub use simple::Simple;
pub use spike::{SPIKE_CONCURRENCY, Spike};
pub use stress::Stress;

use crate::args::TestType;
use crate::http::SharedExecutor;
use crate::results::ResultCollector;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestStrategy {
    Simple(Simple),
    Stress(Stress),
    Spike(Spike),
    Endurance(Endurance),
    RampUp(RampUp),
}

impl TestStrategy {
    pub async fn run(&self, executor: &SharedExecutor, url: &str, collector: &ResultCollector) {
        match self {
            Self::Simple(strategy) => strategy.run(executor, url, collector).await,
            Self::Stress(strategy) => strategy.run(executor, url, collector).await,
            Self::Spike(strategy) => strategy.run(executor, url, collector).await,
            Self::Endurance(strategy) => strategy.run(executor, url, collector).await,
            Self::RampUp(strategy) => strategy.run(executor, url, collector).await,
        }
    }

    #[must_use]
    pub const fn test_type(&self) -> TestType {
        match self {
            Self::Simple(_) => TestType::Simple,
            Self::Stress(_) => TestType::Stress,
            Self::Spike(_) => TestType::Spike,
            Self::Endurance(_) => TestType::Endurance,
            Self::RampUp(_) => TestType::RampUp,
        }
    }
}
