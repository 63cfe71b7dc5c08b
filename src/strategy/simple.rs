use crate::http::SharedExecutor;
use crate::results::ResultCollector;

/// Fixed number of strictly sequential requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Simple {
    pub iterations: u64,
}

impl Simple {
    pub async fn run(&self, executor: &SharedExecutor, url: &str, collector: &ResultCollector) {
        for _ in 0..self.iterations {
            collector.append(executor.execute(url).await);
        }
    }
}
