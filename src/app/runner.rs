use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tokio::time::Instant;
use tracing::info;

use crate::args::{TestType, TesterArgs};
use crate::error::{AppError, AppResult};
use crate::http::{self, HttpExecutor, SharedExecutor};
use crate::results::{ResultCollector, ResultRecord, RunSummary};
use crate::sinks::{self, HmacCredentials, StorageTarget};
use crate::strategy::{Endurance, RampUp, Simple, Spike, Stress, TestStrategy};

use super::cleanup::cleanup_local_results;

/// Maps the requested test type and its settings onto a strategy.
///
/// # Errors
///
/// Returns `ValidationError::UnknownTestType` when the name is not recognised.
pub fn build_strategy(args: &TesterArgs) -> AppResult<TestStrategy> {
    let test_type: TestType = args.test_type.parse().map_err(AppError::validation)?;
    Ok(match test_type {
        TestType::Simple => TestStrategy::Simple(Simple {
            iterations: args.iterations,
        }),
        TestType::Stress => TestStrategy::Stress(Stress {
            concurrent_requests: args.concurrent_requests,
        }),
        TestType::Spike => TestStrategy::Spike(Spike {
            spikes: args.spikes,
            interval: args.spike_interval.as_duration(),
        }),
        TestType::Endurance => TestStrategy::Endurance(Endurance {
            duration: args.duration.as_duration(),
        }),
        TestType::RampUp => TestStrategy::RampUp(RampUp {
            max_users: args.max_users.as_non_zero(),
            ramp_up_period_secs: args.ramp_up_period,
        }),
    })
}

/// Runs `strategy` to completion and returns every record it produced.
pub async fn execute_strategy(
    strategy: &TestStrategy,
    executor: &SharedExecutor,
    url: &str,
) -> (Vec<ResultRecord>, Duration) {
    let collector = ResultCollector::new();
    info!("Starting {} test against {}", strategy.test_type(), url);
    let started = Instant::now();
    strategy.run(executor, url, &collector).await;
    let elapsed = started.elapsed();
    (collector.drain(), elapsed)
}

/// Full local run: strategy, CSV, then the optional upload and cleanup.
///
/// # Errors
///
/// Returns an error when the test type is unknown, the HTTP client cannot be
/// built, the CSV cannot be written, or the upload fails.
pub async fn run_local(args: &TesterArgs) -> AppResult<()> {
    let strategy = build_strategy(args)?;
    let client = http::build_client()?;
    let executor: SharedExecutor = Arc::new(HttpExecutor::new(client.clone()));

    let (records, elapsed) = execute_strategy(&strategy, &executor, &args.url).await;
    let summary = RunSummary::from_records(&records, elapsed);
    info!(
        "Finished {} requests in {:.3}s ({} responses, {} errors)",
        summary.total_requests,
        summary.elapsed.as_secs_f64(),
        summary.responses,
        summary.errors
    );

    let path = sinks::write_results(Path::new(&args.output_dir), &args.url, &records).await?;
    info!("Results written to {}", path.display());

    if args.no_cloud {
        info!("Cloud upload disabled, keeping {}", path.display());
    } else {
        let credentials = HmacCredentials::from_env().await?;
        let target = StorageTarget {
            endpoint: args.storage_endpoint.clone(),
            bucket: args.bucket.clone(),
        };
        publish_results(&client, &target, &credentials, &path).await?;
    }

    println!("Done!");
    Ok(())
}

/// Uploads the results file and removes the local copy once it is stored.
///
/// # Errors
///
/// Returns the upload error; the local file is kept in that case.
pub async fn publish_results(
    client: &Client,
    target: &StorageTarget,
    credentials: &HmacCredentials,
    path: &Path,
) -> AppResult<()> {
    sinks::upload_results(client, target, credentials, path).await?;
    info!("Uploaded {} to bucket {}", path.display(), target.bucket);
    if cleanup_local_results(path).await {
        info!("Removed local copy {}", path.display());
    }
    Ok(())
}
