use clap::Parser;

use super::defaults::{
    DEFAULT_BUCKET, DEFAULT_OUTPUT_DIR, DEFAULT_STORAGE_ENDPOINT, DEFAULT_TEST_TYPE, DEFAULT_URL,
};
use super::parsers::{parse_bool_env, parse_positive_usize, parse_seconds};
use super::types::{PositiveUsize, Seconds};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Minimal HTTP load tester - simple, stress, spike, endurance and ramp-up patterns with CSV output and optional Cloud Storage upload."
)]
pub struct TesterArgs {
    /// URL to test
    #[arg(long, short, default_value = DEFAULT_URL)]
    pub url: String,

    /// Type of load test: simple, stress, spike, endurance, or ramp_up
    #[arg(long = "type", short = 't', default_value = DEFAULT_TEST_TYPE)]
    pub test_type: String,

    /// Number of iterations for simple test
    #[arg(long, default_value_t = 1)]
    pub iterations: u64,

    /// Number of concurrent requests for stress test
    #[arg(
        long = "concurrentRequests",
        alias = "concurrent-requests",
        default_value_t = 5
    )]
    pub concurrent_requests: usize,

    /// Number of spikes for spike test
    #[arg(long, default_value_t = 3)]
    pub spikes: u64,

    /// Interval between spikes in seconds
    #[arg(
        long = "spikeInterval",
        alias = "spike-interval",
        default_value = "1.0",
        value_parser = parse_seconds
    )]
    pub spike_interval: Seconds,

    /// Duration of the endurance test in seconds
    #[arg(long, default_value = "300.0", value_parser = parse_seconds)]
    pub duration: Seconds,

    /// Maximum number of users for ramp up test
    #[arg(
        long = "maxUsers",
        alias = "max-users",
        default_value = "10",
        value_parser = parse_positive_usize
    )]
    pub max_users: PositiveUsize,

    /// Ramp up period in seconds
    #[arg(long = "rampUpPeriod", alias = "ramp-up-period", default_value_t = 10)]
    pub ramp_up_period: u64,

    /// Cloud Storage bucket name
    #[arg(long, default_value = DEFAULT_BUCKET)]
    pub bucket: String,

    /// Skip the upload and only keep the CSV locally
    #[arg(long = "nocloud", alias = "no-cloud")]
    pub no_cloud: bool,

    /// Directory the results CSV is written to
    #[arg(long = "output-dir", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: String,

    /// Cloud Storage endpoint used for uploads
    #[arg(
        long = "storage-endpoint",
        env = "LOADPROBE_STORAGE_ENDPOINT",
        default_value = DEFAULT_STORAGE_ENDPOINT
    )]
    pub storage_endpoint: String,

    /// Path to config file (TOML/JSON). Defaults to ./loadprobe.toml or ./loadprobe.json if present.
    #[arg(long)]
    pub config: Option<String>,

    /// Enable verbose logging (sets log level to debug unless overridden by LOADPROBE_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,
}
