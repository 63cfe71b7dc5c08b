use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{PositiveUsize, Seconds, TesterArgs};
use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Applies file settings to `args` wherever the flag was not given explicitly
/// on the command line.
///
/// # Errors
///
/// Returns an error when a file value is out of range.
pub fn apply_config(
    args: &mut TesterArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    apply_target_config(args, matches, config);
    apply_load_config(args, matches, config)?;
    apply_output_config(args, matches, config);
    Ok(())
}

fn apply_target_config(args: &mut TesterArgs, matches: &ArgMatches, config: &ConfigFile) {
    if !is_cli(matches, "url")
        && let Some(url) = config.url.clone()
    {
        args.url = url;
    }

    if !is_cli(matches, "test_type")
        && let Some(test_type) = config.test_type.clone()
    {
        args.test_type = test_type;
    }
}

fn apply_load_config(
    args: &mut TesterArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_cli(matches, "iterations")
        && let Some(value) = config.iterations
    {
        args.iterations = value;
    }

    if !is_cli(matches, "concurrent_requests")
        && let Some(value) = config.concurrent_requests
    {
        args.concurrent_requests = value;
    }

    if !is_cli(matches, "spikes")
        && let Some(value) = config.spikes
    {
        args.spikes = value;
    }

    if !is_cli(matches, "spike_interval")
        && let Some(value) = config.spike_interval
    {
        args.spike_interval = ensure_seconds(value, "spike_interval")?;
    }

    if !is_cli(matches, "duration")
        && let Some(value) = config.duration
    {
        args.duration = ensure_seconds(value, "duration")?;
    }

    if !is_cli(matches, "max_users")
        && let Some(value) = config.max_users
    {
        args.max_users = ensure_positive_usize(value, "max_users")?;
    }

    if !is_cli(matches, "ramp_up_period")
        && let Some(value) = config.ramp_up_period
    {
        args.ramp_up_period = value;
    }

    Ok(())
}

fn apply_output_config(args: &mut TesterArgs, matches: &ArgMatches, config: &ConfigFile) {
    if !is_cli(matches, "bucket")
        && let Some(bucket) = config.bucket.clone()
    {
        args.bucket = bucket;
    }

    if !is_cli(matches, "no_cloud")
        && let Some(value) = config.nocloud
    {
        args.no_cloud = value;
    }

    if !is_cli(matches, "output_dir")
        && let Some(dir) = config.output_dir.clone()
    {
        args.output_dir = dir;
    }

    if !is_cli(matches, "storage_endpoint")
        && let Some(endpoint) = config.storage_endpoint.clone()
    {
        args.storage_endpoint = endpoint;
    }

    if !is_cli(matches, "verbose")
        && let Some(value) = config.verbose
    {
        args.verbose = value;
    }

    if !is_cli(matches, "no_color")
        && let Some(value) = config.no_color
    {
        args.no_color = value;
    }
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn ensure_positive_usize(value: usize, field: &'static str) -> AppResult<PositiveUsize> {
    PositiveUsize::try_from(value)
        .map_err(|err| AppError::config(ConfigError::InvalidField { field, source: err }))
}

fn ensure_seconds(value: f64, field: &'static str) -> AppResult<Seconds> {
    Seconds::try_from(value)
        .map_err(|err| AppError::config(ConfigError::InvalidField { field, source: err }))
}
