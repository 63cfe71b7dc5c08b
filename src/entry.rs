use std::process::ExitCode;

use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tracing::error;

use crate::app;
use crate::args::TesterArgs;
use crate::error::AppResult;

/// Parses the command line, runs the requested test and maps the outcome to
/// a process exit code.
#[must_use]
pub fn run() -> ExitCode {
    let matches = TesterArgs::command().get_matches_from(std::env::args_os());
    let mut args = match TesterArgs::from_arg_matches(&matches) {
        Ok(args) => args,
        Err(err) => err.exit(),
    };

    // Config values can change the log settings, so they are applied before
    // logging starts and any failure is reported right after.
    let config_result = apply_config(&mut args, &matches);
    crate::logger::init_logging(args.verbose, args.no_color);

    match config_result.and_then(|()| run_with_runtime(&args)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::from(err.exit_code())
        }
    }
}

fn apply_config(args: &mut TesterArgs, matches: &ArgMatches) -> AppResult<()> {
    if let Some(config) = crate::config::load_config(args.config.as_deref())? {
        crate::config::apply_config(args, matches, &config)?;
    }
    Ok(())
}

fn run_with_runtime(args: &TesterArgs) -> AppResult<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(app::run_local(args))
}
