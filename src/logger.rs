use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Environment variable that overrides the log filter ahead of `RUST_LOG`.
pub const LOG_ENV: &str = "LOADPROBE_LOG";

pub fn init_logging(verbose: bool, no_color: bool) {
    let filter = build_filter(
        std::env::var(LOG_ENV)
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok(),
        verbose,
    );

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}

fn build_filter(directive: Option<String>, verbose: bool) -> EnvFilter {
    let fallback = if verbose { "debug" } else { "info" };
    directive.map_or_else(
        || EnvFilter::new(fallback),
        |value| EnvFilter::try_new(value).unwrap_or_else(|_| EnvFilter::new(fallback)),
    )
}
