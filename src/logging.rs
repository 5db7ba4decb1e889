use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Environment variable that overrides the `-v` derived log filter.
pub const LOG_ENV: &str = "PATCHLET_LOG";

/// Maps the `-v` count to a default filter directive.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Installs the global subscriber. Logs go to stderr so stdout carries only the report.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    fmt::Subscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
