use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the tracing filter directive
pub const LOG_ENV: &str = "GETAPI_LAUNCHER_LOG";

/// Initialize the logger.
///
/// Diagnostics go to stderr so the child's stdout passes through untouched;
/// the default filter keeps the launcher silent unless the operator opts in.
pub fn init_logger() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
