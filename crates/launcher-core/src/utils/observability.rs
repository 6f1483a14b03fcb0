use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{error, warn};
use console::style;

//-------------------------------------------------------------------------------
// Error Handling
//-------------------------------------------------------------------------------

/// Centralized error type for launcher operations
#[derive(Error, Debug)]
pub enum LauncherError {
    #[error("unsupported platform {key}. Supported: {supported}")]
    UnsupportedPlatform {
        key: String,
        supported: String,
    },

    #[error("could not find the platform package \"{package}\" after probing {searched} install root(s). Try reinstalling getapi-cli")]
    MissingPackage {
        package: String,
        searched: usize,
    },

    #[error("failed to launch {}: {}", .path.display(), .source)]
    LaunchFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} terminated abnormally without an exit code", .path.display())]
    AbnormalExit {
        path: PathBuf,
    },

    #[error("configuration error at {}: {}", .path.display(), .message)]
    Config {
        path: PathBuf,
        message: String,
    },

    #[error("invalid package name: {0}")]
    InvalidPackageName(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

/// Centralized Result type for launcher operations
pub type LauncherResult<T> = std::result::Result<T, LauncherError>;

//-------------------------------------------------------------------------------
// Diagnostics
//-------------------------------------------------------------------------------

/// Print an error message to stderr
pub fn log_error(message: &str) {
    error!("{}", message);
    eprintln!("{} {}", style("✗").bold().red(), message);
}

/// Print a warning message to stderr
pub fn log_warning(message: &str) {
    warn!("{}", message);
    eprintln!("{} {}", style("!").bold().yellow(), message);
}
