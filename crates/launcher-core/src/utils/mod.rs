pub mod observability;

// Re-export commonly used observability items for convenience
pub use observability::{
    LauncherError,
    LauncherResult,
    log_error,
    log_warning,
};
