// Launcher core - shared components for the getapi launcher

pub mod config;
pub mod exec;
pub mod package;
pub mod platform;
pub mod utils;

// Re-export common types
pub use utils::observability::{LauncherError, LauncherResult};
