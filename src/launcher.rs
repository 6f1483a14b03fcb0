//! The resolve-and-launch pipeline.
//!
//! A single linear pass: platform key → companion package → install root →
//! executable path → spawn. The two resolution guards fail before anything
//! is executed; from the spawn on, the child owns the terminal and its exit
//! status becomes ours.

use std::env;
use std::ffi::OsString;

use launcher_core::config::LauncherConfig;
use launcher_core::exec;
use launcher_core::package::locate;
use launcher_core::platform::{registry, PlatformKey};
use launcher_core::LauncherResult;
use tracing::debug;

/// Resolve the host platform to its companion package and run the bundled
/// binary, returning the exit code the launcher should terminate with
pub fn run() -> LauncherResult<i32> {
    // Everything after the program name is forwarded verbatim
    let args: Vec<OsString> = env::args_os().skip(1).collect();

    let key = PlatformKey::current()?;
    let package = registry::package_for(&key)?;
    debug!(%key, package, "resolved platform");

    let config = LauncherConfig::load()?;
    let package_root = locate::locate_package(&config, package)?;

    let executable = package_root.join("bin").join(key.executable_name());
    exec::run(&executable, &args)
}
