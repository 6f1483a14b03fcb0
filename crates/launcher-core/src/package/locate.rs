//! Companion package location.
//!
//! The launcher's only contract with a companion package is the fixed
//! relative path `bin/getapi` inside its install root. Finding that root is
//! an ordered probe over candidate directories: an explicit per-package
//! override from configuration wins outright, then `GETAPI_LAUNCHER_PATH`
//! entries, configured package roots, the per-user package directory, and
//! finally the `libexec` directory next to the launcher itself.

use std::env;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::config::LauncherConfig;
use crate::package::validate;
use crate::utils::{LauncherError, LauncherResult};

/// Environment variable holding extra package roots, using the platform's
/// usual path-list separator
pub const PACKAGE_PATH_ENV: &str = "GETAPI_LAUNCHER_PATH";

/// Ordered candidate directories that may contain companion packages
pub fn search_roots(config: &LauncherConfig, launcher_exe: Option<&Path>) -> Vec<PathBuf> {
    let mut roots = Vec::new();

    if let Some(paths) = env::var_os(PACKAGE_PATH_ENV) {
        roots.extend(env::split_paths(&paths));
    }

    for root in &config.package_roots {
        roots.push(PathBuf::from(shellexpand::tilde(root).into_owned()));
    }

    if let Some(home) = dirs::home_dir() {
        roots.push(home.join(".getapi").join("packages"));
    }

    // Relocatable install layout: shim in bin/, payloads in libexec/
    if let Some(bin_dir) = launcher_exe.and_then(Path::parent) {
        roots.push(bin_dir.join("..").join("libexec"));
    }

    roots
}

/// Resolve the install root of `package`, or fail naming it
pub fn locate_package(config: &LauncherConfig, package: &str) -> LauncherResult<PathBuf> {
    validate::validate_package_name(package)?;

    // An explicit override is authoritative: a wrong path is an error, not a
    // reason to fall back to searching
    if let Some(configured) = config.packages.get(package) {
        let root = PathBuf::from(shellexpand::tilde(configured).into_owned());
        trace!(package, root = %root.display(), "probing configured override");
        if root.is_dir() {
            debug!(package, root = %root.display(), "located platform package");
            return Ok(root);
        }
        return Err(LauncherError::MissingPackage {
            package: package.to_string(),
            searched: 1,
        });
    }

    let launcher_exe = env::current_exe().ok();
    let roots = search_roots(config, launcher_exe.as_deref());

    for root in &roots {
        let candidate = root.join(package);
        trace!(root = %root.display(), "probing package root");
        if candidate.is_dir() {
            debug!(package, root = %candidate.display(), "located platform package");
            return Ok(candidate);
        }
    }

    Err(LauncherError::MissingPackage {
        package: package.to_string(),
        searched: roots.len(),
    })
}
