//! Launcher configuration.
//!
//! Entirely optional: the launcher works with no configuration at all. A
//! TOML file can add package search roots or pin an exact install root for a
//! named companion package, for installs that do not follow the default
//! layout.
//!
//! ```toml
//! package_roots = ["~/.getapi/packages", "/opt/getapi/lib"]
//!
//! [packages]
//! "getapi-cli-linux-x64" = "/opt/getapi/lib/getapi-cli-linux-x64"
//! ```

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::package::validate;
use crate::utils::{LauncherError, LauncherResult};

/// Environment variable overriding the configuration file path
pub const CONFIG_PATH_ENV: &str = "GETAPI_LAUNCHER_CONFIG";

/// User-supplied package location configuration
#[derive(Debug, Default, Deserialize)]
pub struct LauncherConfig {
    /// Directories searched for companion packages, in order
    #[serde(default)]
    pub package_roots: Vec<String>,

    /// Exact install root per package name, overriding the search
    #[serde(default)]
    pub packages: BTreeMap<String, String>,
}

impl LauncherConfig {
    /// Load the active configuration.
    ///
    /// An explicitly requested file (via the environment override) must
    /// exist and parse; a missing file at the default location just means
    /// defaults.
    pub fn load() -> LauncherResult<Self> {
        if let Some(path) = env::var_os(CONFIG_PATH_ENV).map(PathBuf::from) {
            return Self::from_file(&path);
        }

        match default_config_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> LauncherResult<Self> {
        let raw = fs::read_to_string(path).map_err(|e| LauncherError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let config: Self = toml::from_str(&raw).map_err(|e| LauncherError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        for name in config.packages.keys() {
            validate::validate_package_name(name)?;
        }

        debug!(path = %path.display(), roots = config.package_roots.len(), "loaded launcher configuration");
        Ok(config)
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".getapi").join("launcher.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_roots_and_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
package_roots = ["~/.getapi/packages", "/opt/getapi/lib"]

[packages]
"getapi-cli-linux-x64" = "/opt/getapi/lib/getapi-cli-linux-x64"
"#
        )
        .unwrap();

        let config = LauncherConfig::from_file(file.path()).unwrap();
        assert_eq!(config.package_roots.len(), 2);
        assert_eq!(
            config.packages.get("getapi-cli-linux-x64").map(String::as_str),
            Some("/opt/getapi/lib/getapi-cli-linux-x64")
        );
    }

    #[test]
    fn empty_file_means_defaults() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = LauncherConfig::from_file(file.path()).unwrap();
        assert!(config.package_roots.is_empty());
        assert!(config.packages.is_empty());
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "package_roots = not-a-list").unwrap();

        let err = LauncherConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, LauncherError::Config { .. }));
    }

    #[test]
    fn invalid_package_names_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[packages]
"../escape" = "/tmp"
"#
        )
        .unwrap();

        let err = LauncherConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, LauncherError::InvalidPackageName(_)));
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = LauncherConfig::from_file(Path::new("/nonexistent/launcher.toml")).unwrap_err();
        assert!(matches!(err, LauncherError::Config { .. }));
    }
}
