//! Input validation for package identifiers.
//!
//! Package names reaching the resolver come from the static registry or from
//! user-editable configuration. Configured names are validated against a
//! restrictive pattern before they are joined into filesystem paths.

use lazy_static::lazy_static;
use regex::Regex;

use crate::utils::{LauncherError, LauncherResult};

lazy_static! {
    // Allows alphanumeric characters, dashes, underscores, and dots.
    // More restrictive than the package registry technically allows, but it
    // rules out separators and anything path-like.
    static ref PACKAGE_NAME_REGEX: Regex = Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9_\-\.]*$").unwrap();
}

/// Validate a companion package name
pub fn validate_package_name(name: &str) -> LauncherResult<&str> {
    if name.is_empty() {
        return Err(LauncherError::InvalidPackageName(
            "package name cannot be empty".to_string(),
        ));
    }

    if !PACKAGE_NAME_REGEX.is_match(name) {
        return Err(LauncherError::InvalidPackageName(format!(
            "'{}' — names must contain only letters, numbers, dots, dashes, and underscores, and must start with a letter or number",
            name
        )));
    }

    Ok(name)
}

/// Test if a string is a valid package name without generating errors
pub fn is_valid_package_name(name: &str) -> bool {
    !name.is_empty() && PACKAGE_NAME_REGEX.is_match(name)
}
