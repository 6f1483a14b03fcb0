//! Canonical registry of companion packages.
//!
//! This is the authoritative mapping from a platform key to the package that
//! carries the prebuilt binary for it. When adding or removing a supported
//! platform, update ONLY the table below.

use std::collections::BTreeMap;

use lazy_static::lazy_static;

use crate::platform::{Arch, Os, PlatformKey};
use crate::utils::{LauncherError, LauncherResult};

lazy_static! {
    static ref PLATFORMS: BTreeMap<PlatformKey, &'static str> = BTreeMap::from([
        (PlatformKey { os: Os::Darwin, arch: Arch::Arm64 }, "getapi-cli-darwin-arm64"),
        (PlatformKey { os: Os::Darwin, arch: Arch::X64 }, "getapi-cli-darwin-x64"),
        (PlatformKey { os: Os::Linux, arch: Arch::X64 }, "getapi-cli-linux-x64"),
        (PlatformKey { os: Os::Linux, arch: Arch::Arm64 }, "getapi-cli-linux-arm64"),
        (PlatformKey { os: Os::Win32, arch: Arch::X64 }, "getapi-cli-win32-x64"),
    ]);
}

/// Look up the companion package for a platform key
pub fn package_for(key: &PlatformKey) -> LauncherResult<&'static str> {
    PLATFORMS
        .get(key)
        .copied()
        .ok_or_else(|| unsupported(&key.to_string()))
}

/// All platform keys the launcher knows companion packages for, in a stable
/// order
pub fn supported() -> Vec<PlatformKey> {
    PLATFORMS.keys().copied().collect()
}

/// Build the error reported for a key with no registry entry
pub fn unsupported(key: &str) -> LauncherError {
    let supported = PLATFORMS
        .keys()
        .map(PlatformKey::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    LauncherError::UnsupportedPlatform {
        key: key.to_string(),
        supported,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_supported_key_has_a_package() {
        for key in supported() {
            let package = package_for(&key).unwrap();
            assert!(!package.is_empty());
            assert_eq!(package, format!("getapi-cli-{key}"));
        }
    }

    #[test]
    fn absent_key_lists_the_registry_exactly() {
        // win32-arm64 is a real key shape with no companion package
        let key = PlatformKey { os: Os::Win32, arch: Arch::Arm64 };
        let err = package_for(&key).unwrap_err();
        let message = err.to_string();

        assert!(message.contains("unsupported platform win32-arm64"));
        let listed = message.split("Supported: ").nth(1).unwrap();
        let expected = supported()
            .iter()
            .map(PlatformKey::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        assert_eq!(listed, expected);
    }

    #[test]
    fn darwin_arm64_resolves_end_to_end() {
        let key = PlatformKey::from_identifiers("macos", "aarch64").unwrap();
        let package = package_for(&key).unwrap();
        assert_eq!(package, "getapi-cli-darwin-arm64");
        assert_eq!(key.executable_name(), "getapi");
    }
}
