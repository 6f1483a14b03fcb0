//! Host platform identification.
//!
//! Companion packages are published under the `<os>-<arch>` identifiers of
//! the original distribution channel (`darwin-arm64`, `linux-x64`, ...), so
//! the ambient `std::env::consts` values are mapped onto those names here,
//! once per invocation.

use std::fmt;

use crate::utils::LauncherResult;

pub mod registry;

/// Operating system identifier as the companion packages spell it
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Os {
    Darwin,
    Linux,
    Win32,
}

impl Os {
    pub fn as_str(self) -> &'static str {
        match self {
            Os::Darwin => "darwin",
            Os::Linux => "linux",
            Os::Win32 => "win32",
        }
    }

    /// Map a `std::env::consts::OS` value onto a package identifier
    fn from_identifier(id: &str) -> Option<Self> {
        match id {
            "macos" => Some(Os::Darwin),
            "linux" => Some(Os::Linux),
            "windows" => Some(Os::Win32),
            _ => None,
        }
    }
}

/// CPU architecture identifier as the companion packages spell it
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Arch {
    Arm64,
    X64,
}

impl Arch {
    pub fn as_str(self) -> &'static str {
        match self {
            Arch::Arm64 => "arm64",
            Arch::X64 => "x64",
        }
    }

    /// Map a `std::env::consts::ARCH` value onto a package identifier
    fn from_identifier(id: &str) -> Option<Self> {
        match id {
            "aarch64" => Some(Arch::Arm64),
            "x86_64" => Some(Arch::X64),
            _ => None,
        }
    }
}

/// An (operating system, CPU architecture) pair identifying the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlatformKey {
    pub os: Os,
    pub arch: Arch,
}

impl PlatformKey {
    /// Resolve the key for the machine the launcher is running on
    pub fn current() -> LauncherResult<Self> {
        Self::from_identifiers(std::env::consts::OS, std::env::consts::ARCH)
    }

    /// Resolve a key from raw ambient identifiers
    pub fn from_identifiers(os_id: &str, arch_id: &str) -> LauncherResult<Self> {
        let os = Os::from_identifier(os_id);
        let arch = Arch::from_identifier(arch_id);

        match (os, arch) {
            (Some(os), Some(arch)) => Ok(Self { os, arch }),
            _ => {
                // Report whichever half did map under its package spelling
                let label = format!(
                    "{}-{}",
                    os.map(Os::as_str).unwrap_or(os_id),
                    arch.map(Arch::as_str).unwrap_or(arch_id)
                );
                Err(registry::unsupported(&label))
            }
        }
    }

    /// Filename of the bundled executable; only the Windows branch carries
    /// an extension
    pub fn executable_name(&self) -> &'static str {
        match self.os {
            Os::Win32 => "getapi.exe",
            _ => "getapi",
        }
    }
}

impl fmt::Display for PlatformKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.os.as_str(), self.arch.as_str())
    }
}
