//! Child process execution and exit-status propagation.
//!
//! The launcher spawns exactly one child, hands it the terminal (all three
//! standard streams inherited), waits without a timeout, and translates the
//! resulting status into its own exit code. "The child ran and returned a
//! status" and "the child could not be started" are kept as two distinct
//! failure paths.

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use tracing::debug;

use crate::utils::{LauncherError, LauncherResult};

/// Run the resolved executable with the caller's arguments and return the
/// exit code the launcher should terminate with
pub fn run(executable: &Path, args: &[OsString]) -> LauncherResult<i32> {
    debug!(executable = %executable.display(), args = args.len(), "spawning companion binary");

    let mut child = Command::new(executable)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|source| LauncherError::LaunchFailed {
            path: executable.to_path_buf(),
            source,
        })?;

    let status = child.wait().map_err(|source| LauncherError::LaunchFailed {
        path: executable.to_path_buf(),
        source,
    })?;

    exit_code_for(executable, status)
}

/// Translate a wait status into the launcher's own exit code.
///
/// A child killed by a signal yields no code; by convention the launcher
/// exits 128 + signal number so scripts still observe a failure.
fn exit_code_for(executable: &Path, status: ExitStatus) -> LauncherResult<i32> {
    if let Some(code) = status.code() {
        debug!(code, "companion binary exited");
        return Ok(code);
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;

        use crate::utils::log_warning;

        if let Some(signal) = status.signal() {
            log_warning(&format!("getapi terminated by signal {signal}"));
            return Ok(128 + signal);
        }
    }

    Err(LauncherError::AbnormalExit {
        path: executable.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn translates_normal_exit_codes_verbatim() {
        use std::os::unix::process::ExitStatusExt;

        // Raw wait status encodes the exit code in the high byte
        let status = ExitStatus::from_raw(2 << 8);
        assert_eq!(exit_code_for(Path::new("getapi"), status).unwrap(), 2);

        let status = ExitStatus::from_raw(0);
        assert_eq!(exit_code_for(Path::new("getapi"), status).unwrap(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn signal_death_maps_to_128_plus_signal() {
        use std::os::unix::process::ExitStatusExt;

        // Raw wait status for a SIGKILLed process
        let status = ExitStatus::from_raw(9);
        assert_eq!(exit_code_for(Path::new("getapi"), status).unwrap(), 137);
    }

    #[cfg(unix)]
    #[test]
    fn runs_a_child_and_returns_its_code() {
        let args = vec![OsString::from("-c"), OsString::from("exit 3")];
        let code = run(Path::new("/bin/sh"), &args).unwrap();
        assert_eq!(code, 3);
    }

    #[test]
    fn spawn_failure_is_a_launch_error() {
        let err = run(Path::new("/nonexistent/getapi"), &[]).unwrap_err();
        assert!(matches!(err, LauncherError::LaunchFailed { .. }));
    }
}
