//! Synchronous npm subprocess invocation
//!
//! The install itself is delegated wholesale: stdio is inherited so npm's
//! own progress and error output reach the terminal, and the raw outcome is
//! handed back without interpretation. No retries.

use crate::installer::args::{build_args, InstallOptions};
use crate::utils::output::print_info;
use std::process::Command;

/// Raw outcome of an npm invocation, in synchronous-spawn convention.
#[derive(Debug)]
pub struct InstallOutcome {
    /// Exit code, when the process ran and exited normally.
    pub status: Option<i32>,
    /// Terminating signal, when the process was killed (unix).
    pub signal: Option<i32>,
    /// Spawn-level error, when the process could not be started.
    pub error: Option<std::io::Error>,
}

impl InstallOutcome {
    /// Whether the install completed with a zero exit code.
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Install `dep` by invoking `npm_binary` synchronously.
///
/// A `None` dep is a no-op returning `None`: the checker already decided
/// there is nothing to install. Otherwise the outcome is returned verbatim,
/// exit-code interpretation is the caller's business.
pub fn install(dep: Option<&str>, options: &InstallOptions, npm_binary: &str) -> Option<InstallOutcome> {
    let dep = match dep {
        Some(dep) if !dep.is_empty() => dep,
        _ => return None,
    };

    let args = build_args(dep, options);

    print_info(&format!("Installing `{}`...", dep));

    // Inherited stdio is the Command default for status()
    let outcome = match Command::new(npm_binary).args(&args).status() {
        Ok(status) => InstallOutcome {
            status: status.code(),
            signal: exit_signal(&status),
            error: None,
        },
        Err(e) => InstallOutcome {
            status: None,
            signal: None,
            error: Some(e),
        },
    };

    Some(outcome)
}

#[cfg(unix)]
fn exit_signal(status: &std::process::ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn exit_signal(_status: &std::process::ExitStatus) -> Option<i32> {
    None
}
