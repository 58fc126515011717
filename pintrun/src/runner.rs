//! Command execution seam.
//!
//! External commands are issued through a trait so the orchestration can be
//! exercised without an emulator installed. The runner reports the child's
//! exit status; whether a nonzero status aborts the sequence is the
//! caller's policy, not the runner's.

use std::process::{Command, ExitStatus};

use crate::errors::{LaunchError, LaunchResult};

/// Blocking executor for external commands, one in flight at a time.
pub trait CommandRunner {
    /// Run the command to completion and report its exit status.
    ///
    /// Failing to start the process at all is an error; the process
    /// exiting unsuccessfully is not.
    fn run(&mut self, cmd: &mut Command) -> LaunchResult<ExitStatus>;
}

/// Runs commands on the host, inheriting the launcher's stdio so the
/// emulator's own output stays visible to the developer.
#[derive(Debug, Default)]
pub struct HostRunner;

impl CommandRunner for HostRunner {
    fn run(&mut self, cmd: &mut Command) -> LaunchResult<ExitStatus> {
        let program = cmd.get_program().to_string_lossy().into_owned();
        cmd.status().map_err(|source| LaunchError::Spawn { program, source })
    }
}
