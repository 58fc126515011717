//! One-shot launch orchestration.
//!
//! The whole flow is linear: provision the binary, provision each auxiliary
//! file the manifest names, boot. Provisioning strictly precedes boot by
//! sequencing alone; each command is issued exactly once, with no retries.
//!
//! A nonzero exit status from the tool is logged and then ignored. This is
//! an interactive developer tool: a failed copy or a crashing kernel is
//! plainly visible in the emulator's own output, and aborting halfway
//! through would only hide it.

use std::path::PathBuf;

use crate::emulator::{BootCommand, PutCommand, render};
use crate::errors::LaunchResult;
use crate::layout::{WorkspaceLayout, base_name};
use crate::manifest::{Manifest, TestDescriptor};
use crate::plan::ProvisioningPlan;
use crate::runner::CommandRunner;

/// Immutable parameters for one launch.
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    /// Kernel workspace root.
    pub workspace: PathBuf,
    /// Project/suite name (e.g. `userprog`, `vm`, `filesys`).
    pub project: String,
    /// Path to the compiled test binary. Also the manifest lookup key,
    /// exactly as given.
    pub binary: PathBuf,
    /// Whether to attach the emulator's gdb stub.
    pub gdb: bool,
    /// Emulator/disk-image tool to invoke.
    pub tool: String,
}

impl LaunchOptions {
    /// Interpret the debugger toggle from the command line: `"1"` attaches
    /// the debugger, anything else does not.
    pub fn debugger_enabled(toggle: &str) -> bool {
        toggle == "1"
    }
}

/// Turns the invocation parameters plus the manifest into a fixed sequence
/// of external tool invocations. Holds no state of its own.
pub struct Launcher {
    options: LaunchOptions,
    manifest: Manifest,
}

impl Launcher {
    /// Create a launcher from the invocation parameters and a loaded manifest.
    pub fn new(options: LaunchOptions, manifest: Manifest) -> Self {
        Self { options, manifest }
    }

    fn layout(&self) -> WorkspaceLayout {
        WorkspaceLayout::new(&self.options.workspace, &self.options.project)
    }

    /// Descriptor for this binary; an absent manifest entry means
    /// "no arguments, no auxiliary files", not an error.
    fn descriptor(&self) -> TestDescriptor {
        let binary_id = self.options.binary.to_string_lossy();
        self.manifest.get(&binary_id).cloned().unwrap_or_default()
    }

    /// The resolved provisioning plan: the binary first, then each
    /// auxiliary file in manifest order.
    pub fn plan(&self) -> ProvisioningPlan {
        ProvisioningPlan::build(&self.options.binary, &self.descriptor(), &self.layout())
    }

    /// The boot command: fixed flags, optional `--gdb`, and a run directive
    /// carrying the binary's base name plus at most the FIRST argument of
    /// the descriptor's list. Later arguments are never used.
    pub fn boot(&self) -> BootCommand {
        let binary_id = self.options.binary.to_string_lossy();
        let mut boot = BootCommand::new(&self.options.tool, base_name(&binary_id))
            .with_gdb(self.options.gdb);

        if let Some(first) = self.descriptor().args.first() {
            boot = boot.arg(first);
        }
        boot
    }

    /// Every command this launch would issue, rendered for display.
    pub fn command_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .plan()
            .copies()
            .iter()
            .map(|copy| {
                let put = PutCommand::new(&self.options.tool, copy);
                render(&self.options.tool, &put.args())
            })
            .collect();
        lines.push(render(&self.options.tool, &self.boot().args()));
        lines
    }

    /// Issue the provisioning commands and then the boot command, in order.
    ///
    /// Returns an error only when a command cannot be started at all; a
    /// command that runs and exits unsuccessfully is logged and the
    /// sequence continues.
    pub fn launch(&self, runner: &mut dyn CommandRunner) -> LaunchResult<()> {
        let build_dir = self.layout().build_dir();

        for copy in self.plan().copies() {
            tracing::info!(
                source = %copy.source.display(),
                dest = %copy.dest,
                "Provisioning file into disk image"
            );
            let put = PutCommand::new(&self.options.tool, copy);
            let status = runner.run(&mut put.build(&build_dir))?;
            if !status.success() {
                tracing::warn!(dest = %copy.dest, %status, "Provisioning command failed, continuing");
            }
        }

        let boot = self.boot();
        tracing::info!(run = %boot.run_directive(), gdb = self.options.gdb, "Booting emulator");
        let status = runner.run(&mut boot.build(&build_dir))?;
        if !status.success() {
            tracing::warn!(%status, "Emulator exited with nonzero status");
        }
        Ok(())
    }
}
