//! Command builders for the external emulator/disk-image tool.
//!
//! Two invocation shapes exist, mirroring the tool's own interface:
//!
//! - put: `pintos -p <source> -a <dest> -- -q` copies one host file into
//!   the disk image under a destination name, then flushes the image.
//! - boot: `pintos -v -k -T 60 --swap-size=4 [--gdb] -- -q run '<binary> [arg]'`
//!   starts the emulator against the current image.
//!
//! The builders produce plain `std::process::Command` values with the build
//! directory as an explicit working directory. Nothing here mutates the
//! launcher process's own working directory.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::constants::emulator::{RUN_TIMEOUT_SECS, SWAP_SIZE_MB};
use crate::plan::FileCopy;

/// Builder for one disk-image provisioning command.
#[derive(Debug, Clone)]
pub struct PutCommand {
    tool: String,
    source: PathBuf,
    dest: String,
}

impl PutCommand {
    /// Create a put command for one planned file copy.
    pub fn new(tool: impl Into<String>, copy: &FileCopy) -> Self {
        Self {
            tool: tool.into(),
            source: copy.source.clone(),
            dest: copy.dest.clone(),
        }
    }

    /// Arguments passed to the tool, in order.
    pub fn args(&self) -> Vec<String> {
        vec![
            "-p".to_string(),
            self.source.to_string_lossy().to_string(),
            "-a".to_string(),
            self.dest.clone(),
            "--".to_string(),
            "-q".to_string(),
        ]
    }

    /// Build the command, rooted at the given base directory.
    pub fn build(&self, base_dir: &Path) -> Command {
        let mut cmd = Command::new(&self.tool);
        cmd.current_dir(base_dir);
        cmd.args(self.args());
        cmd
    }
}

/// Builder for the final boot command.
#[derive(Debug, Clone)]
pub struct BootCommand {
    tool: String,
    gdb: bool,
    run: String,
}

impl BootCommand {
    /// Create a boot command that runs the given binary name in the kernel.
    pub fn new(tool: impl Into<String>, binary_name: &str) -> Self {
        Self {
            tool: tool.into(),
            gdb: false,
            run: binary_name.to_string(),
        }
    }

    /// Append one argument to the run directive.
    ///
    /// The directive stays a single shell word handed to the kernel, so the
    /// argument is joined with a space rather than becoming its own argv
    /// element.
    pub fn arg(mut self, arg: &str) -> Self {
        self.run.push(' ');
        self.run.push_str(arg);
        self
    }

    /// Attach the emulator's gdb stub so a remote debugger can connect.
    pub fn with_gdb(mut self, enabled: bool) -> Self {
        self.gdb = enabled;
        self
    }

    /// The `run` directive payload, e.g. `my-test onearg`.
    pub fn run_directive(&self) -> &str {
        &self.run
    }

    /// Arguments passed to the tool, in order.
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            "-v".to_string(),
            "-k".to_string(),
            "-T".to_string(),
            RUN_TIMEOUT_SECS.to_string(),
            format!("--swap-size={}", SWAP_SIZE_MB),
        ];
        if self.gdb {
            args.push("--gdb".to_string());
        }
        args.push("--".to_string());
        args.push("-q".to_string());
        args.push("run".to_string());
        args.push(self.run.clone());
        args
    }

    /// Build the command, rooted at the given base directory.
    pub fn build(&self, base_dir: &Path) -> Command {
        let mut cmd = Command::new(&self.tool);
        cmd.current_dir(base_dir);
        cmd.args(self.args());
        cmd
    }
}

/// Render a tool invocation for display, single-quoting arguments with
/// spaces the way they would be written in a shell.
pub fn render(tool: &str, args: &[String]) -> String {
    let mut line = String::from(tool);
    for arg in args {
        line.push(' ');
        if arg.contains(' ') {
            line.push('\'');
            line.push_str(arg);
            line.push('\'');
        } else {
            line.push_str(arg);
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_args() {
        let copy = FileCopy {
            source: PathBuf::from("/ws/src/tests/filesys/sample.txt"),
            dest: "sample.txt".to_string(),
        };
        let put = PutCommand::new("pintos", &copy);
        assert_eq!(
            put.args(),
            [
                "-p",
                "/ws/src/tests/filesys/sample.txt",
                "-a",
                "sample.txt",
                "--",
                "-q"
            ]
        );
    }

    #[test]
    fn test_put_build_sets_program_and_cwd() {
        let copy = FileCopy {
            source: PathBuf::from("bin"),
            dest: "bin".to_string(),
        };
        let cmd = PutCommand::new("pintos", &copy).build(Path::new("/ws/src/vm/build"));
        assert_eq!(cmd.get_program(), "pintos");
        assert_eq!(cmd.get_current_dir(), Some(Path::new("/ws/src/vm/build")));
    }

    #[test]
    fn test_boot_args_without_gdb_or_test_args() {
        let boot = BootCommand::new("pintos", "my-test");
        assert_eq!(
            boot.args(),
            ["-v", "-k", "-T", "60", "--swap-size=4", "--", "-q", "run", "my-test"]
        );
    }

    #[test]
    fn test_boot_args_with_gdb() {
        let boot = BootCommand::new("pintos", "my-test").with_gdb(true);
        assert_eq!(
            boot.args(),
            ["-v", "-k", "-T", "60", "--swap-size=4", "--gdb", "--", "-q", "run", "my-test"]
        );
    }

    #[test]
    fn test_run_directive_with_first_argument() {
        let boot = BootCommand::new("pintos", "args-single").arg("onearg");
        assert_eq!(boot.run_directive(), "args-single onearg");
        assert_eq!(boot.args().last().unwrap(), "args-single onearg");
    }

    #[test]
    fn test_run_directive_without_arguments_has_no_trailing_space() {
        let boot = BootCommand::new("pintos", "my-test");
        assert_eq!(boot.run_directive(), "my-test");
        assert_eq!(boot.args().last().unwrap(), "my-test");
    }

    #[test]
    fn test_render_quotes_the_run_directive() {
        let boot = BootCommand::new("pintos", "args-single").arg("onearg");
        let line = render("pintos", &boot.args());
        assert_eq!(
            line,
            "pintos -v -k -T 60 --swap-size=4 -- -q run 'args-single onearg'"
        );
    }
}
