#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// One recorded invocation of the stub emulator.
pub struct Invocation {
    pub cwd: PathBuf,
    pub argv: Vec<String>,
}

/// Throwaway kernel workspace plus a stub emulator that records every
/// invocation (working directory and argv) to a log file.
pub struct TestContext {
    dir: TempDir,
    pub workspace: PathBuf,
    pub project: String,
    pub tool: PathBuf,
    pub manifest: PathBuf,
    log: PathBuf,
}

impl TestContext {
    pub fn new(project: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create tempdir");
        let workspace = dir.path().join("ws");
        fs::create_dir_all(workspace.join("src").join(project).join("build"))
            .expect("Failed to create build dir");
        fs::create_dir_all(workspace.join("src").join("tests").join(project))
            .expect("Failed to create sample dir");

        // The stub appends one record per invocation: cwd, then one line
        // per argv element, then a `%%` terminator.
        let log = dir.path().join("emulator.log");
        let tool = dir.path().join("pintos-stub");
        let script = format!(
            "#!/bin/sh\n{{\n  pwd\n  for a in \"$@\"; do printf '%s\\n' \"$a\"; done\n  echo '%%'\n}} >> \"{}\"\n",
            log.display()
        );
        fs::write(&tool, script).expect("Failed to write stub emulator");
        let mut perms = fs::metadata(&tool).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&tool, perms).unwrap();

        let manifest = dir.path().join("tests_aux.json");
        fs::write(&manifest, "{}").expect("Failed to write manifest");

        Self {
            dir,
            workspace,
            project: project.to_string(),
            tool,
            manifest,
            log,
        }
    }

    pub fn write_manifest(&self, json: &str) {
        fs::write(&self.manifest, json).expect("Failed to write manifest");
    }

    pub fn build_dir(&self) -> PathBuf {
        self.workspace.join("src").join(&self.project).join("build")
    }

    /// Create an (empty) test binary inside the build tree and return its path.
    pub fn binary(&self, name: &str) -> PathBuf {
        let path = self.build_dir().join("tests").join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, b"").unwrap();
        path
    }

    /// pintrun command preconfigured for this workspace and stub emulator.
    pub fn cmd(&self, binary: &Path, gdb: &str) -> Command {
        let bin_path = env!("CARGO_BIN_EXE_pintrun");
        let mut cmd = Command::new(bin_path);
        cmd.arg(&self.workspace)
            .arg(&self.project)
            .arg(binary)
            .arg(gdb)
            .arg("--manifest")
            .arg(&self.manifest)
            .arg("--emulator")
            .arg(&self.tool);
        cmd
    }

    /// Invocations the stub emulator recorded, in issue order.
    pub fn invocations(&self) -> Vec<Invocation> {
        let Ok(data) = fs::read_to_string(&self.log) else {
            return Vec::new();
        };

        let mut out = Vec::new();
        let mut lines = data.lines();
        while let Some(cwd) = lines.next() {
            let mut argv = Vec::new();
            for line in lines.by_ref() {
                if line == "%%" {
                    break;
                }
                argv.push(line.to_string());
            }
            out.push(Invocation {
                cwd: PathBuf::from(cwd),
                argv,
            });
        }
        out
    }
}
