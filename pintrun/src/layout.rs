//! Workspace path layout.
//!
//! Two roots matter for a launch:
//!
//! - build directory: `{workspace}/src/{project}/build` - where the kernel
//!   build drops the test binaries and most auxiliary files, and where the
//!   emulator tool is run from.
//! - sample directory: `{workspace}/src/tests/{project}` - home of the one
//!   reserved auxiliary file that is never copied into the build output.

use std::path::{Path, PathBuf};

use crate::constants::layout::RESERVED_SAMPLE_FILE;

/// Path layout for one project inside the kernel workspace.
#[derive(Clone, Debug)]
pub struct WorkspaceLayout {
    workspace_root: PathBuf,
    project: String,
}

impl WorkspaceLayout {
    /// Create a layout for the given workspace root and project name.
    pub fn new(workspace_root: impl Into<PathBuf>, project: impl Into<String>) -> Self {
        Self {
            workspace_root: workspace_root.into(),
            project: project.into(),
        }
    }

    /// Build output directory: `{workspace}/src/{project}/build`.
    ///
    /// Every emulator command runs with this as its working directory.
    pub fn build_dir(&self) -> PathBuf {
        self.workspace_root
            .join("src")
            .join(&self.project)
            .join("build")
    }

    /// Test-source directory: `{workspace}/src/tests/{project}`.
    pub fn sample_dir(&self) -> PathBuf {
        self.workspace_root
            .join("src")
            .join("tests")
            .join(&self.project)
    }

    /// Resolve an auxiliary-file identifier to its host source path.
    ///
    /// `sample.txt` ships with the test sources and never lands in the build
    /// output, so any identifier whose base name matches it is redirected to
    /// the sample directory no matter how the identifier spells the path.
    /// Everything else resolves relative to the build directory, as given.
    pub fn resolve_aux(&self, identifier: &str) -> PathBuf {
        if base_name(identifier) == RESERVED_SAMPLE_FILE {
            self.sample_dir().join(RESERVED_SAMPLE_FILE)
        } else {
            self.build_dir().join(identifier)
        }
    }
}

/// Base name of a file identifier, the identifier itself if it has none.
pub fn base_name(identifier: &str) -> &str {
    Path::new(identifier)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(identifier)
}
