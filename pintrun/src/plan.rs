//! Provisioning plan derivation.
//!
//! The plan is the resolved list of (source path, destination name) pairs to
//! copy into the virtual disk image before boot. It is derived per launch
//! and never persisted.

use std::path::{Path, PathBuf};

use crate::layout::{WorkspaceLayout, base_name};
use crate::manifest::TestDescriptor;

/// One file copy into the virtual disk image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCopy {
    /// Host source path handed to the tool.
    pub source: PathBuf,
    /// Name the file gets inside the disk image (always a base name).
    pub dest: String,
}

/// Ordered list of files to copy before boot.
#[derive(Debug, Clone, Default)]
pub struct ProvisioningPlan {
    copies: Vec<FileCopy>,
}

impl ProvisioningPlan {
    /// Derive the plan for one launch.
    ///
    /// The test binary always comes first, under its base name, even when
    /// the manifest has no entry for it. Auxiliary files follow in the
    /// descriptor's `put` order, each resolved through
    /// [`WorkspaceLayout::resolve_aux`].
    pub fn build(binary: &Path, descriptor: &TestDescriptor, layout: &WorkspaceLayout) -> Self {
        let binary_id = binary.to_string_lossy();
        let mut copies = vec![FileCopy {
            source: binary.to_path_buf(),
            dest: base_name(&binary_id).to_string(),
        }];

        for identifier in &descriptor.put {
            copies.push(FileCopy {
                source: layout.resolve_aux(identifier),
                dest: base_name(identifier).to_string(),
            });
        }

        Self { copies }
    }

    /// Copies in issue order.
    pub fn copies(&self) -> &[FileCopy] {
        &self.copies
    }
}
