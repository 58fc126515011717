//! Test manifest loading.
//!
//! The manifest is a JSON file mapping a test-binary identifier to the
//! arguments the test is started with inside the kernel and the auxiliary
//! files that must be present in the disk image before boot:
//!
//! ```json
//! {
//!     "tests/userprog/args-single": { "args": ["onearg"], "put": [] },
//!     "tests/filesys/base/syn-read": { "put": ["sample.txt"] }
//! }
//! ```
//!
//! Consumed read-only, once, at startup.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::errors::{LaunchError, LaunchResult};

/// Per-test record looked up by binary identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TestDescriptor {
    /// Arguments for the test inside the kernel. Only the first element is
    /// ever carried into the boot directive.
    #[serde(default)]
    pub args: Vec<String>,

    /// Auxiliary files to copy into the disk image before boot, in order.
    #[serde(default)]
    pub put: Vec<String>,
}

/// Mapping from test-binary identifier to its descriptor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest(BTreeMap<String, TestDescriptor>);

impl Manifest {
    /// Load and parse a manifest file.
    ///
    /// A missing or malformed manifest is fatal: without it the launcher
    /// cannot decide what to provision.
    pub fn load(path: &Path) -> LaunchResult<Self> {
        let data = fs::read_to_string(path).map_err(|e| LaunchError::Manifest {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&data).map_err(|e| LaunchError::Manifest {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Look up the descriptor for a binary identifier (exact match).
    ///
    /// Absence is valid and means "no arguments, no auxiliary files".
    pub fn get(&self, binary_id: &str) -> Option<&TestDescriptor> {
        self.0.get(binary_id)
    }

    /// Number of entries, used for startup logging.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the manifest has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
