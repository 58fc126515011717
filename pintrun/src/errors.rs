//! Error types shared across the launcher.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type LaunchResult<T> = Result<T, LaunchError>;

/// Errors surfaced by the launcher.
///
/// A nonzero exit status from the emulator is deliberately NOT an error:
/// the launcher logs it and keeps going, since failures are visible in the
/// emulator's own output. Only conditions that make the run impossible to
/// set up (no manifest, tool not spawnable) are represented here.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The manifest could not be read or parsed. Fatal at startup.
    #[error("manifest {}: {reason}", .path.display())]
    Manifest { path: PathBuf, reason: String },

    /// The external tool could not be started at all.
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}
