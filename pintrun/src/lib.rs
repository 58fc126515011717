//! pintrun - launcher for kernel test binaries under the pintos emulator.
//!
//! Given a compiled test binary, pintrun provisions the emulator's virtual
//! disk image with the binary and whatever auxiliary files the test's
//! manifest entry names, then boots the emulator against that disk. The
//! manifest, the workspace path layout, the resolved provisioning plan and
//! the emulator command lines are all plain values; the only side effects
//! are the external commands issued through a [`runner::CommandRunner`].

pub mod constants;
pub mod emulator;
pub mod errors;
pub mod launcher;
pub mod layout;
pub mod manifest;
pub mod plan;
pub mod runner;

pub use errors::{LaunchError, LaunchResult};
pub use launcher::{LaunchOptions, Launcher};
pub use layout::WorkspaceLayout;
pub use manifest::{Manifest, TestDescriptor};
pub use plan::{FileCopy, ProvisioningPlan};
pub use runner::{CommandRunner, HostRunner};
