//! Fixed values shared by the command builders and the launcher.

/// Emulator invocation constants.
pub mod emulator {
    /// Default name of the external emulator/disk-image tool.
    pub const DEFAULT_TOOL: &str = "pintos";

    /// Kernel run timeout in seconds (`-T`).
    pub const RUN_TIMEOUT_SECS: u32 = 60;

    /// Swap partition size in MB (`--swap-size`).
    pub const SWAP_SIZE_MB: u32 = 4;
}

/// Workspace layout constants.
pub mod layout {
    /// Auxiliary file that ships with the test sources instead of the build
    /// output. Identifiers whose base name matches it are redirected to the
    /// sample directory during source resolution.
    pub const RESERVED_SAMPLE_FILE: &str = "sample.txt";
}
