use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pintrun::constants::emulator::DEFAULT_TOOL;
use pintrun::launcher::{LaunchOptions, Launcher};
use pintrun::manifest::Manifest;
use pintrun::runner::HostRunner;

/// Provision a kernel test binary into the emulator's disk image and boot it.
#[derive(Parser, Debug)]
#[command(name = "pintrun", version)]
struct Cli {
    /// Kernel workspace root
    workspace: PathBuf,

    /// Project/suite name (e.g. userprog, vm, filesys)
    project: String,

    /// Path to the compiled test binary (also the manifest lookup key)
    binary: PathBuf,

    /// Debugger toggle: "1" attaches the emulator's gdb stub, anything else
    /// boots without it
    #[arg(default_value = "0")]
    gdb: String,

    /// Manifest of per-test arguments and auxiliary files, resolved against
    /// the invoking directory
    #[arg(long, default_value = "tests_aux.json")]
    manifest: PathBuf,

    /// Emulator/disk-image tool to invoke
    #[arg(long, env = "PINTRUN_EMULATOR", default_value = DEFAULT_TOOL)]
    emulator: String,

    /// Print the commands that would be issued instead of executing them
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let manifest = Manifest::load(&cli.manifest)
        .with_context(|| format!("failed to load manifest {}", cli.manifest.display()))?;
    tracing::debug!(entries = manifest.len(), manifest = %cli.manifest.display(), "Manifest loaded");

    let options = LaunchOptions {
        workspace: cli.workspace,
        project: cli.project,
        binary: cli.binary,
        gdb: LaunchOptions::debugger_enabled(&cli.gdb),
        tool: cli.emulator,
    };
    let launcher = Launcher::new(options, manifest);

    if cli.dry_run {
        for line in launcher.command_lines() {
            println!("{line}");
        }
        return Ok(());
    }

    launcher.launch(&mut HostRunner)?;
    Ok(())
}
