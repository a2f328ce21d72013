use std::path::PathBuf;

use clap::Parser;

/// Extract battery first-use date, state of health and charge cycles from
/// Samsung service-dump logs.
#[derive(Parser, Debug)]
#[command(name = "battstats", version = "1.0")]
pub struct Cli {
    /// Base log directory (the sdcard log folder written by SysDump)
    #[arg(default_value = "/storage/emulated/0/log")]
    pub log_dir: PathBuf,

    /// Start an interactive session
    #[arg(short, long, action, default_value = "false")]
    pub repl: bool,

    /// Verbose per-candidate diagnostics
    #[arg(short, long, action)]
    pub verbose: bool,
}
