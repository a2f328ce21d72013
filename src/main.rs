use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli_parser::Cli;

pub mod battery;
pub mod cli_parser;
pub mod error;
pub mod models;
pub mod repl;
pub mod utils;

fn main() {
    let args = Cli::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    if args.repl {
        repl::run(&args.log_dir);
        return;
    }

    if !args.log_dir.is_dir() {
        eprintln!(
            "Error: log directory '{}' does not exist.",
            args.log_dir.display()
        );
        std::process::exit(1);
    }

    let stats = battery::scan_log_dir(&args.log_dir);
    if stats.is_valid() {
        println!("{}", stats);
    } else {
        eprintln!(
            "Failed to read logs. Run dumpstate/logcat via SysDump (*#9900#) and copy the logs to sdcard first."
        );
        std::process::exit(1);
    }
}
