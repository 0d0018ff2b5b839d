//! CLI argument definitions and shared statics.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::OnceLock;

/// Whether the user asked for JSON output (controls structured error output).
pub static JSON_MODE: OnceLock<bool> = OnceLock::new();

#[derive(Parser, Debug)]
#[command(name = "memlog", version, about = "In-memory message logger driver")]
pub struct Cli {
    /// Path to config TOML; built-in defaults when omitted
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print results and errors as JSON instead of text
    #[arg(long, global = true, action = ArgAction::SetTrue)]
    pub json: bool,

    /// Console diagnostics level; overrides diagnostics.level from the config
    #[arg(
        long = "log-level",
        global = true,
        value_name = "LEVEL",
        value_parser = ["error", "warn", "info", "debug", "trace"]
    )]
    pub log_level: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the dump, immediate and teardown scenarios and check their files
    Smoke(SmokeArgs),
    /// Log messages and print the collected entries
    Record(RecordArgs),
}

#[derive(Args, Debug)]
pub struct SmokeArgs {
    /// Directory receiving simple.txt, immediate.txt and destroy.txt
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,
}

#[derive(Args, Debug)]
pub struct RecordArgs {
    /// Prefix every message with this tag
    #[arg(long)]
    pub tag: Option<String>,
    /// Log file for immediate and teardown writes (overrides logger.file)
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,
    /// Append to the log file instead of truncating it
    #[arg(long, action = ArgAction::SetTrue)]
    pub append: bool,
    /// Write each entry to the log file as it is logged
    #[arg(long, action = ArgAction::SetTrue)]
    pub immediate: bool,
    /// Write all entries to the log file when the logger is torn down
    #[arg(long, action = ArgAction::SetTrue)]
    pub on_drop: bool,
    /// Turn logging off; every message is ignored
    #[arg(long, action = ArgAction::SetTrue)]
    pub disabled: bool,
    /// Messages to log, in order
    #[arg(value_name = "MESSAGE")]
    pub messages: Vec<String>,
}
