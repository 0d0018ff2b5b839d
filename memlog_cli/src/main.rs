mod cli;
mod diagnostics;
mod error_fmt;
mod record;
mod smoke;

use clap::Parser;
use memlog_config::Config;

use crate::cli::{Cli, Commands, JSON_MODE};
use crate::error_fmt::{CliError, exit_code_for_error, format_error_json, humanize};

fn main() {
    let cli = Cli::parse();
    let _ = JSON_MODE.set(cli.json);

    if let Err(err) = run(cli) {
        if JSON_MODE.get().copied().unwrap_or(false) {
            eprintln!("{}", format_error_json(&err));
        } else {
            eprintln!("{}", humanize(&err));
        }
        std::process::exit(exit_code_for_error(&err));
    }
}

fn load_config(cli: &Cli) -> eyre::Result<Config> {
    let cfg = match &cli.config {
        Some(path) => memlog_config::load_file(path)
            .map_err(|e| CliError::ConfigLoad(format!("{e}")))?,
        None => Config::default(),
    };
    cfg.validate()
        .map_err(|e| CliError::ConfigInvalid(format!("{e}")))?;
    Ok(cfg)
}

fn run(cli: Cli) -> eyre::Result<()> {
    color_eyre::install()?;

    let cfg = load_config(&cli)?;
    let level = cli
        .log_level
        .as_deref()
        .or(cfg.diagnostics.level.as_deref())
        .unwrap_or("info")
        .to_ascii_lowercase();
    let _file_guard = diagnostics::init(&level, cli.json, &cfg.diagnostics)?;

    match &cli.cmd {
        Commands::Smoke(args) => {
            tracing::info!(out_dir = %args.out_dir.display(), "smoke start");
            smoke::run(&args.out_dir, cli.json)?;
        }
        Commands::Record(args) => record::run(&cfg.logger, args, cli.json)?,
    }
    Ok(())
}
