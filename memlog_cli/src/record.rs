//! `record`: log messages through a configured logger and print the entries.

use eyre::WrapErr;
use memlog_config::LoggerCfg;
use memlog_core::Logger;

use crate::cli::RecordArgs;

/// Command-line flags only ever turn features on, except `--disabled`.
pub fn effective_cfg(cfg: &LoggerCfg, args: &RecordArgs) -> LoggerCfg {
    LoggerCfg {
        enabled: cfg.enabled && !args.disabled,
        immediate: cfg.immediate || args.immediate,
        write_on_drop: cfg.write_on_drop || args.on_drop,
        file: args.file.clone().or_else(|| cfg.file.clone()),
        append: cfg.append || args.append,
    }
}

pub fn run(cfg: &LoggerCfg, args: &RecordArgs, json: bool) -> eyre::Result<()> {
    let cfg = effective_cfg(cfg, args);
    tracing::info!(
        enabled = cfg.enabled,
        immediate = cfg.immediate,
        write_on_drop = cfg.write_on_drop,
        file = ?cfg.file,
        append = cfg.append,
        "record start"
    );

    let mut logger = Logger::from(&cfg);
    match args.tag.as_deref() {
        Some(tag) => {
            for m in &args.messages {
                logger.log_tagged(tag, m);
            }
        }
        None => logger.extend(&args.messages),
    }

    if json {
        println!("{}", serde_json::to_string(logger.entries())?);
    } else {
        logger
            .write(std::io::stdout().lock())
            .wrap_err("write entries to stdout")?;
    }

    tracing::info!(entries = logger.len(), "record complete");
    logger.close();
    Ok(())
}
