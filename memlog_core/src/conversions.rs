//! `From` implementations bridging `memlog_config` types to `memlog_core` types.

use crate::builder::LoggerBuilder;
use crate::logger::Logger;

// ── LoggerBuilder ────────────────────────────────────────────────────────────

impl From<&memlog_config::LoggerCfg> for LoggerBuilder {
    fn from(c: &memlog_config::LoggerCfg) -> Self {
        let builder = LoggerBuilder::new()
            .with_logging(c.enabled)
            .with_immediate_mode(c.immediate)
            .with_write_on_drop(c.write_on_drop);
        match &c.file {
            Some(path) => builder.with_log_file(path.clone(), c.append),
            None => builder,
        }
    }
}

// ── Logger ───────────────────────────────────────────────────────────────────

impl From<&memlog_config::LoggerCfg> for Logger {
    fn from(c: &memlog_config::LoggerCfg) -> Self {
        LoggerBuilder::from(c).build()
    }
}
