//! Builder for `Logger`.
//!
//! Every setting has a default, so `build()` is always available. The builder
//! is also the target of the `[logger]` config mapping in `conversions`.

use std::path::PathBuf;

use crate::logger::Logger;

#[derive(Debug, Clone)]
pub struct LoggerBuilder {
    enabled: bool,
    immediate: bool,
    write_on_drop: bool,
    log_file: Option<(PathBuf, bool)>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self {
            enabled: true,
            immediate: false,
            write_on_drop: false,
            log_file: None,
        }
    }
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_logging(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_immediate_mode(mut self, immediate: bool) -> Self {
        self.immediate = immediate;
        self
    }

    pub fn with_write_on_drop(mut self, write_on_drop: bool) -> Self {
        self.write_on_drop = write_on_drop;
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>, append: bool) -> Self {
        self.log_file = Some((path.into(), append));
        self
    }

    /// Forget a previously set log file.
    pub fn without_log_file(mut self) -> Self {
        self.log_file = None;
        self
    }

    pub fn build(self) -> Logger {
        let mut logger = Logger::new();
        logger.set_logging(self.enabled);
        logger.set_immediate_mode(self.immediate);
        logger.set_write_on_drop(self.write_on_drop);
        if let Some((path, append)) = self.log_file {
            logger.set_log_file(path, append);
        }
        logger
    }
}
