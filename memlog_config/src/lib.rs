#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! Config schema for the message logger and its driver.
//!
//! - `[logger]` maps onto `memlog_core::LoggerBuilder`.
//! - `[diagnostics]` controls the driver's own tracing output.
//!
//! Every section and key is optional; unknown keys are rejected.
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Levels accepted by `diagnostics.level`.
pub const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerCfg {
    /// Accept log calls (false turns every log call into a no-op)
    pub enabled: bool,
    /// Write each entry to `file` as it is logged
    pub immediate: bool,
    /// Write all entries to `file` once at teardown
    pub write_on_drop: bool,
    /// Target for immediate and teardown writes
    pub file: Option<PathBuf>,
    /// Append to `file` instead of truncating it
    pub append: bool,
}

impl Default for LoggerCfg {
    fn default() -> Self {
        Self {
            enabled: true,
            immediate: false,
            write_on_drop: false,
            file: None,
            append: false,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    #[default]
    Never,
    Daily,
    Hourly,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Diagnostics {
    pub level: Option<String>, // "info","debug"
    pub file: Option<PathBuf>, // tracing output as JSON lines
    pub rotation: Rotation,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub logger: LoggerCfg,
    pub diagnostics: Diagnostics,
}

pub fn load_toml(s: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(s)
}

/// Read and parse a config file. Validation is left to the caller.
pub fn load_file(path: &Path) -> eyre::Result<Config> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("read config {:?}: {}", path, e))?;
    load_toml(&text).map_err(|e| eyre::eyre!("parse config {:?}: {}", path, e))
}

impl Config {
    pub fn validate(&self) -> eyre::Result<()> {
        // Logger
        if let Some(file) = &self.logger.file
            && file.as_os_str().is_empty()
        {
            eyre::bail!("logger.file must not be empty (omit it to disable file output)");
        }

        // Diagnostics
        if let Some(level) = &self.diagnostics.level
            && !LEVELS.contains(&level.to_ascii_lowercase().as_str())
        {
            eyre::bail!(
                "diagnostics.level must be one of {}, got {level:?}",
                LEVELS.join("|")
            );
        }
        if let Some(file) = &self.diagnostics.file {
            if file.as_os_str().is_empty() {
                eyre::bail!("diagnostics.file must not be empty");
            }
            if file.file_name().is_none() {
                eyre::bail!("diagnostics.file must name a file, got {:?}", file);
            }
        }

        Ok(())
    }
}
