//! Tracing setup for the driver's own diagnostics.
//!
//! Console output goes to stderr so stdout stays reserved for command output.
//! The file writer is non-blocking; keep the returned guard alive until exit
//! or buffered lines are lost.

use std::path::Path;

use eyre::WrapErr;
use memlog_config::{Diagnostics, Rotation};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{self, RollingFileAppender};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber. `RUST_LOG` wins over `level`.
pub fn init(level: &str, json: bool, diag: &Diagnostics) -> eyre::Result<Option<WorkerGuard>> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .wrap_err_with(|| format!("invalid log level {level:?}"))?,
    };

    let console_json = json.then(|| fmt::layer().json().with_writer(std::io::stderr));
    let console_text = (!json).then(|| {
        fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
    });

    let (file_sink, guard) = match diag.file.as_deref() {
        Some(path) => {
            let (writer, guard) = file_writer(path, diag.rotation)?;
            (Some(writer), Some(guard))
        }
        None => (None, None),
    };
    let file_layer =
        file_sink.map(|w| fmt::layer().json().with_ansi(false).with_writer(w));

    tracing_subscriber::registry()
        .with(filter)
        .with(console_json)
        .with(console_text)
        .with(file_layer)
        .try_init()
        .wrap_err("install tracing subscriber")?;
    Ok(guard)
}

fn file_writer(path: &Path, rotation: Rotation) -> eyre::Result<(NonBlocking, WorkerGuard)> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let name = path
        .file_name()
        .ok_or_else(|| eyre::eyre!("diagnostics.file must name a file, got {:?}", path))?;

    let appender = RollingFileAppender::builder()
        .rotation(match rotation {
            Rotation::Never => rolling::Rotation::NEVER,
            Rotation::Daily => rolling::Rotation::DAILY,
            Rotation::Hourly => rolling::Rotation::HOURLY,
        })
        .filename_prefix(name.to_string_lossy())
        .build(dir)
        .wrap_err_with(|| format!("open diagnostics file {}", path.display()))?;

    Ok(tracing_appender::non_blocking(appender))
}
