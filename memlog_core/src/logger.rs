//! In-memory message log with optional file output.
//!
//! Entries are always kept in memory. File output happens in three ways:
//! - immediately on each accepted `log` call (`immediate_mode` plus a log file),
//! - once at teardown (`write_on_drop` plus a log file),
//! - on demand through `write_to_file`.
//!
//! File failures on these paths are swallowed; logging never disturbs the caller.

use std::fmt::{self, Display};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::builder::LoggerBuilder;
use crate::error::{LogError, Result};
use crate::mode::OpenMode;

#[derive(Debug)]
pub struct Logger {
    entries: Vec<String>,
    enabled: bool,
    immediate: bool,
    write_on_drop: bool,
    log_file: Option<PathBuf>,
    mode: OpenMode,
}

impl Default for Logger {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            enabled: true,
            immediate: false,
            write_on_drop: false,
            log_file: None,
            mode: OpenMode::Truncate,
        }
    }
}

impl Logger {
    /// Logging on, every file mode off, no log file.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    /// Set the file used by immediate mode and by the teardown flush.
    ///
    /// Nothing is written here. An empty path clears the log file.
    pub fn set_log_file(&mut self, path: impl Into<PathBuf>, append: bool) {
        let path = path.into();
        self.log_file = (!path.as_os_str().is_empty()).then_some(path);
        self.mode = OpenMode::from_append(append);
    }

    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    /// Whether immediate and teardown writes append rather than truncate.
    pub fn append_mode(&self) -> bool {
        self.mode.is_append()
    }

    pub fn logging(&self) -> bool {
        self.enabled
    }

    pub fn set_logging(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn immediate_mode(&self) -> bool {
        self.immediate
    }

    /// Write each accepted entry to the log file as soon as it is logged.
    ///
    /// Only later calls are affected. The file is reopened for every entry,
    /// which is slow but leaves a usable trail if the process crashes.
    pub fn set_immediate_mode(&mut self, immediate: bool) {
        self.immediate = immediate;
    }

    pub fn write_on_drop(&self) -> bool {
        self.write_on_drop
    }

    /// Write all entries to the log file once when the logger is dropped or closed.
    pub fn set_write_on_drop(&mut self, write_on_drop: bool) {
        self.write_on_drop = write_on_drop;
    }

    /// Record `message` using its `Display` form.
    ///
    /// No-op while logging is off.
    pub fn log<T: Display>(&mut self, message: T) {
        if !self.enabled {
            return;
        }

        let entry = message.to_string();

        if self.immediate
            && let Some(path) = self.log_file.as_deref()
        {
            write_entry(path, self.mode, &entry);
        }

        self.entries.push(entry);
    }

    /// Record `"<tag> <message>"` as a single entry.
    pub fn log_tagged<T: Display, M: Display>(&mut self, tag: T, message: M) {
        if !self.enabled {
            return;
        }
        self.log(format_args!("{tag} {message}"));
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write every entry, in order, one per line.
    pub fn write<W: Write>(&self, mut sink: W) -> io::Result<()> {
        for entry in &self.entries {
            writeln!(sink, "{entry}")?;
        }
        Ok(())
    }

    /// Dump all entries to `path`, ignoring any failure.
    ///
    /// `append` applies to this call only; the stored mode is not consulted.
    pub fn write_to_file(&self, path: impl AsRef<Path>, append: bool) {
        let _ = self.try_write_to_file(path, append);
    }

    /// Like `write_to_file`, but reports open and write failures.
    pub fn try_write_to_file(&self, path: impl AsRef<Path>, append: bool) -> Result<()> {
        let path = path.as_ref();
        let file = OpenMode::from_append(append)
            .open(path)
            .map_err(|source| LogError::Open {
                path: path.to_path_buf(),
                source,
            })?;

        let mut out = BufWriter::new(file);
        self.write(&mut out)
            .and_then(|()| out.flush())
            .map_err(|source| LogError::Write {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Drop all entries. Flags and the log file are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Tear the logger down now, running the teardown flush if configured.
    pub fn close(mut self) {
        self.flush_on_teardown();
        // Drop still runs; the flush already happened.
        self.write_on_drop = false;
    }

    fn flush_on_teardown(&self) {
        if !self.write_on_drop {
            return;
        }
        if let Some(path) = self.log_file.as_deref() {
            tracing::debug!(
                path = %path.display(),
                entries = self.entries.len(),
                append = self.mode.is_append(),
                "flushing log on teardown"
            );
            self.write_to_file(path, self.mode.is_append());
        }
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.flush_on_teardown();
    }
}

impl fmt::Display for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}

impl<T: Display> Extend<T> for Logger {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for message in iter {
            self.log(message);
        }
    }
}

fn write_entry(path: &Path, mode: OpenMode, entry: &str) {
    if let Ok(mut file) = mode.open(path)
        && writeln!(file, "{entry}").is_ok()
    {
        tracing::trace!(path = %path.display(), "entry written");
    }
}
