//! File open modes shared by immediate, teardown and explicit writes.

use std::fs::{File, OpenOptions};
use std::path::Path;

/// How a log file is opened for a single write call.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum OpenMode {
    /// Discard existing content; the file is recreated empty.
    #[default]
    Truncate,
    /// Keep existing content and write at the end.
    Append,
}

impl OpenMode {
    #[inline]
    pub fn from_append(append: bool) -> Self {
        if append {
            OpenMode::Append
        } else {
            OpenMode::Truncate
        }
    }

    #[inline]
    pub fn is_append(self) -> bool {
        matches!(self, OpenMode::Append)
    }

    /// Open `path` for writing, creating it when missing.
    pub fn open(self, path: &Path) -> std::io::Result<File> {
        let mut opts = OpenOptions::new();
        opts.create(true);
        match self {
            OpenMode::Append => opts.append(true),
            OpenMode::Truncate => opts.write(true).truncate(true),
        };
        opts.open(path)
    }
}

impl From<bool> for OpenMode {
    fn from(append: bool) -> Self {
        Self::from_append(append)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn append_keeps_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        std::fs::write(&path, "first\n").unwrap();

        let mut f = OpenMode::Append.open(&path).unwrap();
        writeln!(f, "second").unwrap();
        drop(f);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn truncate_discards_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.txt");
        std::fs::write(&path, "a much longer line than the replacement\n").unwrap();

        let mut f = OpenMode::Truncate.open(&path).unwrap();
        writeln!(f, "short").unwrap();
        drop(f);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "short\n");
    }

    #[test]
    fn flag_mapping() {
        assert_eq!(OpenMode::from(true), OpenMode::Append);
        assert_eq!(OpenMode::from(false), OpenMode::Truncate);
        assert!(!OpenMode::default().is_append());
    }
}
