use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures of the tabular I/O layer.
#[derive(Debug, Error)]
pub enum DataError {
    /// The file cannot be opened, created, read or written.
    #[error("I/O failure on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file is readable but is not well-formed tabular data.
    #[error("unable to parse {} as CSV: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    /// Serializing JSON output failed.
    #[error("unable to write JSON to {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl DataError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Splits a `csv::Error` into the I/O and structural cases.
    pub(crate) fn csv(path: &Path, source: csv::Error) -> Self {
        if let csv::ErrorKind::Io(err) = source.kind() {
            return Self::io(path, std::io::Error::new(err.kind(), err.to_string()));
        }
        Self::Parse {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Whether this is an I/O failure rather than a content problem.
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Path of the file involved.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Parse { path, .. } | Self::Json { path, .. } => path,
        }
    }
}
