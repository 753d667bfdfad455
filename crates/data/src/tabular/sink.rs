use super::CsvOptions;
use crate::error::DataError;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::info;

/// Anything that accepts rows of text fields.
pub trait RowSink {
    /// Writes every row, replacing previous content.
    ///
    /// # Errors
    /// [`DataError::Io`] when the sink cannot be created or written.
    fn write_rows<R, S>(&self, rows: &[R]) -> Result<(), DataError>
    where
        R: AsRef<[S]>,
        S: AsRef<str>;
}

/// A CSV file on disk, created or truncated on write.
#[derive(Debug, Clone)]
pub struct CsvSink {
    path: PathBuf,
    options: CsvOptions,
}

impl CsvSink {
    pub fn new<P: AsRef<Path>>(path: P, options: CsvOptions) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            options,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RowSink for CsvSink {
    fn write_rows<R, S>(&self, rows: &[R]) -> Result<(), DataError>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let file = File::create(&self.path).map_err(|err| DataError::io(&self.path, err))?;
        let mut writer = self.options.writer().from_writer(file);

        for row in rows {
            let fields = row.as_ref().iter().map(|field| field.as_ref());
            writer
                .write_record(fields)
                .map_err(|err| DataError::csv(&self.path, err))?;
        }
        writer
            .flush()
            .map_err(|err| DataError::io(&self.path, err))?;

        info!(path = %self.path.display(), rows = rows.len(), "Wrote rows");
        Ok(())
    }
}
