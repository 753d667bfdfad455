use super::{CsvOptions, Rows};
use crate::error::DataError;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Anything that yields rows of text fields.
pub trait RowSource {
    /// Reads every row.
    ///
    /// # Errors
    /// [`DataError::Io`] when the source cannot be read,
    /// [`DataError::Parse`] when its content is not well-formed.
    fn read_rows(&self) -> Result<Rows, DataError>;
}

/// A CSV file on disk.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
    options: CsvOptions,
}

impl CsvSource {
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

impl RowSource for CsvSource {
    fn read_rows(&self) -> Result<Rows, DataError> {
        let file = File::open(&self.path).map_err(|err| DataError::io(&self.path, err))?;
        let rows = read_rows(file, &self.options, &self.path)?;
        info!(path = %self.path.display(), rows = rows.len(), "Read rows");
        Ok(rows)
    }
}

/// Reads all rows from any reader. `label` names the source in errors.
///
/// # Errors
/// See [`RowSource::read_rows`].
pub fn read_rows<R: Read>(
    reader: R,
    options: &CsvOptions,
    label: &Path,
) -> Result<Rows, DataError> {
    let mut reader = options.reader().from_reader(reader);
    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|err| DataError::csv(label, err))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    debug!(source = %label.display(), rows = rows.len(), "Parsed CSV");
    Ok(rows)
}
