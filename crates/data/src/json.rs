use crate::error::DataError;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Writes `value` as pretty-printed JSON, replacing the file.
///
/// # Errors
/// [`DataError::Io`] when the file cannot be created or flushed,
/// [`DataError::Json`] when serialization fails.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), DataError> {
    let file = File::create(path).map_err(|err| DataError::io(path, err))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, value).map_err(|source| DataError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(|err| DataError::io(path, err))?;

    info!(path = %path.display(), "Wrote JSON");
    Ok(())
}
