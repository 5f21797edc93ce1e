pub mod record;

use std::io;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

pub use record::Record;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to access store {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed store {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("failed to replace store {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: tempfile::PersistError,
    },
}

/// Flat CSV file holding every record, one per line, no header row.
///
/// The file is always read and rewritten in full. Callers that need a
/// read-modify-write to be atomic go through [`crate::catalog::Catalog`].
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all records in file order. A missing file means "no records yet".
    pub fn read(&self) -> Result<Vec<Record>, StoreError> {
        let file = match std::fs::File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("Store {} not found, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row.map_err(|source| StoreError::Csv {
                path: self.path.clone(),
                source,
            })?;
            // Short rows get an empty genre; extra columns are ignored.
            let Some(name) = row.get(0) else { continue };
            let genre = row.get(1).unwrap_or_default();
            records.push(Record::new(name, genre));
        }
        Ok(records)
    }

    /// Replace the whole file with `records`.
    ///
    /// Rows are written to a temp file beside the target and renamed over it,
    /// so readers never observe a half-written store.
    pub fn write(&self, records: &[Record]) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };
        let csv_err = |source| StoreError::Csv {
            path: self.path.clone(),
            source,
        };

        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let tmp = NamedTempFile::new_in(dir).map_err(io_err)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(tmp);
        for record in records {
            writer.serialize(record).map_err(csv_err)?;
        }
        writer.flush().map_err(io_err)?;
        let tmp = writer
            .into_inner()
            .map_err(|e| io_err(io::Error::other(e.to_string())))?;

        tmp.persist(&self.path).map_err(|source| StoreError::Persist {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!("Wrote {} records to {}", records.len(), self.path.display());
        Ok(())
    }
}
