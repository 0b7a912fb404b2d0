//! Storage seam for the split cache.
//!
//! [`SplitStore`] is everything the loader needs from the filesystem:
//! existence checks, reading source rows and writing cache rows. The local
//! implementation writes through a temporary sibling file and renames it
//! into place, so a cache file is either absent or complete.

use super::loader::csv::{read_records, write_records, CsvConfig};
use crate::core::error::{LoaderError, Result};
use csv::StringRecord;
use std::path::Path;
use tempfile::NamedTempFile;

/// Filesystem operations used by the split-and-cache step
pub trait SplitStore {
    /// Whether a file exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Read all data rows of the CSV file at `path`
    fn read_rows(&self, path: &Path, config: &CsvConfig) -> Result<Vec<StringRecord>>;

    /// Replace the file at `path` with `rows`, headerless
    fn write_rows(&self, path: &Path, rows: &[StringRecord]) -> Result<()>;
}

/// Local filesystem store with atomic cache writes
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl LocalStore {
    /// Create a local store
    pub fn new() -> Self {
        LocalStore
    }
}

impl SplitStore for LocalStore {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_rows(&self, path: &Path, config: &CsvConfig) -> Result<Vec<StringRecord>> {
        read_records(path, config)
    }

    fn write_rows(&self, path: &Path, rows: &[StringRecord]) -> Result<()> {
        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        let mut temp = NamedTempFile::new_in(dir).map_err(|e| LoaderError::io(dir, e))?;
        write_records(&mut temp, rows)?;
        temp.as_file()
            .sync_all()
            .map_err(|e| LoaderError::io(temp.path(), e))?;
        temp.persist(path)
            .map_err(|e| LoaderError::io(path, e.error))?;

        log::debug!("Wrote {} rows to {}", rows.len(), path.display());
        Ok(())
    }
}

impl<S: SplitStore + ?Sized> SplitStore for &S {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn read_rows(&self, path: &Path, config: &CsvConfig) -> Result<Vec<StringRecord>> {
        (**self).read_rows(path, config)
    }

    fn write_rows(&self, path: &Path, rows: &[StringRecord]) -> Result<()> {
        (**self).write_rows(path, rows)
    }
}
