//! Append-only CSV tables with a header written once.

use crate::errors::{AppError, AppResult};
use crate::store::records::TableRecord;
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::OpenOptions;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// Create `path` with a header row if it does not exist yet.
///
/// An existing file is trusted as-is: no schema check is performed.
/// Returns `true` when the file was created.
pub fn ensure_initialized(path: &Path, columns: &[&str]) -> AppResult<bool> {
    if path.exists() {
        return Ok(false);
    }

    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(columns)?;
    wtr.flush()?;
    Ok(true)
}

/// Append exactly one row (no header) and flush before returning.
///
/// The file must already exist. The handle is owned by the writer and is
/// closed when it goes out of scope, on success and on error alike.
pub fn append_row<R: Serialize>(path: &Path, row: &R) -> AppResult<()> {
    let file = OpenOptions::new().append(true).open(path)?;
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);

    wtr.serialize(row)?;
    wtr.flush()?;
    Ok(())
}

/// Stream every data row back in file order, matching columns by header.
///
/// Each call re-opens the file and starts from the top.
pub fn read_all<R: DeserializeOwned>(
    path: &Path,
) -> AppResult<impl Iterator<Item = AppResult<R>>> {
    let rdr = csv::Reader::from_path(path)?;
    Ok(rdr.into_deserialize::<R>().map(|r| r.map_err(AppError::from)))
}

/// Stream raw data records (header skipped, not interpreted).
///
/// Rows may have any number of fields.
pub fn read_records(path: &Path) -> AppResult<impl Iterator<Item = AppResult<StringRecord>>> {
    let rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    Ok(rdr.into_records().map(|r| r.map_err(AppError::from)))
}

/// A CSV table bound to one file and one row type.
#[derive(Debug, Clone)]
pub struct TableStore<R> {
    path: PathBuf,
    _row: PhantomData<R>,
}

impl<R: TableRecord> TableStore<R> {
    /// Bind to `path`, creating the file with `R::COLUMNS` as header if missing.
    pub fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        ensure_initialized(&path, R::COLUMNS)?;
        Ok(Self {
            path,
            _row: PhantomData,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn columns(&self) -> &'static [&'static str] {
        R::COLUMNS
    }

    pub fn append(&self, row: &R) -> AppResult<()> {
        append_row(&self.path, row)
    }

    pub fn rows(&self) -> AppResult<impl Iterator<Item = AppResult<R>>> {
        read_all(&self.path)
    }

    pub fn records(&self) -> AppResult<impl Iterator<Item = AppResult<StringRecord>>> {
        read_records(&self.path)
    }

    /// Number of data rows (header excluded).
    pub fn count(&self) -> AppResult<usize> {
        let mut n = 0;
        for row in self.rows()? {
            row?;
            n += 1;
        }
        Ok(n)
    }
}
