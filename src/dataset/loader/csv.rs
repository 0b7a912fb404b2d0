//! CSV row reading and writing for source and cache files.
//!
//! Rows are kept as raw [`StringRecord`]s so the cache files carry the
//! source text byte for byte; numeric parsing only happens when a matrix
//! is built.

use crate::core::constants::CSV_DELIMITER;
use crate::core::error::{LoaderError, Result};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// CSV-specific configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsvConfig {
    /// Has header row
    pub has_header: bool,
    /// Field delimiter
    pub delimiter: u8,
    /// Quote character
    pub quote_char: u8,
    /// Buffer size for reading
    pub buffer_size: usize,
}

impl Default for CsvConfig {
    fn default() -> Self {
        CsvConfig {
            has_header: true,
            delimiter: CSV_DELIMITER,
            quote_char: b'"',
            buffer_size: 8192,
        }
    }
}

impl CsvConfig {
    /// Configuration for headerless cache files
    pub fn headerless() -> Self {
        CsvConfig {
            has_header: false,
            ..CsvConfig::default()
        }
    }

    /// Set whether the file has a header row
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }
}

/// Read every data row of the CSV file at `path`.
///
/// The header row, if configured, is consumed and not returned. Rows with a
/// field count different from the first row are a parse error.
pub fn read_records<P: AsRef<Path>>(path: P, config: &CsvConfig) -> Result<Vec<StringRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LoaderError::io(path, e))?;
    let records = read_records_from(file, config)?;

    log::debug!("Read {} rows from {}", records.len(), path.display());
    Ok(records)
}

/// Read every data row from an arbitrary reader
pub fn read_records_from<R: Read>(reader: R, config: &CsvConfig) -> Result<Vec<StringRecord>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(config.delimiter)
        .quote(config.quote_char)
        .has_headers(config.has_header)
        .flexible(false)
        .buffer_capacity(config.buffer_size)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in reader.records() {
        records.push(result?);
    }

    Ok(records)
}

/// Write `records` headerless and without a row index.
pub fn write_records<W: Write>(writer: W, records: &[StringRecord]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(CSV_DELIMITER)
        .has_headers(false)
        .from_writer(writer);

    for record in records {
        writer.write_record(record)?;
    }

    writer
        .flush()
        .map_err(|e| LoaderError::Csv { source: e.into() })?;
    Ok(())
}

/// Try to parse numeric value, returning NaN for missing values and None
/// for text that is neither a number nor a missing marker.
pub fn parse_numeric_value(value: &str) -> Option<f32> {
    let trimmed = value.trim();

    if trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("na")
        || trimmed.eq_ignore_ascii_case("nan")
        || trimmed.eq_ignore_ascii_case("null")
        || trimmed.eq_ignore_ascii_case("none")
        || trimmed == "?"
    {
        return Some(f32::NAN);
    }

    trimmed.parse::<f32>().ok()
}
