//! Common test utilities for loader integration tests.
#![allow(dead_code)]

use csv::StringRecord;
use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};
use vertical_data_loader::dataset::CsvConfig;
use vertical_data_loader::*;

/// Path template rooted in `root` with the default placeholder
pub fn template_in(root: &Path) -> String {
    root.join("site-x").join("split.csv").display().to_string()
}

/// Write a participant's source file: header plus `num_rows` rows.
///
/// Row `i` is `"{i},{i}.5,{10*i}"`, so row identity survives the split.
pub fn create_source_csv(root: &Path, client_id: &str, num_rows: usize) -> PathBuf {
    let dir = root.join(client_id);
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("split.csv");

    let mut content = String::from("label,f1,f2\n");
    for i in 0..num_rows {
        content.push_str(&format!("{},{}.5,{}\n", i, i, 10 * i));
    }
    fs::write(&path, content).unwrap();
    path
}

/// Expected cache line for source row `i`
pub fn source_line(i: usize) -> String {
    format!("{},{}.5,{}", i, i, 10 * i)
}

/// Loader configuration for `client_id` over a template rooted in `root`
pub fn config_for(root: &Path, client_id: &str, label_owner: &str, proportion: f64) -> LoaderConfig {
    LoaderConfigBuilder::new()
        .data_split_path(template_in(root))
        .label_owner(label_owner)
        .train_proportion(proportion)
        .client_id(client_id)
        .data_split_mode(DataSplitMode::Col)
        .build()
        .unwrap()
}

/// Lines of a file, without trailing newline
pub fn read_lines<P: AsRef<Path>>(path: P) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

/// Local store that counts reads and writes
#[derive(Debug, Default)]
pub struct CountingStore {
    inner: LocalStore,
    pub reads: Cell<usize>,
    pub writes: Cell<usize>,
}

impl SplitStore for CountingStore {
    fn exists(&self, path: &Path) -> bool {
        self.inner.exists(path)
    }

    fn read_rows(&self, path: &Path, config: &CsvConfig) -> Result<Vec<StringRecord>> {
        self.reads.set(self.reads.get() + 1);
        self.inner.read_rows(path, config)
    }

    fn write_rows(&self, path: &Path, rows: &[StringRecord]) -> Result<()> {
        self.writes.set(self.writes.get() + 1);
        self.inner.write_rows(path, rows)
    }
}

/// Handle recording the request and the file content it was built from
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedMatrix {
    pub request: MatrixRequest,
    pub content: String,
}

/// Matrix factory that snapshots the cache file instead of parsing it
#[derive(Debug, Default)]
pub struct RecordingFactory;

impl MatrixFactory for RecordingFactory {
    type Matrix = RecordedMatrix;

    fn build(&self, request: &MatrixRequest) -> Result<RecordedMatrix> {
        let content = fs::read_to_string(&request.path)
            .map_err(|e| LoaderError::io(&request.path, e))?;
        Ok(RecordedMatrix {
            request: request.clone(),
            content,
        })
    }
}
