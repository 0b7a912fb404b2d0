//! Training matrix requests and handles.
//!
//! A [`MatrixRequest`] is the boundary to the boosting engine: a
//! pseudo-URL `"<path>?format=csv[&label_column=0]"` plus the data split
//! mode. A [`MatrixFactory`] turns a request into a matrix handle; the
//! built-in [`CsvMatrixFactory`] loads it into a dense [`DMatrix`].

use super::loader::csv::{parse_numeric_value, read_records, CsvConfig};
use crate::core::error::{LoaderError, Result};
use crate::core::types::{DataFormat, DataSplitMode};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use std::fmt;
use std::path::{Path, PathBuf};

/// Request to build one training matrix from a cache file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixRequest {
    /// File the matrix is read from
    pub path: PathBuf,
    /// File format
    pub format: DataFormat,
    /// Column holding the label, when this shard carries one
    pub label_column: Option<usize>,
    /// Row or column split
    pub data_split_mode: DataSplitMode,
}

impl MatrixRequest {
    /// CSV request for `path`
    pub fn csv<P: Into<PathBuf>>(
        path: P,
        label_column: Option<usize>,
        data_split_mode: DataSplitMode,
    ) -> Self {
        MatrixRequest {
            path: path.into(),
            format: DataFormat::Csv,
            label_column,
            data_split_mode,
        }
    }

    /// Pseudo-URL understood by the matrix constructor
    pub fn uri(&self) -> String {
        let mut uri = format!("{}?format={}", self.path.display(), self.format);
        if let Some(column) = self.label_column {
            uri.push_str(&format!("&label_column={}", column));
        }
        uri
    }

    /// Parse a pseudo-URL produced by [`MatrixRequest::uri`]
    pub fn parse(uri: &str, data_split_mode: DataSplitMode) -> Result<Self> {
        let (path, query) = uri
            .rsplit_once('?')
            .ok_or_else(|| LoaderError::matrix_request(format!("missing query in '{}'", uri)))?;

        if path.is_empty() {
            return Err(LoaderError::matrix_request(format!("missing path in '{}'", uri)));
        }

        let mut format = None;
        let mut label_column = None;

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').ok_or_else(|| {
                LoaderError::matrix_request(format!("malformed parameter '{}'", pair))
            })?;

            match key {
                "format" => {
                    format = Some(DataFormat::from_name(value).ok_or_else(|| {
                        LoaderError::matrix_request(format!("unsupported format '{}'", value))
                    })?);
                }
                "label_column" => {
                    label_column = Some(value.parse::<usize>().map_err(|_| {
                        LoaderError::matrix_request(format!("invalid label_column '{}'", value))
                    })?);
                }
                other => {
                    return Err(LoaderError::matrix_request(format!(
                        "unknown parameter '{}'",
                        other
                    )))
                }
            }
        }

        let format = format
            .ok_or_else(|| LoaderError::matrix_request(format!("missing format in '{}'", uri)))?;

        Ok(MatrixRequest {
            path: PathBuf::from(path),
            format,
            label_column,
            data_split_mode,
        })
    }
}

impl fmt::Display for MatrixRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri())
    }
}

/// Builds matrix handles from requests
pub trait MatrixFactory {
    /// Handle type consumed by the training routine
    type Matrix;

    /// Build a fresh matrix for `request`
    fn build(&self, request: &MatrixRequest) -> Result<Self::Matrix>;
}

impl<F: MatrixFactory + ?Sized> MatrixFactory for &F {
    type Matrix = F::Matrix;

    fn build(&self, request: &MatrixRequest) -> Result<Self::Matrix> {
        (**self).build(request)
    }
}

/// Dense in-memory training matrix
#[derive(Debug, Clone)]
pub struct DMatrix {
    request: MatrixRequest,
    features: Array2<f32>,
    labels: Option<Array1<f32>>,
}

impl DMatrix {
    /// Request this matrix was built from
    pub fn request(&self) -> &MatrixRequest {
        &self.request
    }

    /// Feature block of this shard, label column removed
    pub fn features(&self) -> ArrayView2<'_, f32> {
        self.features.view()
    }

    /// Labels, present only on the label owner's shard
    pub fn labels(&self) -> Option<ArrayView1<'_, f32>> {
        self.labels.as_ref().map(|l| l.view())
    }

    /// Number of rows
    pub fn num_rows(&self) -> usize {
        self.features.nrows()
    }

    /// Number of feature columns held by this shard
    pub fn num_features(&self) -> usize {
        self.features.ncols()
    }

    /// Split mode the matrix was built in
    pub fn data_split_mode(&self) -> DataSplitMode {
        self.request.data_split_mode
    }
}

/// Loads CSV requests into [`DMatrix`] handles
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvMatrixFactory;

impl CsvMatrixFactory {
    /// Create a CSV matrix factory
    pub fn new() -> Self {
        CsvMatrixFactory
    }

    fn parse_cell(path: &Path, value: &str, row: usize, col: usize) -> Result<f32> {
        parse_numeric_value(value).ok_or_else(|| {
            LoaderError::matrix(format!(
                "Invalid value '{}' at row {}, column {} of {}",
                value,
                row + 1,
                col,
                path.display()
            ))
        })
    }
}

impl MatrixFactory for CsvMatrixFactory {
    type Matrix = DMatrix;

    fn build(&self, request: &MatrixRequest) -> Result<DMatrix> {
        let records = read_records(&request.path, &CsvConfig::headerless())?;
        let num_rows = records.len();
        let num_cols = records.first().map_or(0, |r| r.len());

        if let Some(label_col) = request.label_column {
            if num_rows > 0 && label_col >= num_cols {
                return Err(LoaderError::matrix(format!(
                    "Label column {} out of bounds (num_cols: {})",
                    label_col, num_cols
                )));
            }
        }

        let mut values = Vec::with_capacity(num_rows * num_cols);
        for (row_idx, record) in records.iter().enumerate() {
            for (col_idx, value) in record.iter().enumerate() {
                values.push(Self::parse_cell(&request.path, value, row_idx, col_idx)?);
            }
        }

        let full = Array2::from_shape_vec((num_rows, num_cols), values)
            .map_err(|e| LoaderError::matrix(format!("Failed to shape matrix: {}", e)))?;

        let (features, labels) = match request.label_column {
            Some(label_col) if num_cols > 0 => {
                let labels = full.column(label_col).to_owned();
                let feature_cols: Vec<usize> = (0..num_cols).filter(|&c| c != label_col).collect();
                (full.select(Axis(1), &feature_cols), Some(labels))
            }
            Some(_) => (full, Some(Array1::zeros(0))),
            None => (full, None),
        };

        log::debug!(
            "Built {}x{} matrix from {} (label: {}, mode: {})",
            features.nrows(),
            features.ncols(),
            request,
            labels.is_some(),
            request.data_split_mode
        );

        Ok(DMatrix {
            request: request.clone(),
            features,
            labels,
        })
    }
}
