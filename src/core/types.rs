//! Core data types shared by the configuration, split and matrix layers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Participant identifier, e.g. `"site-1"`.
pub type ClientId = String;

/// How the boosting engine should treat the matrix built on this participant.
///
/// The integer values match the engine's `data_split_mode` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSplitMode {
    /// Horizontal partitioning: every participant holds whole rows
    Row,
    /// Vertical partitioning: every participant holds a column shard of the same rows
    Col,
}

impl DataSplitMode {
    /// Numeric code passed to the matrix constructor
    pub fn as_i32(self) -> i32 {
        match self {
            DataSplitMode::Row => 0,
            DataSplitMode::Col => 1,
        }
    }

    /// Whether the matrix is one vertical shard of a larger matrix
    pub fn is_column_split(self) -> bool {
        self == DataSplitMode::Col
    }
}

impl Default for DataSplitMode {
    fn default() -> Self {
        DataSplitMode::Col
    }
}

impl fmt::Display for DataSplitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSplitMode::Row => write!(f, "row"),
            DataSplitMode::Col => write!(f, "col"),
        }
    }
}

impl TryFrom<i32> for DataSplitMode {
    type Error = i32;

    fn try_from(value: i32) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(DataSplitMode::Row),
            1 => Ok(DataSplitMode::Col),
            other => Err(other),
        }
    }
}

/// File format carried in the matrix request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataFormat {
    /// Comma-separated values
    Csv,
}

impl DataFormat {
    /// Name used in the `format=` query parameter
    pub fn as_str(self) -> &'static str {
        match self {
            DataFormat::Csv => "csv",
        }
    }

    /// Parse a `format=` value
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "csv" => Some(DataFormat::Csv),
            _ => None,
        }
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two subsets produced by the split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SplitKind {
    /// Leading rows used for training
    Train,
    /// Trailing rows used for validation
    Validation,
}

impl fmt::Display for SplitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitKind::Train => write!(f, "train"),
            SplitKind::Validation => write!(f, "validation"),
        }
    }
}
