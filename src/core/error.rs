//! Error handling and error types for the vertical data loader.
//!
//! Every failure in the split-and-load pipeline surfaces to the caller
//! unchanged through [`LoaderError`]; nothing is caught or retried locally.

use crate::core::types::SplitKind;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for the loader.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// Configuration file and configuration structure errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}, {reason}")]
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },

    /// File I/O errors, tagged with the path that was being accessed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// CSV parsing and writing errors
    #[error("CSV parsing error: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    /// A split subset that must hold rows came out empty
    #[error("Empty {split} split: {total_rows} rows with train proportion {train_proportion}")]
    EmptySplit {
        split: SplitKind,
        total_rows: usize,
        train_proportion: f64,
    },

    /// Malformed matrix request string
    #[error("Invalid matrix request: {message}")]
    MatrixRequest { message: String },

    /// Matrix construction errors
    #[error("Matrix construction error: {message}")]
    Matrix { message: String },
}

/// Type alias for Results using LoaderError
pub type Result<T> = std::result::Result<T, LoaderError>;

impl LoaderError {
    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        LoaderError::Config {
            message: message.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter<P, V, R>(parameter: P, value: V, reason: R) -> Self
    where
        P: Into<String>,
        V: Into<String>,
        R: Into<String>,
    {
        LoaderError::InvalidParameter {
            parameter: parameter.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an I/O error for the given path
    pub fn io<P: AsRef<Path>>(path: P, source: io::Error) -> Self {
        LoaderError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a matrix request error
    pub fn matrix_request<S: Into<String>>(message: S) -> Self {
        LoaderError::MatrixRequest {
            message: message.into(),
        }
    }

    /// Create a matrix construction error
    pub fn matrix<S: Into<String>>(message: S) -> Self {
        LoaderError::Matrix {
            message: message.into(),
        }
    }

    /// Kind of the underlying I/O error, if this is one
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            LoaderError::Io { source, .. } => Some(source.kind()),
            LoaderError::Csv { source } => match source.kind() {
                csv::ErrorKind::Io(err) => Some(err.kind()),
                _ => None,
            },
            _ => None,
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            LoaderError::Config { .. } => "config",
            LoaderError::InvalidParameter { .. } => "invalid_parameter",
            LoaderError::Io { .. } => "io",
            LoaderError::Csv { .. } => "csv",
            LoaderError::EmptySplit { .. } => "empty_split",
            LoaderError::MatrixRequest { .. } => "matrix_request",
            LoaderError::Matrix { .. } => "matrix",
        }
    }
}

/// Convenience macro for configuration errors
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::core::error::LoaderError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::core::error::LoaderError::config(format!($fmt, $($arg)*))
    };
}
