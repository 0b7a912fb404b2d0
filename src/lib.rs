//! # Vertical Data Loader
//!
//! Train/validation loading for vertically partitioned (column-split)
//! gradient boosting. Every participant holds a disjoint set of columns for
//! the same rows; one of them, the label owner, also holds the label.
//!
//! For each participant the loader:
//!
//! 1. resolves the participant's dataset from a path template
//!    (`/data/site-x/split.csv` becomes `/data/site-2/split.csv`),
//! 2. splits it once by row position into `train.csv` and `valid.csv` next
//!    to the source, skipping the split when both files already exist,
//! 3. builds a train and a validation matrix from those files, with the
//!    label annotated in column 0 only on the label owner.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vertical_data_loader::{DataLoader, DataSplitMode, LoaderConfigBuilder, VerticalDataLoader};
//!
//! # fn main() -> vertical_data_loader::Result<()> {
//! vertical_data_loader::init();
//!
//! let config = LoaderConfigBuilder::new()
//!     .data_split_path("/data/site-x/split.csv")
//!     .label_owner("site-1")
//!     .train_proportion(0.8)
//!     .client_id("site-2")
//!     .data_split_mode(DataSplitMode::Col)
//!     .build()?;
//!
//! let loader = VerticalDataLoader::new(config)?;
//! let (train, valid) = loader.load_data()?;
//! println!("{} train rows, {} validation rows", train.num_rows(), valid.num_rows());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: error type, split mode and format enums, constants
//! - [`config`]: [`LoaderConfig`] and its builder, json/toml files
//! - [`dataset`]: path resolution, row split, cache store, matrix requests

#![doc(html_root_url = "https://docs.rs/vertical-data-loader/")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub,
    non_snake_case,
    non_upper_case_globals
)]

// Core infrastructure module - always available
pub mod core;

// Configuration management module
pub mod config;

// Dataset split, cache and matrix module
pub mod dataset;

// Re-export core functionality for convenience
pub use crate::core::{
    constants::*,
    error::{LoaderError, Result},
    types::*,
};

// Re-export configuration functionality
pub use config::{ConfigFormat, LoaderConfig, LoaderConfigBuilder};

// Re-export dataset functionality
pub use dataset::{
    CsvMatrixFactory, DMatrix, DataLoader, LocalStore, MatrixFactory, MatrixRequest,
    SplitCachePaths, SplitPlan, SplitStore, VerticalDataLoader,
};

/// Initialize logging for the loader.
///
/// Installs env_logger with an `info` default filter unless `RUST_LOG` says
/// otherwise. Leaves an already installed logger alone.
pub fn init() {
    crate::core::initialize_logging()
}

/// Check if [`init`] has been called.
pub fn is_initialized() -> bool {
    crate::core::is_logging_initialized()
}
