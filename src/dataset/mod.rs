//! Dataset splitting, caching and matrix construction.
//!
//! The pipeline for one participant is: resolve the participant's source
//! path ([`path`]), split the rows once ([`split`]) into cache files through
//! a [`store::SplitStore`], then build train and validation matrices from
//! the cache ([`matrix`]). [`loader::VerticalDataLoader`] drives it.

pub mod loader;
pub mod matrix;
pub mod path;
pub mod split;
pub mod store;

// Re-export commonly used types
pub use loader::{CsvConfig, DataLoader, VerticalDataLoader};
pub use matrix::{CsvMatrixFactory, DMatrix, MatrixFactory, MatrixRequest};
pub use path::{resolve_client_path, SplitCachePaths};
pub use split::{split_rows, train_row_count, SplitPlan};
pub use store::{LocalStore, SplitStore};
