//! Data loaders handing train/validation matrices to the boosting engine.

pub mod csv;
pub mod vertical;

pub use self::csv::CsvConfig;
pub use vertical::VerticalDataLoader;

use crate::config::LoaderConfig;
use crate::core::error::Result;

/// Data loader trait
pub trait DataLoader {
    /// Matrix handle produced for training and validation
    type Matrix;

    /// Produce a fresh (train, validation) pair
    fn load_data(&self) -> Result<(Self::Matrix, Self::Matrix)>;

    /// Get loader configuration
    fn config(&self) -> &LoaderConfig;
}
