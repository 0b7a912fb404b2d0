//! Split-and-cache loader for vertically partitioned training.
//!
//! Each participant resolves its own copy of the dataset from a path
//! template, splits it once into `train.csv`/`valid.csv` next to the source,
//! and builds both matrices from those cache files in column-split mode.
//! Only the label owner's matrices carry the label column.

use super::csv::CsvConfig;
use super::DataLoader;
use crate::config::LoaderConfig;
use crate::core::constants::LABEL_COLUMN;
use crate::core::error::Result;
use crate::core::types::SplitKind;
use crate::dataset::matrix::{CsvMatrixFactory, MatrixFactory, MatrixRequest};
use crate::dataset::path::{resolve_client_path, SplitCachePaths};
use crate::dataset::split::{split_rows, SplitPlan};
use crate::dataset::store::{LocalStore, SplitStore};
use std::path::PathBuf;

/// Loader for one participant of a vertically partitioned job
#[derive(Debug, Clone)]
pub struct VerticalDataLoader<S = LocalStore, F = CsvMatrixFactory> {
    config: LoaderConfig,
    store: S,
    factory: F,
}

impl VerticalDataLoader {
    /// Loader on the local filesystem building dense CSV matrices
    pub fn new(config: LoaderConfig) -> Result<Self> {
        Self::with_parts(config, LocalStore::new(), CsvMatrixFactory::new())
    }
}

impl<S: SplitStore, F: MatrixFactory> VerticalDataLoader<S, F> {
    /// Loader with a custom store and matrix factory
    pub fn with_parts(config: LoaderConfig, store: S, factory: F) -> Result<Self> {
        config.validate()?;
        Ok(VerticalDataLoader {
            config,
            store,
            factory,
        })
    }

    /// Source dataset path of this participant
    pub fn client_data_path(&self) -> PathBuf {
        resolve_client_path(
            &self.config.data_split_path,
            &self.config.client_placeholder,
            &self.config.client_id,
        )
    }

    /// Cache file locations of this participant
    pub fn cache_paths(&self) -> SplitCachePaths {
        SplitCachePaths::beside(self.client_data_path())
    }

    /// Column carrying the label on this participant, if any
    pub fn label_column(&self) -> Option<usize> {
        if self.config.is_label_owner() {
            Some(LABEL_COLUMN)
        } else {
            None
        }
    }

    /// Whether both cache files are already materialized
    pub fn is_cached(&self) -> bool {
        let paths = self.cache_paths();
        self.store.exists(&paths.train) && self.store.exists(&paths.valid)
    }

    /// Split the source into the cache files unless both already exist.
    ///
    /// Returns the plan that was written, or `None` when the cache was reused.
    /// A half-written pair counts as missing and both files are rewritten.
    pub fn ensure_split(&self) -> Result<Option<SplitPlan>> {
        let paths = self.cache_paths();
        if self.is_cached() {
            log::debug!(
                "Reusing cached split {} / {}",
                paths.train.display(),
                paths.valid.display()
            );
            return Ok(None);
        }

        let source = self.client_data_path();
        log::info!("Splitting {} for client {}", source.display(), self.config.client_id);

        let csv_config = CsvConfig::default().with_header(self.config.has_header);
        let rows = self.store.read_rows(&source, &csv_config)?;
        let plan = SplitPlan::new(rows.len(), self.config.train_proportion)?;
        let (train, valid) = split_rows(rows, &plan);

        self.store.write_rows(&paths.train, &train)?;
        self.store.write_rows(&paths.valid, &valid)?;

        log::info!(
            "Cached {} train and {} validation rows of {} in {}",
            plan.train_rows,
            plan.valid_rows,
            plan.total_rows,
            paths.train.parent().map_or_else(|| ".".into(), |d| d.display().to_string())
        );

        Ok(Some(plan))
    }

    /// Matrix request for one cached subset
    pub fn matrix_request(&self, split: SplitKind) -> MatrixRequest {
        MatrixRequest::csv(
            self.cache_paths().get(split),
            self.label_column(),
            self.config.data_split_mode,
        )
    }
}

impl<S: SplitStore, F: MatrixFactory> DataLoader for VerticalDataLoader<S, F> {
    type Matrix = F::Matrix;

    fn load_data(&self) -> Result<(F::Matrix, F::Matrix)> {
        self.ensure_split()?;

        let train_request = self.matrix_request(SplitKind::Train);
        let valid_request = self.matrix_request(SplitKind::Validation);
        log::debug!(
            "Building matrices {} and {} in {} mode",
            train_request,
            valid_request,
            self.config.data_split_mode
        );

        let train = self.factory.build(&train_request)?;
        let valid = self.factory.build(&valid_request)?;
        Ok((train, valid))
    }

    fn config(&self) -> &LoaderConfig {
        &self.config
    }
}
