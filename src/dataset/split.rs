//! Row-position train/validation split.
//!
//! The leading `floor(N * p)` rows go to training and the rest to
//! validation. Rows are never shuffled or stratified.

use crate::core::error::{LoaderError, Result};
use crate::core::types::SplitKind;

/// Row counts of a planned split
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitPlan {
    /// Rows in the source dataset
    pub total_rows: usize,
    /// Leading rows assigned to training
    pub train_rows: usize,
    /// Trailing rows assigned to validation
    pub valid_rows: usize,
}

impl SplitPlan {
    /// Plan the split of `total_rows` rows with the given train proportion.
    ///
    /// Fails when the training subset would be empty. An empty validation
    /// subset is allowed and only logged.
    pub fn new(total_rows: usize, train_proportion: f64) -> Result<Self> {
        let train_rows = train_row_count(total_rows, train_proportion);
        let plan = SplitPlan {
            total_rows,
            train_rows,
            valid_rows: total_rows - train_rows,
        };

        if plan.train_rows == 0 {
            return Err(LoaderError::EmptySplit {
                split: SplitKind::Train,
                total_rows,
                train_proportion,
            });
        }

        if plan.valid_rows == 0 {
            log::warn!(
                "Validation split is empty: {} rows with train proportion {}",
                total_rows,
                train_proportion
            );
        }

        Ok(plan)
    }
}

/// Number of leading rows assigned to training: `floor(total_rows * p)`.
pub fn train_row_count(total_rows: usize, train_proportion: f64) -> usize {
    let count = (total_rows as f64 * train_proportion).floor();
    if count <= 0.0 {
        0
    } else {
        (count as usize).min(total_rows)
    }
}

/// Split `rows` in place order into (train, validation) according to `plan`.
pub fn split_rows<T>(mut rows: Vec<T>, plan: &SplitPlan) -> (Vec<T>, Vec<T>) {
    let valid = rows.split_off(plan.train_rows.min(rows.len()));
    (rows, valid)
}
