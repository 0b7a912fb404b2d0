//! Participant path resolution and split cache layout.

use crate::core::constants::{TRAIN_CACHE_FILE, VALID_CACHE_FILE};
use crate::core::types::SplitKind;
use std::path::{Path, PathBuf};

/// Substitute `client_id` for every occurrence of `placeholder` in `template`.
///
/// Text outside the placeholder occurrences is left untouched.
pub fn resolve_client_path(template: &str, placeholder: &str, client_id: &str) -> PathBuf {
    PathBuf::from(template.replace(placeholder, client_id))
}

/// Locations of the cached train/validation subsets of one participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitCachePaths {
    /// Cached training rows
    pub train: PathBuf,
    /// Cached validation rows
    pub valid: PathBuf,
}

impl SplitCachePaths {
    /// Sibling cache files in the directory of `source`
    pub fn beside<P: AsRef<Path>>(source: P) -> Self {
        let dir = source
            .as_ref()
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        SplitCachePaths {
            train: dir.join(TRAIN_CACHE_FILE),
            valid: dir.join(VALID_CACHE_FILE),
        }
    }

    /// Path of one subset
    pub fn get(&self, split: SplitKind) -> &Path {
        match split {
            SplitKind::Train => &self.train,
            SplitKind::Validation => &self.valid,
        }
    }
}
