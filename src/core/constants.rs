//! Constants controlling path resolution, cache layout and defaults.

/// Token in the path template that stands for the current participant.
pub const DEFAULT_CLIENT_PLACEHOLDER: &str = "site-x";

/// File name of the cached training subset.
pub const TRAIN_CACHE_FILE: &str = "train.csv";

/// File name of the cached validation subset.
pub const VALID_CACHE_FILE: &str = "valid.csv";

/// Column holding the label on the label owner's shard.
pub const LABEL_COLUMN: usize = 0;

/// Default fraction of rows assigned to training.
pub const DEFAULT_TRAIN_PROPORTION: f64 = 0.8;

/// Field delimiter of source and cache files.
pub const CSV_DELIMITER: u8 = b',';

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
