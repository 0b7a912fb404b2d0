//! Core infrastructure module for the vertical data loader.
//!
//! - [`types`]: split mode, data format and split kind enumerations
//! - [`constants`]: placeholder token, cache file names and defaults
//! - [`error`]: the [`LoaderError`] taxonomy

pub mod constants;
pub mod error;
pub mod types;

pub use constants::*;
pub use error::{LoaderError, Result};
pub use types::*;

use std::sync::atomic::{AtomicBool, Ordering};

static LOGGING_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Install the env_logger backend for the `log` facade.
///
/// Defaults the filter to `info` when `RUST_LOG` is unset. Safe to call more
/// than once; a logger installed by the host application is left alone.
pub(crate) fn initialize_logging() {
    if LOGGING_INITIALIZED.swap(true, Ordering::SeqCst) {
        return;
    }

    let env = env_logger::Env::default().default_filter_or("info");
    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::debug!("Logger already installed by host, keeping it");
    }
}

/// Whether [`initialize_logging`] has run
pub(crate) fn is_logging_initialized() -> bool {
    LOGGING_INITIALIZED.load(Ordering::SeqCst)
}
