//! Configuration management for the vertical data loader.

pub mod core;

pub use self::core::{LoaderConfig, LoaderConfigBuilder};

use crate::core::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration file format, picked from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigFormat {
    /// TOML configuration format
    Toml,
    /// JSON configuration format
    Json,
}

impl Default for ConfigFormat {
    fn default() -> Self {
        ConfigFormat::Toml
    }
}

impl ConfigFormat {
    /// Detect the format of a configuration file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        match path.as_ref().extension().and_then(|s| s.to_str()) {
            Some("json") => Ok(ConfigFormat::Json),
            Some("toml") => Ok(ConfigFormat::Toml),
            other => Err(crate::config_error!(
                "Unsupported config file format {:?}. Use .json or .toml",
                other.unwrap_or("")
            )),
        }
    }
}
