//! Loader configuration structure and builder.
//!
//! The participant identity and split mode are plain fields here, fixed at
//! construction, instead of state a host framework pokes into the loader
//! after the fact.

use super::ConfigFormat;
use crate::core::constants::*;
use crate::core::error::{LoaderError, Result};
use crate::core::types::*;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration of a [`VerticalDataLoader`](crate::VerticalDataLoader).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Path template of the source dataset; the placeholder stands for the participant
    pub data_split_path: String,
    /// Participant that owns the label column
    pub label_owner: ClientId,
    /// Fraction of rows assigned to training, in (0, 1]
    pub train_proportion: f64,
    /// Identifier of the participant this loader runs on
    pub client_id: ClientId,
    /// Matrix construction mode handed to the boosting engine
    pub data_split_mode: DataSplitMode,
    /// Token in `data_split_path` replaced by `client_id`
    pub client_placeholder: String,
    /// Source file starts with a header row
    pub has_header: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        LoaderConfig {
            data_split_path: String::new(),
            label_owner: String::new(),
            train_proportion: DEFAULT_TRAIN_PROPORTION,
            client_id: String::new(),
            data_split_mode: DataSplitMode::Col,
            client_placeholder: DEFAULT_CLIENT_PLACEHOLDER.to_string(),
            has_header: true,
        }
    }
}

impl LoaderConfig {
    /// Create a configuration from the three construction parameters.
    ///
    /// The participant still has to be bound with [`LoaderConfig::with_context`]
    /// or the builder before loading.
    pub fn new<P, L>(data_split_path: P, label_owner: L, train_proportion: f64) -> Self
    where
        P: Into<String>,
        L: Into<String>,
    {
        LoaderConfig {
            data_split_path: data_split_path.into(),
            label_owner: label_owner.into(),
            train_proportion,
            ..LoaderConfig::default()
        }
    }

    /// Copy of this configuration bound to a participant and split mode
    pub fn with_context<C: Into<String>>(&self, client_id: C, mode: DataSplitMode) -> Self {
        LoaderConfig {
            client_id: client_id.into(),
            data_split_mode: mode,
            ..self.clone()
        }
    }

    /// Whether the bound participant owns the label column
    pub fn is_label_owner(&self) -> bool {
        self.client_id == self.label_owner
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        let p = self.train_proportion;
        if !p.is_finite() || p <= 0.0 || p > 1.0 {
            return Err(LoaderError::invalid_parameter(
                "train_proportion",
                p.to_string(),
                "must be in range (0.0, 1.0]",
            ));
        }

        if self.data_split_path.is_empty() {
            return Err(LoaderError::invalid_parameter(
                "data_split_path",
                "",
                "must not be empty",
            ));
        }

        if self.client_placeholder.is_empty() {
            return Err(LoaderError::invalid_parameter(
                "client_placeholder",
                "",
                "must not be empty",
            ));
        }

        if self.client_id.is_empty() {
            return Err(LoaderError::invalid_parameter(
                "client_id",
                "",
                "participant identifier has not been set",
            ));
        }

        if self.label_owner.is_empty() {
            return Err(LoaderError::invalid_parameter(
                "label_owner",
                "",
                "must name the participant holding the label column",
            ));
        }

        if !self.data_split_path.contains(&self.client_placeholder) {
            log::warn!(
                "Path template '{}' has no '{}' placeholder; all participants share one path",
                self.data_split_path,
                self.client_placeholder
            );
        }

        Ok(())
    }

    /// Load configuration from a `.json` or `.toml` file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| LoaderError::config(format!("Failed to read config file: {}", e)))?;

        let config = match format {
            ConfigFormat::Json => serde_json::from_str(&content)
                .map_err(|e| LoaderError::config(format!("Failed to parse JSON config: {}", e)))?,
            ConfigFormat::Toml => toml::from_str(&content)
                .map_err(|e| LoaderError::config(format!("Failed to parse TOML config: {}", e)))?,
        };

        log::debug!("Loaded loader configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a `.json` or `.toml` file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)
                .map_err(|e| LoaderError::config(format!("Failed to serialize to JSON: {}", e)))?,
            ConfigFormat::Toml => toml::to_string_pretty(self)
                .map_err(|e| LoaderError::config(format!("Failed to serialize to TOML: {}", e)))?,
        };

        std::fs::write(path, content)
            .map_err(|e| LoaderError::config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }
}

/// Configuration builder for fluent configuration creation
#[derive(Debug, Clone)]
pub struct LoaderConfigBuilder {
    config: LoaderConfig,
    validation_errors: Vec<String>,
}

impl LoaderConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        LoaderConfigBuilder {
            config: LoaderConfig::default(),
            validation_errors: Vec::new(),
        }
    }

    /// Set the dataset path template
    pub fn data_split_path<S: Into<String>>(mut self, path: S) -> Self {
        self.config.data_split_path = path.into();
        self
    }

    /// Set the label-owning participant
    pub fn label_owner<S: Into<String>>(mut self, owner: S) -> Self {
        self.config.label_owner = owner.into();
        self
    }

    /// Set the train proportion
    pub fn train_proportion(mut self, proportion: f64) -> Self {
        if !(proportion > 0.0 && proportion <= 1.0) {
            self.validation_errors
                .push("train_proportion must be in range (0.0, 1.0]".to_string());
        }
        self.config.train_proportion = proportion;
        self
    }

    /// Set the participant this loader runs on
    pub fn client_id<S: Into<String>>(mut self, client_id: S) -> Self {
        self.config.client_id = client_id.into();
        self
    }

    /// Set the matrix construction mode
    pub fn data_split_mode(mut self, mode: DataSplitMode) -> Self {
        self.config.data_split_mode = mode;
        self
    }

    /// Set the placeholder token of the path template
    pub fn client_placeholder<S: Into<String>>(mut self, placeholder: S) -> Self {
        self.config.client_placeholder = placeholder.into();
        self
    }

    /// Set whether the source file starts with a header row
    pub fn has_header(mut self, has_header: bool) -> Self {
        self.config.has_header = has_header;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<LoaderConfig> {
        if !self.validation_errors.is_empty() {
            return Err(LoaderError::config(format!(
                "Configuration validation failed: {}",
                self.validation_errors.join(", ")
            )));
        }

        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for LoaderConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
