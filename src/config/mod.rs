//! Configuration management for lsd-metadata
//!
//! Handles loading and validation of the resolution and logging settings used
//! by binaries built on the loader. The library API itself takes no
//! configuration: a [`PackageMetadataLoader`](crate::package::PackageMetadataLoader)
//! only needs a resolution context.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default upper bound for a single fetched file (1 MiB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024;

fn default_max_file_size() -> u64 {
    DEFAULT_MAX_FILE_SIZE
}

/// Resolution context configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionConfig {
    /// Directory that relative package roots are resolved against
    /// (None = process working directory)
    #[serde(default)]
    pub base_dir: Option<String>,

    /// Maximum size of a single file read through the resolution context (bytes)
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            base_dir: None,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log filter (e.g. "info", "lsd_metadata=debug"). RUST_LOG takes precedence.
    #[serde(default)]
    pub filter: Option<String>,

    /// Emit JSON formatted logs (requires the `json-logging` feature)
    #[serde(default)]
    pub json_format: bool,
}

/// Loader configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Resolution context configuration
    #[serde(default)]
    pub resolution: ResolutionConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: Option<LoggingConfig>,
}

impl LoaderConfig {
    /// Load configuration from a file, choosing TOML or JSON by extension
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => {
                let content = std::fs::read_to_string(path)?;
                Self::from_toml_str(&content)
            }
            _ => Self::from_json_file(path),
        }
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: LoaderConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: LoaderConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.resolution.max_file_size == 0 {
            return Err(anyhow::anyhow!(
                "resolution.max_file_size must be greater than 0"
            ));
        }

        if let Some(ref base_dir) = self.resolution.base_dir {
            if base_dir.trim().is_empty() {
                return Err(anyhow::anyhow!(
                    "resolution.base_dir must not be empty when set"
                ));
            }
        }

        Ok(())
    }
}
