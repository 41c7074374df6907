//! Configuration for model audits

use serde::{Deserialize, Serialize};

/// Name of the archive entry holding the model document in a template package
pub const DEFAULT_SCHEMA_ENTRY: &str = "DataModelSchema";

/// Default upper bound on the uncompressed model document (256 MiB)
pub const DEFAULT_MAX_DOCUMENT_BYTES: u64 = 256 * 1024 * 1024;

/// How measures with an empty or whitespace-only expression are treated by
/// duplicate detection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlankExpressionPolicy {
    /// Blank expressions share the key `""` and are reported as duplicates
    /// of each other
    #[default]
    Include,
    /// Blank expressions never take part in duplicate detection
    Skip,
}

/// Configuration for loading and auditing a model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AuditConfig {
    /// Archive entry that holds the model document
    pub schema_entry: String,

    /// Maximum uncompressed size of the model document
    pub max_document_bytes: u64,

    /// Duplicate-detection treatment of blank expressions
    pub blank_expressions: BlankExpressionPolicy,

    /// Treat whitespace-only descriptions as missing
    pub blank_descriptions_missing: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            schema_entry: DEFAULT_SCHEMA_ENTRY.to_string(),
            max_document_bytes: DEFAULT_MAX_DOCUMENT_BYTES,
            blank_expressions: BlankExpressionPolicy::Include,
            blank_descriptions_missing: false,
        }
    }
}

impl AuditConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> AuditConfigBuilder {
        AuditConfigBuilder::default()
    }

    /// Parse a TOML configuration. Missing keys keep their defaults.
    #[cfg(feature = "config-file")]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load a TOML configuration file
    #[cfg(feature = "config-file")]
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(path.to_path_buf(), e.to_string()))?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded audit configuration");
        Ok(config)
    }
}

/// Errors while reading a configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0:?}: {1}")]
    Read(std::path::PathBuf, String),
    #[error("Invalid config: {0}")]
    Parse(String),
}

/// Builder for AuditConfig
#[derive(Debug, Default)]
pub struct AuditConfigBuilder {
    config: AuditConfig,
}

impl AuditConfigBuilder {
    /// Set the archive entry holding the model document
    pub fn schema_entry(mut self, entry: impl Into<String>) -> Self {
        self.config.schema_entry = entry.into();
        self
    }

    /// Set the maximum document size in bytes
    pub fn max_document_bytes(mut self, limit: u64) -> Self {
        self.config.max_document_bytes = limit;
        self
    }

    pub fn blank_expressions(mut self, policy: BlankExpressionPolicy) -> Self {
        self.config.blank_expressions = policy;
        self
    }

    pub fn blank_descriptions_missing(mut self, missing: bool) -> Self {
        self.config.blank_descriptions_missing = missing;
        self
    }

    /// Build the configuration
    pub fn build(self) -> AuditConfig {
        self.config
    }
}
