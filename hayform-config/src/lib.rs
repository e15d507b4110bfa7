//! Shared configuration loader for the hayform toolchain.
//!
//! `defaults/hayform.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`HayformConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use hayform_babel::model::{EntryType, ResolverPrefixes};
use hayform_babel::{ConstraintRules, SessionDefaults};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/hayform.default.toml");

/// Top-level configuration consumed by hayform applications.
#[derive(Debug, Clone, Deserialize)]
pub struct HayformConfig {
    pub record: RecordConfig,
    pub serial: SerialConfig,
    pub check: CheckConfig,
    pub log: LogConfig,
}

/// Defaults for new and blank-labelled records.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordConfig {
    pub default_label: String,
    pub default_type: EntryType,
}

impl From<&RecordConfig> for SessionDefaults {
    fn from(config: &RecordConfig) -> Self {
        SessionDefaults {
            default_label: config.default_label.clone(),
            default_type: config.default_type,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SerialConfig {
    pub strip_prefixes: Vec<String>,
}

impl From<&SerialConfig> for ResolverPrefixes {
    fn from(config: &SerialConfig) -> Self {
        ResolverPrefixes(config.strip_prefixes.clone())
    }
}

/// Mirrors the knobs exposed by the field constraint checker.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckConfig {
    pub enforce_patterns: bool,
}

impl From<&CheckConfig> for ConstraintRules {
    fn from(config: &CheckConfig) -> Self {
        ConstraintRules {
            enforce_patterns: config.enforce_patterns,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub filter: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<HayformConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<HayformConfig, ConfigError> {
    Loader::new().build()
}
