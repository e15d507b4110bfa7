//! Record input formats
//!
//! Records (label + entry model) can be read from JSON or YAML. This is the model the form
//! edits, not the emitted document: persons carry their `kind` tag and every field is optional,
//! missing ones take their defaults.

use crate::error::FormatError;
use crate::model::Record;

/// Serialization used for record files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    Json,
    Yaml,
}

impl RecordFormat {
    pub const ALL: [RecordFormat; 2] = [RecordFormat::Json, RecordFormat::Yaml];

    pub fn name(&self) -> &'static str {
        match self {
            RecordFormat::Json => "json",
            RecordFormat::Yaml => "yaml",
        }
    }

    /// File extensions without the leading dot.
    pub fn file_extensions(&self) -> &'static [&'static str] {
        match self {
            RecordFormat::Json => &["json"],
            RecordFormat::Yaml => &["yaml", "yml"],
        }
    }

    pub fn from_name(name: &str) -> Result<Self, FormatError> {
        RecordFormat::ALL
            .into_iter()
            .find(|format| format.name() == name)
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Detect the format from a file name's extension.
    pub fn detect_from_filename(filename: &str) -> Option<Self> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;
        RecordFormat::ALL
            .into_iter()
            .find(|format| format.file_extensions().contains(&extension))
    }

    pub fn parse(&self, source: &str) -> Result<Record, FormatError> {
        match self {
            RecordFormat::Json => {
                serde_json::from_str(source).map_err(|e| FormatError::ParseError(e.to_string()))
            }
            RecordFormat::Yaml => {
                serde_yaml::from_str(source).map_err(|e| FormatError::ParseError(e.to_string()))
            }
        }
    }

    pub fn serialize(&self, record: &Record) -> Result<String, FormatError> {
        match self {
            RecordFormat::Json => serde_json::to_string_pretty(record)
                .map(|mut text| {
                    text.push('\n');
                    text
                })
                .map_err(|e| FormatError::SerializationError(e.to_string())),
            RecordFormat::Yaml => Ok(serde_yaml::to_string(record)?),
        }
    }
}
