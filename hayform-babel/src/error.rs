//! Error types for entry and format operations

use thiserror::Error;

/// Errors that can occur while reading entries or emitting documents
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// Input format not known (e.g. an unrecognised file extension)
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Entry type name not in the closed set of kinds
    #[error("Unknown entry type '{0}'")]
    UnknownType(String),
    /// Contributor role name not in the closed set of roles
    #[error("Unknown role '{0}'")]
    UnknownRole(String),
    /// Error while reading a record
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_yaml::Error> for FormatError {
    fn from(err: serde_yaml::Error) -> Self {
        FormatError::SerializationError(err.to_string())
    }
}
