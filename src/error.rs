//! Error types for ParkFed
//!
//! Defines the error enum covering all failure modes across the system.
//! Uses thiserror for ergonomic error handling.

use thiserror::Error;

/// Result type alias for ParkFed operations
pub type Result<T> = std::result::Result<T, ParkFedError>;

/// Error type for ParkFed operations
#[derive(Error, Debug)]
pub enum ParkFedError {
    /// Network, transport, or parse failure reaching a source document
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// A dataset URL was referenced that is not in the catalog
    #[error("Dataset not found in catalog: {0}")]
    NotFound(String),

    /// A facility candidate was missing its required capacity or label fact
    #[error("Malformed facility record for {subject}: missing {missing}")]
    MalformedRecord {
        subject: String,
        missing: &'static str,
    },

    /// A source yielded zero facility candidates
    #[error("No facilities found in source: {0}")]
    EmptySource(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl ParkFedError {
    /// Whether this error is contained at the source boundary during a
    /// snapshot fan-out rather than surfaced to the caller directly.
    pub fn is_source_fault(&self) -> bool {
        matches!(
            self,
            ParkFedError::Fetch(_)
                | ParkFedError::MalformedRecord { .. }
                | ParkFedError::EmptySource(_)
        )
    }
}
