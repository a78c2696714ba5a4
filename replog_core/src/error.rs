//! Error types for the replog_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for replog_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A required record field was absent
    #[error("exercise record is missing its `{0}` field")]
    MissingField(&'static str),

    /// A record field was present but failed its format predicate
    #[error("invalid `{field}` field: {constraint}")]
    InvalidField {
        field: &'static str,
        constraint: &'static str,
    },

    /// A token in a stored muscle list was not a valid muscle name
    #[error("invalid muscle `{token}`: muscle names contain only letters and spaces")]
    InvalidMuscle { token: String },

    /// An exercise equal in all fields already exists in the book
    #[error("exercise already exists in the book")]
    DuplicateExercise,

    /// An index into the book was out of range
    #[error("no exercise at index {index} (book holds {len})")]
    InvalidIndex { index: usize, len: usize },
}
