//! Error types for the STEM life engine

use thiserror::Error;

/// Main error type for the STEM life engine
#[derive(Error, Debug)]
pub enum StemLifeError {
    #[error("Player not found")]
    PlayerNotFound,

    #[error("No events available for this stage")]
    NoEventsAvailable,

    #[error("No current event")]
    InvalidState,

    #[error("Invalid choice: index {index} out of range for {available} choices")]
    InvalidIndex { index: i64, available: usize },

    #[error("Invalid input: {0}")]
    MalformedInput(String),

    #[error("Player already exists for this account")]
    AlreadyExists,

    #[error("Missing or invalid account identity")]
    Unauthenticated,

    #[error("Event not found: {0}")]
    EventNotFound(i32),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),

    #[error("An error occurred: {0}")]
    Unexpected(String),
}

#[cfg(feature = "python")]
impl From<StemLifeError> for pyo3::PyErr {
    fn from(err: StemLifeError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyKeyError, PyRuntimeError, PyValueError};

        let message = err.to_string();
        match err {
            StemLifeError::PlayerNotFound => PyKeyError::new_err(message),
            StemLifeError::InvalidState
            | StemLifeError::InvalidIndex { .. }
            | StemLifeError::MalformedInput(_)
            | StemLifeError::AlreadyExists
            | StemLifeError::InvalidCatalog(_)
            | StemLifeError::Deserialization(_) => PyValueError::new_err(message),
            StemLifeError::NoEventsAvailable
            | StemLifeError::EventNotFound(_)
            | StemLifeError::Unauthenticated
            | StemLifeError::Unexpected(_) => PyRuntimeError::new_err(message),
        }
    }
}

/// Result type alias for the STEM life engine
pub type Result<T> = std::result::Result<T, StemLifeError>;
