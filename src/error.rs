use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Type is not supported: {0}")]
    UnsupportedType(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Database error: {0}")]
    Transport(turso::Error),

    #[error("Failed to materialize row {row}: {source}")]
    PartialMaterialization { row: usize, source: Box<Error> },

    #[error("Type conversion error: expected {expected}, got {actual}")]
    TypeConversion { expected: &'static str, actual: String },

    #[error("Unexpected null value for non-nullable field")]
    UnexpectedNull,

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Construction-time errors. They point at a malformed mapped type rather
    /// than a transient store condition.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Configuration(_) | Error::UnsupportedType(_))
    }
}

impl From<turso::Error> for Error {
    fn from(err: turso::Error) -> Self {
        let message = err.to_string();
        if message.to_ascii_lowercase().contains("constraint") {
            Error::ConstraintViolation(message)
        } else {
            Error::Transport(err)
        }
    }
}
