use thiserror::Error;

/// Result type used across the gasviz crates.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong before or around a run.
///
/// None of these are fatal for the core: a failed start leaves the world untouched
/// and the caller may simply try again with corrected input.
#[derive(Debug, Error)]
pub enum Error {
    /// Parameter text that doesn't parse, or a scalar outside what the derivation accepts.
    #[error("invalid input for {field}: {reason}")]
    InvalidInput {
        field: &'static str,
        reason: String,
    },
    /// Arena, radius or cap settings that can't host a run.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl Error {
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}
