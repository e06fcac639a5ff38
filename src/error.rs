use thiserror::Error;

/// Error type shared by every fallible operation in the crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The operation was given input it cannot process.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Creates an `InvalidInput` error from any message.
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Error::InvalidInput(message.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
