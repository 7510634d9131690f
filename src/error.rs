//! Error types for configuration and value validation.

/// Result type alias for suggest input operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when configuring a suggest input or validating its value.
///
/// The controller itself never fails; a restriction violation while editing
/// is a presentation state, not an error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A restricted parameter received a value that is not one of its choices.
    #[error("Illegal choice '{value}' for parameter '{name}'")]
    IllegalChoice {
        /// The rejected value.
        value: String,
        /// Name of the parameter.
        name: String,
    },

    /// The configuration document could not be decoded.
    #[error("Invalid suggest input configuration: {source}")]
    Config {
        /// The decoding error.
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an illegal choice error.
    pub fn illegal_choice(value: impl Into<String>, name: impl Into<String>) -> Self {
        Self::IllegalChoice {
            value: value.into(),
            name: name.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::Config { source }
    }
}
