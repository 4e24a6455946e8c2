//! Error types and handling for wirebuf

/// Result type alias for wirebuf operations
pub type Result<T> = std::result::Result<T, WirebufError>;

/// Error types for the wirebuf scratch-buffer library.
///
/// The buffer hot path itself produces no recoverable errors: contract
/// violations there (reads past the write cursor, writes past capacity,
/// popping an empty state stack) are caller bugs and panic. Errors are
/// reserved for the configuration surface.
#[derive(Debug, thiserror::Error)]
pub enum WirebufError {
    /// Invalid parameters or configuration
    #[error("Invalid parameter: {parameter} - {message}")]
    InvalidParameter { parameter: String, message: String },
}

impl WirebufError {
    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            message: message.into(),
        }
    }
}
