//! Error types for the litview CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use crate::template::RenderError;
use thiserror::Error;

/// Main error type for litview operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum LitError {
    /// User provided invalid arguments or unreadable input.
    #[error("{0}")]
    UserError(String),

    /// The config file could not be read, parsed, or validated.
    #[error("{0}")]
    ConfigError(String),

    /// A template could not be rendered.
    #[error(transparent)]
    RenderError(#[from] RenderError),
}

impl LitError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LitError::UserError(_) => exit_codes::USER_ERROR,
            LitError::ConfigError(_) => exit_codes::USER_ERROR,
            LitError::RenderError(_) => exit_codes::RENDER_FAILURE,
        }
    }
}

/// Result type alias for litview operations.
pub type Result<T> = std::result::Result<T, LitError>;

/// Format an error followed by its chain of causes, separated by `: `.
pub fn describe(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
