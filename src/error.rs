//! Error types for the wings CLI and library entry points.
//!
//! Uses thiserror for derive macros. Template failures keep their own
//! [`TemplateError`] type; this wrapper adds the failures that happen
//! around a render call (bad arguments, unreadable config or context).

use crate::exit_codes;
use crate::template::TemplateError;
use thiserror::Error;

/// Main error type for wings operations.
#[derive(Error, Debug)]
pub enum WingsError {
    /// User provided invalid arguments, config or context data.
    #[error("{0}")]
    UserError(String),

    /// The template could not be parsed or rendered.
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),
}

impl WingsError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            WingsError::UserError(_) => exit_codes::USER_ERROR,
            WingsError::Template(err) if err.is_structural() => exit_codes::TEMPLATE_FAILURE,
            WingsError::Template(_) => exit_codes::LINK_FAILURE,
        }
    }
}

/// Result type alias for wings operations.
pub type Result<T> = std::result::Result<T, WingsError>;
