use serde_json::Value;
use thiserror::Error;

use super::codes::ErrorCode;
use super::response::{Details, ErrorResponse};

/// Status used when an error is raised without an explicit one.
pub const DEFAULT_STATUS: u16 = 400;

/// A classified failure raised by request-handling code.
///
/// The `code` is free-form: registry codes are the norm, but callers may mint
/// ad-hoc ones. `status` travels alongside the error for the transport layer
/// and is never part of the response body.
///
/// ```
/// use edge_errors::{EdgeFunctionError, ErrorCode};
///
/// let err = EdgeFunctionError::new(ErrorCode::NotFound, "Prompt missing")
///     .with_detail("id", 42)
///     .with_status(404);
/// let body = err.to_response();
/// assert_eq!(body.error.code, "resource/not-found");
/// assert_eq!(err.status(), 404);
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct EdgeFunctionError {
    code: String,
    message: String,
    details: Details,
    status: u16,
}

impl EdgeFunctionError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Details::new(),
            status: DEFAULT_STATUS,
        }
    }

    /// Replace the details map wholesale.
    pub fn with_details(mut self, details: Details) -> Self {
        self.details = details;
        self
    }

    /// Add a single detail entry.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn details(&self) -> &Details {
        &self.details
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// Registry entry for this error's code, if it has one.
    pub fn registered_code(&self) -> Option<ErrorCode> {
        ErrorCode::from_code(&self.code)
    }

    /// Build the uniform response body. The status is left out.
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse::new(
            self.code.clone(),
            self.message.clone(),
            self.details.clone(),
        )
    }
}

/// Helpers for the registered codes
impl EdgeFunctionError {
    pub fn auth(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Auth, message)
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message).with_status(404)
    }

    pub fn ai(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Ai, message)
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Database, message)
    }

    pub fn no_prompt(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NoPrompt, message)
    }

    pub fn api(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Api, message)
    }
}

impl From<EdgeFunctionError> for ErrorResponse {
    fn from(err: EdgeFunctionError) -> Self {
        Self::new(err.code, err.message, err.details)
    }
}
