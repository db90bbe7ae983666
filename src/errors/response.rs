use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use super::codes::ErrorCode;

/// Structured details attached to an error. Always an object on the wire.
pub type Details = Map<String, Value>;

/// Structured error response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for errors
    pub success: bool,
    /// Error details
    pub error: ErrorDetail,
}

/// Error details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Error code for programmatic handling, e.g. `resource/not-found`
    #[schema(example = "resource/not-found")]
    pub code: String,
    /// Human-readable error message
    #[schema(example = "Prompt missing")]
    pub message: String,
    /// Additional context, empty when none was supplied
    #[schema(value_type = Object)]
    pub details: Details,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(code: impl Into<String>, message: impl Into<String>, details: Details) -> Self {
        Self {
            success: false,
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
                details,
            },
        }
    }

    /// Response for a failure that carried no classification of its own.
    pub fn unclassified(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Api, message, Details::new())
    }

    /// Registry entry for the code, if the code is a registered one.
    pub fn registered_code(&self) -> Option<ErrorCode> {
        ErrorCode::from_code(&self.error.code)
    }
}
