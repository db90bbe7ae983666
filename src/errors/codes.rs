use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Symbolic name / wire code pairs shared by every edge function.
///
/// `API_ERROR` doubles as the code for failures that were never classified.
pub const ERROR_CODES: [(&str, &str); 7] = [
    ("AUTH_ERROR", "auth/error"),
    ("INVALID_INPUT", "input/invalid"),
    ("NOT_FOUND", "resource/not-found"),
    ("AI_ERROR", "ai/error"),
    ("DB_ERROR", "database/error"),
    ("NO_PROMPT", "prompt/not-found"),
    ("API_ERROR", "api/error"),
];

/// Registered error codes for structured error responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ErrorCode {
    /// Missing or invalid session / access denied
    #[serde(rename = "auth/error")]
    Auth,

    /// Request payload failed validation
    #[serde(rename = "input/invalid")]
    InvalidInput,

    /// Requested resource does not exist
    #[serde(rename = "resource/not-found")]
    NotFound,

    /// Upstream model call failed or returned nothing
    #[serde(rename = "ai/error")]
    Ai,

    /// Database query or write failed
    #[serde(rename = "database/error")]
    Database,

    /// No prompt configured for the requested operation
    #[serde(rename = "prompt/not-found")]
    NoPrompt,

    /// Anything else, including unclassified failures
    #[serde(rename = "api/error")]
    Api,
}

impl ErrorCode {
    /// Every registered code, in registry order.
    pub const ALL: [ErrorCode; 7] = [
        Self::Auth,
        Self::InvalidInput,
        Self::NotFound,
        Self::Ai,
        Self::Database,
        Self::NoPrompt,
        Self::Api,
    ];

    /// Symbolic registry name, e.g. `AUTH_ERROR`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Auth => "AUTH_ERROR",
            Self::InvalidInput => "INVALID_INPUT",
            Self::NotFound => "NOT_FOUND",
            Self::Ai => "AI_ERROR",
            Self::Database => "DB_ERROR",
            Self::NoPrompt => "NO_PROMPT",
            Self::Api => "API_ERROR",
        }
    }

    /// Dotted wire code, e.g. `auth/error`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auth => "auth/error",
            Self::InvalidInput => "input/invalid",
            Self::NotFound => "resource/not-found",
            Self::Ai => "ai/error",
            Self::Database => "database/error",
            Self::NoPrompt => "prompt/not-found",
            Self::Api => "api/error",
        }
    }

    /// Resolve a symbolic name such as `NOT_FOUND`.
    pub fn lookup(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|code| code.name() == name)
    }

    /// Resolve a dotted wire code such as `resource/not-found`.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|known| known.as_str() == code)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ErrorCode> for String {
    fn from(code: ErrorCode) -> Self {
        code.as_str().to_string()
    }
}
