//! Translation of arbitrary failures into [`ErrorResponse`] bodies.
//!
//! Every entry point here is total: whatever the input, the caller gets a
//! well-formed body back and nothing is raised.

use std::any::Any;
use std::error::Error as StdError;
use std::fmt::{self, Write};
use std::panic::{self, AssertUnwindSafe};

use super::domain::{EdgeFunctionError, DEFAULT_STATUS};
use super::response::ErrorResponse;

/// Message used when a failure cannot be turned into text.
pub const UNKNOWN_ERROR: &str = "unknown error";

/// A failure on its way to the caller: either classified by request code or not.
#[derive(Debug)]
pub enum Failure {
    Classified(EdgeFunctionError),
    Unclassified(anyhow::Error),
}

impl Failure {
    /// Classify an error by type. Context layers are seen through, so an
    /// [`EdgeFunctionError`] wrapped with `.context(..)` (or used as the
    /// context itself) is still classified.
    pub fn from_error(error: impl Into<anyhow::Error>) -> Self {
        match error.into().downcast::<EdgeFunctionError>() {
            Ok(err) => Self::Classified(err),
            Err(err) => Self::Unclassified(err),
        }
    }

    /// Classify a panic payload as caught by `catch_unwind`.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        match payload.downcast::<EdgeFunctionError>() {
            Ok(err) => Self::Classified(*err),
            Err(payload) => Self::Unclassified(anyhow::Error::msg(panic_message(payload.as_ref()))),
        }
    }

    pub fn is_classified(&self) -> bool {
        matches!(self, Self::Classified(_))
    }

    /// Status for the transport layer, falling back to [`DEFAULT_STATUS`].
    pub fn status(&self) -> u16 {
        self.status_or(DEFAULT_STATUS)
    }

    /// Status for the transport layer; `fallback` applies to unclassified failures.
    pub fn status_or(&self, fallback: u16) -> u16 {
        match self {
            Self::Classified(err) => err.status(),
            Self::Unclassified(_) => fallback,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        match self {
            Self::Classified(err) => err.to_response(),
            Self::Unclassified(err) => ErrorResponse::unclassified(display_or_unknown(err)),
        }
    }
}

impl From<EdgeFunctionError> for Failure {
    fn from(err: EdgeFunctionError) -> Self {
        Self::Classified(err)
    }
}

impl From<anyhow::Error> for Failure {
    fn from(err: anyhow::Error) -> Self {
        Self::from_error(err)
    }
}

/// Convert any owned error into a response body.
///
/// ```
/// use edge_errors::handle_error;
///
/// let body = handle_error(anyhow::anyhow!("bad input"));
/// assert_eq!(body.error.code, "api/error");
/// assert_eq!(body.error.message, "bad input");
/// ```
pub fn handle_error(error: impl Into<anyhow::Error>) -> ErrorResponse {
    Failure::from_error(error).to_response()
}

/// Convert a borrowed error trait object into a response body.
pub fn handle_dyn_error(error: &(dyn StdError + 'static)) -> ErrorResponse {
    match error.downcast_ref::<EdgeFunctionError>() {
        Some(err) => err.to_response(),
        None => ErrorResponse::unclassified(display_or_unknown(error)),
    }
}

/// Convert a panic payload into a response body.
///
/// Payloads raised with `std::panic::panic_any(EdgeFunctionError)` keep their
/// classification; string payloads become the message.
pub fn handle_panic(payload: &(dyn Any + Send)) -> ErrorResponse {
    match payload.downcast_ref::<EdgeFunctionError>() {
        Some(err) => err.to_response(),
        None => ErrorResponse::unclassified(panic_message(payload)),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        UNKNOWN_ERROR.to_string()
    }
}

/// Render `value` with `Display`, surviving both a formatting error and a
/// panic inside the impl.
///
/// A panicking impl is caught with `catch_unwind`, but the process panic hook
/// still runs first, so the default hook prints the panic message to stderr.
/// Install a quiet hook if that output is unwanted. Under `panic = "abort"`
/// the panic is not caught at all.
pub fn display_or_unknown<T>(value: &T) -> String
where
    T: fmt::Display + ?Sized,
{
    let rendered = panic::catch_unwind(AssertUnwindSafe(|| {
        let mut buf = String::new();
        write!(buf, "{}", value).ok().map(|()| buf)
    }));

    match rendered {
        Ok(Some(text)) => text,
        _ => UNKNOWN_ERROR.to_string(),
    }
}
