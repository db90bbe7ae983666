//! Uniform error responses for edge functions.
//!
//! Request code raises [`EdgeFunctionError`] for failures it understands and
//! lets everything else propagate; [`handle_error`] turns either kind into
//! the same `{ "success": false, "error": { .. } }` body.

pub mod api;
pub mod config;
pub mod errors;

pub use config::{Config, CorsConfig};
pub use errors::{
    handle_dyn_error, handle_error, handle_panic, Details, EdgeFunctionError, ErrorCode,
    ErrorDetail, ErrorResponse, Failure, DEFAULT_STATUS, ERROR_CODES,
};

#[cfg(feature = "http")]
pub use api::{catch_panic_layer, error_reply_layer, ErrorReply, PanicResponder};
