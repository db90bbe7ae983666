//! Transport-facing pieces: OpenAPI schema export and, with the `http`
//! feature, axum rendering of error replies.

#[cfg(feature = "http")]
pub mod middleware;
pub mod openapi;
#[cfg(feature = "http")]
pub mod reply;

#[cfg(feature = "http")]
pub use middleware::{catch_panic_layer, error_reply_layer, PanicResponder};
#[cfg(feature = "http")]
pub use reply::ErrorReply;
