//! Structured error handling for edge function responses

pub mod codes;
pub mod domain;
pub mod response;
pub mod translate;

pub use codes::{ErrorCode, ERROR_CODES};
pub use domain::{EdgeFunctionError, DEFAULT_STATUS};
pub use response::{Details, ErrorDetail, ErrorResponse};
pub use translate::{
    display_or_unknown, handle_dyn_error, handle_error, handle_panic, Failure, UNKNOWN_ERROR,
};
