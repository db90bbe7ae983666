pub mod catch_panic;
pub mod error_reply;

pub use catch_panic::{catch_panic_layer, PanicResponder};
pub use error_reply::error_reply_layer;
