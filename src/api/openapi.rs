use utoipa::OpenApi;

use crate::errors::{ErrorCode, ErrorDetail, ErrorResponse};

/// Schema components for the error body, for merging into a service's own `OpenApi` doc.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Edge Function Errors",
        version = "0.1.0",
        description = "Uniform error body returned by every edge function on failure."
    ),
    components(schemas(ErrorResponse, ErrorDetail, ErrorCode))
)]
pub struct ErrorDoc;
