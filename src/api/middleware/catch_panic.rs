use axum::{
    body::Body,
    http::Response,
    response::IntoResponse,
};
use std::any::Any;
use tower_http::catch_panic::{CatchPanicLayer, ResponseForPanic};
use tracing::error;

use crate::api::reply::ErrorReply;
use crate::config::Config;
use crate::errors::Failure;

/// Turns handler panics into the standard error body instead of a dropped connection.
#[derive(Debug, Clone, Default)]
pub struct PanicResponder {
    config: Config,
}

impl PanicResponder {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl ResponseForPanic for PanicResponder {
    type ResponseBody = Body;

    fn response_for_panic(
        &mut self,
        err: Box<dyn Any + Send + 'static>,
    ) -> Response<Self::ResponseBody> {
        let failure = Failure::from_panic(err);
        let reply = ErrorReply::from_failure(&failure, &self.config);

        error!(
            code = %reply.body().error.code,
            message = %reply.body().error.message,
            status = %reply.status(),
            "Request handler panicked"
        );

        reply.into_response()
    }
}

/// Layer that catches panics and answers with an [`ErrorReply`].
pub fn catch_panic_layer(config: Config) -> CatchPanicLayer<PanicResponder> {
    CatchPanicLayer::custom(PanicResponder::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EdgeFunctionError;
    use axum::http::StatusCode;

    #[test]
    fn test_string_panic_uses_fallback_status() {
        let mut responder = PanicResponder::new(Config {
            fallback_status: 500,
            cors: None,
        });
        let response = responder.response_for_panic(Box::new("handler blew up"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_domain_panic_keeps_status() {
        let mut responder = PanicResponder::default();
        let payload = EdgeFunctionError::not_found("Grant section not found");
        let response = responder.response_for_panic(Box::new(payload));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_response_body() {
        let mut responder = PanicResponder::default();
        let response = responder.response_for_panic(Box::new(String::from("oops")));
        let bytes = tokio_test::block_on(axum::body::to_bytes(response.into_body(), usize::MAX))
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "success": false,
                "error": { "code": "api/error", "message": "oops", "details": {} }
            })
        );
    }
}
