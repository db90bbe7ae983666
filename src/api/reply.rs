use axum::{
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, warn};

use crate::config::{Config, CorsConfig};
use crate::errors::{EdgeFunctionError, ErrorResponse, Failure};

/// An error body together with the status line and headers it is sent with.
#[derive(Debug, Clone)]
pub struct ErrorReply {
    body: ErrorResponse,
    status: u16,
    headers: HeaderMap,
}

impl ErrorReply {
    pub fn new(body: ErrorResponse, status: u16) -> Self {
        Self {
            body,
            status,
            headers: HeaderMap::new(),
        }
    }

    /// Translate a failure, taking the fallback status and CORS headers from `config`.
    pub fn from_failure(failure: &Failure, config: &Config) -> Self {
        let reply = Self::new(
            failure.to_response(),
            failure.status_or(config.fallback_status),
        );
        match &config.cors {
            Some(cors) => reply.with_cors(cors),
            None => reply,
        }
    }

    pub fn with_cors(mut self, cors: &CorsConfig) -> Self {
        self.headers.extend(cors_headers(cors));
        self
    }

    /// Attach an extra header. Names or values that are not valid HTTP are skipped.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        if let Some((name, value)) = parse_header(name, value) {
            self.headers.insert(name, value);
        }
        self
    }

    pub fn body(&self) -> &ErrorResponse {
        &self.body
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

impl IntoResponse for ErrorReply {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::BAD_REQUEST);

        debug!(
            code = %self.body.error.code,
            status = %status.as_u16(),
            "Rendering error response"
        );

        let mut response = (status, Json(self.body)).into_response();
        response.headers_mut().extend(self.headers);
        response
    }
}

/// Where the status of a rendered failure came from. Attached to the response
/// extensions so a config-aware layer can finish rendering it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatusOrigin {
    /// Set by the domain error itself
    Own,
    /// Default fallback, to be replaced by the configured one
    Fallback,
}

impl IntoResponse for Failure {
    fn into_response(self) -> Response {
        let origin = if self.is_classified() {
            StatusOrigin::Own
        } else {
            StatusOrigin::Fallback
        };
        let mut response = ErrorReply::from_failure(&self, &Config::default()).into_response();
        response.extensions_mut().insert(origin);
        response
    }
}

impl IntoResponse for EdgeFunctionError {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut response = ErrorReply::new(self.into(), status).into_response();
        response.extensions_mut().insert(StatusOrigin::Own);
        response
    }
}

/// Apply `config` to a response rendered from a [`Failure`] or
/// [`EdgeFunctionError`]. Other responses pass through untouched.
pub(crate) fn apply_config(mut response: Response, config: &Config) -> Response {
    let Some(origin) = response.extensions_mut().remove::<StatusOrigin>() else {
        return response;
    };

    if origin == StatusOrigin::Fallback {
        *response.status_mut() =
            StatusCode::from_u16(config.fallback_status).unwrap_or(StatusCode::BAD_REQUEST);
    }
    if let Some(cors) = &config.cors {
        response.headers_mut().extend(cors_headers(cors));
    }

    debug!(
        status = %response.status().as_u16(),
        cors = config.cors.is_some(),
        "Applied error response config"
    );
    response
}

fn cors_headers(cors: &CorsConfig) -> HeaderMap {
    [
        ("access-control-allow-origin", cors.allow_origin.as_str()),
        ("access-control-allow-headers", cors.allow_headers.as_str()),
        ("access-control-allow-methods", cors.allow_methods.as_str()),
    ]
    .into_iter()
    .filter_map(|(name, value)| parse_header(name, value))
    .collect()
}

fn parse_header(name: &str, value: &str) -> Option<(HeaderName, HeaderValue)> {
    let header = match HeaderName::from_bytes(name.as_bytes()) {
        Ok(header) => header,
        Err(e) => {
            warn!(header = %name, error = %e, "Skipping invalid error response header name");
            return None;
        }
    };
    match HeaderValue::from_str(value) {
        Ok(value) => Some((header, value)),
        Err(e) => {
            warn!(header = %header, error = %e, "Skipping invalid error response header value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;

    #[test]
    fn test_into_response_status_from_domain_error() {
        let response = EdgeFunctionError::not_found("Section not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_into_response_status_default() {
        let response = EdgeFunctionError::invalid_input("bad").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_into_response_status_unclassified() {
        let response = Failure::from_error(anyhow::anyhow!("boom")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_into_response_invalid_status_falls_back() {
        let response = EdgeFunctionError::api("teapot").with_status(42).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_from_failure_uses_config() {
        let config = Config {
            fallback_status: 500,
            cors: Some(CorsConfig::permissive()),
        };

        let reply = ErrorReply::from_failure(&Failure::from_error(anyhow::anyhow!("boom")), &config);
        assert_eq!(reply.status(), 500);
        assert_eq!(reply.body().error.code, "api/error");
        assert_eq!(
            reply.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );

        let classified = Failure::from(EdgeFunctionError::auth("denied").with_status(401));
        assert_eq!(ErrorReply::from_failure(&classified, &config).status(), 401);
    }

    #[test]
    fn test_with_header_skips_invalid() {
        let reply = ErrorReply::new(ErrorResponse::unclassified("x"), 400)
            .with_header("bad header", "v")
            .with_header("x-ok", "bad\nvalue")
            .with_header("x-request-id", "abc123");
        assert_eq!(reply.headers().len(), 1);
        assert_eq!(reply.headers().get("x-request-id").unwrap(), "abc123");
    }

    #[test]
    fn test_headers_reach_response() {
        let response = ErrorReply::new(ErrorResponse::unclassified("x"), 403)
            .with_cors(&CorsConfig::permissive())
            .into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            response.headers().get("access-control-allow-methods").unwrap(),
            "POST, OPTIONS"
        );
        assert!(response.headers().contains_key(header::CONTENT_TYPE));
    }

    #[test]
    fn test_apply_config_replaces_fallback_status() {
        let config = Config {
            fallback_status: 503,
            cors: Some(CorsConfig::permissive()),
        };
        let response = Failure::from_error(anyhow::anyhow!("boom")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = apply_config(response, &config);
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
        assert!(response.extensions().get::<StatusOrigin>().is_none());
    }

    #[test]
    fn test_apply_config_keeps_domain_status() {
        let config = Config {
            fallback_status: 503,
            cors: Some(CorsConfig::permissive()),
        };
        let response = apply_config(
            EdgeFunctionError::not_found("Image not found").into_response(),
            &config,
        );
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().contains_key("access-control-allow-headers"));

        let classified = Failure::from(EdgeFunctionError::auth("denied").with_status(401));
        let response = apply_config(classified.into_response(), &config);
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_apply_config_ignores_other_responses() {
        let config = Config {
            fallback_status: 503,
            cors: Some(CorsConfig::permissive()),
        };
        let reply = ErrorReply::new(ErrorResponse::unclassified("x"), 418).into_response();
        let response = apply_config(reply, &config);
        assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
        assert!(!response.headers().contains_key("access-control-allow-origin"));
    }
}
