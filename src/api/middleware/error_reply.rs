use axum::response::Response;
use tower::util::MapResponseLayer;

use crate::api::reply::apply_config;
use crate::config::Config;

/// Layer that applies `config` to error replies returned by handlers.
///
/// Handlers returning `Result<_, Failure>` or `Result<_, EdgeFunctionError>`
/// render without access to the config; this layer swaps in the configured
/// fallback status for unclassified failures and attaches the CORS headers.
/// Add it before [`catch_panic_layer`](super::catch_panic_layer) so it sits
/// inside the panic handler.
pub fn error_reply_layer(
    config: Config,
) -> MapResponseLayer<impl Fn(Response) -> Response + Clone + Send + Sync + 'static> {
    MapResponseLayer::new(move |response: Response| apply_config(response, &config))
}
