//! Inbound HTTP surface of the self-hosted worker.
//!
//! There is no routing: the acknowledgement handler is installed as the router
//! fallback so it answers every method on every path.

pub mod server;
pub mod shutdown;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::core::request::acknowledge;

pub fn create_router() -> Router {
    Router::new()
        .fallback(acknowledge)
        .layer(TraceLayer::new_for_http())
}
