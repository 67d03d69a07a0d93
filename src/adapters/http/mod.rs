//! HTTP adapter - axum routes and server-rendered views.

pub mod cafes;
pub mod views;

pub use cafes::{cafe_routes, CafeHandlers};

use std::time::Duration;

use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Assembles the full application router.
pub fn app_router(handlers: CafeHandlers, request_timeout: Duration) -> Router {
    cafe_routes(handlers)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
}
