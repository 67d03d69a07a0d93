//! HTTP routes for the cafe directory.

use axum::{
    routing::get,
    Router,
};

use super::handlers::{add_form, add_submit, home, login, search_form, search_submit, CafeHandlers};

/// Creates the cafe router with all endpoints.
pub fn cafe_routes(handlers: CafeHandlers) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/login", get(login))
        .route("/search", get(search_form).post(search_submit))
        .route("/add", get(add_form).post(add_submit))
        .with_state(handlers)
}
