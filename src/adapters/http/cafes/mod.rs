//! HTTP endpoints for the cafe directory.

mod forms;
mod handlers;
mod routes;

pub use forms::{NewCafeForm, SearchForm};
pub use handlers::CafeHandlers;
pub use routes::cafe_routes;
