//! Application context with an explicit lifecycle.
//!
//! Replaces ambient globals: the context owns the connection pool, ensures
//! the schema on initialization, wires the handlers, and closes the pool
//! on shutdown.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use sqlx::SqlitePool;
use thiserror::Error;

use crate::adapters::http::{app_router, CafeHandlers};
use crate::adapters::sqlite::{connect, ensure_schema, SqliteCafeRepository};
use crate::application::handlers::cafe::{AddCafeHandler, ListCafesHandler, SearchCafesHandler};
use crate::config::AppConfig;

/// Errors during context initialization.
#[derive(Debug, Error)]
pub enum ContextError {
    #[error("Failed to open the cafe store: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("Failed to ensure the cafe schema: {0}")]
    Schema(#[source] sqlx::Error),
}

/// Fully initialized application context.
pub struct AppContext {
    config: AppConfig,
    pool: SqlitePool,
}

impl AppContext {
    /// Opens the store and ensures the schema exists.
    pub async fn initialize(config: AppConfig) -> Result<Self, ContextError> {
        let pool = connect(&config.database)
            .await
            .map_err(ContextError::Connect)?;
        ensure_schema(&pool).await.map_err(ContextError::Schema)?;

        tracing::info!(url = %config.database.url, "cafe store ready");

        Ok(Self { config, pool })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Builds the HTTP router over this context's store.
    pub fn router(&self) -> Router {
        let repository = Arc::new(SqliteCafeRepository::new(self.pool.clone()));

        let handlers = CafeHandlers::new(
            Arc::new(ListCafesHandler::new(repository.clone())),
            Arc::new(SearchCafesHandler::new(repository.clone())),
            Arc::new(AddCafeHandler::new(repository)),
        );

        app_router(
            handlers,
            Duration::from_secs(self.config.server.request_timeout_secs),
        )
    }

    /// Closes the connection pool.
    pub async fn shutdown(self) {
        self.pool.close().await;
        tracing::info!("cafe store closed");
    }
}
