//! ListCafesHandler - Query handler for the full cafe listing.

use std::sync::Arc;

use crate::domain::{Cafe, DomainError};
use crate::ports::CafeRepository;

/// Handler for listing every cafe.
pub struct ListCafesHandler {
    repository: Arc<dyn CafeRepository>,
}

impl ListCafesHandler {
    pub fn new(repository: Arc<dyn CafeRepository>) -> Self {
        Self { repository }
    }

    /// Returns all records in natural storage order.
    pub async fn handle(&self) -> Result<Vec<Cafe>, DomainError> {
        self.repository.list_all().await
    }
}
