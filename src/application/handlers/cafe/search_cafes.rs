//! SearchCafesHandler - Query handler for the exact-name search.

use std::sync::Arc;

use crate::domain::{Cafe, DomainError};
use crate::ports::CafeRepository;

/// Query for cafes matching a submitted name.
#[derive(Debug, Clone)]
pub struct SearchCafesQuery {
    pub name: String,
}

/// Handler for the name search.
///
/// A miss yields an empty result set.
pub struct SearchCafesHandler {
    repository: Arc<dyn CafeRepository>,
}

impl SearchCafesHandler {
    pub fn new(repository: Arc<dyn CafeRepository>) -> Self {
        Self { repository }
    }

    /// Returns zero or one cafe whose name exactly matches the query.
    ///
    /// Matching uses the store's default collation (case-sensitive for
    /// SQLite's BINARY default).
    pub async fn handle(&self, query: SearchCafesQuery) -> Result<Vec<Cafe>, DomainError> {
        let name = query.name.trim();
        if name.is_empty() {
            return Ok(Vec::new());
        }
        let found = self.repository.find_by_name(name).await?;
        Ok(found.into_iter().collect())
    }
}
