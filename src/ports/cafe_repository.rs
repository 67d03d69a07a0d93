//! Cafe repository port.
//!
//! Defines the persistence contract the application layer depends on.
//! Implementations handle the actual database operations.

use async_trait::async_trait;

use crate::domain::{Cafe, DomainError, NewCafe};

/// Repository port for cafe record persistence.
///
/// The backing store enforces the name-uniqueness invariant; `insert`
/// surfaces a collision as `DuplicateName` rather than a raw store error.
#[async_trait]
pub trait CafeRepository: Send + Sync {
    /// Returns every record in natural storage order. Unbounded.
    async fn list_all(&self) -> Result<Vec<Cafe>, DomainError>;

    /// Returns the first record whose name exactly matches.
    ///
    /// `None` when no record matches; absence is not an error.
    async fn find_by_name(&self, name: &str) -> Result<Option<Cafe>, DomainError>;

    /// Persists a validated draft and returns the record with its
    /// store-assigned id.
    ///
    /// # Errors
    ///
    /// - `DuplicateName` if a record with the same name already exists
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, cafe: &NewCafe) -> Result<Cafe, DomainError>;
}
