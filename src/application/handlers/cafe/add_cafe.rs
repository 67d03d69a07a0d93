//! AddCafeHandler - Command handler for submitting a new cafe.

use std::sync::Arc;

use crate::domain::{Cafe, DomainError, NewCafe, ValidationError};
use crate::ports::CafeRepository;

/// Command to add a cafe. The draft has already passed field validation.
#[derive(Debug, Clone)]
pub struct AddCafeCommand {
    pub cafe: NewCafe,
}

/// Failure modes of the add operation.
#[derive(Debug, Clone)]
pub enum AddCafeError {
    /// The name collides with an existing record. Recoverable by the form.
    DuplicateName(ValidationError),
    /// The store failed.
    Infrastructure(DomainError),
}

/// Handler for adding cafes.
pub struct AddCafeHandler {
    repository: Arc<dyn CafeRepository>,
}

impl AddCafeHandler {
    pub fn new(repository: Arc<dyn CafeRepository>) -> Self {
        Self { repository }
    }

    /// Persists the draft, rejecting duplicate names cleanly.
    ///
    /// The name is pre-checked so the common collision reads back as a
    /// field error; the store's UNIQUE constraint still backs the
    /// invariant when two submissions race past the check.
    pub async fn handle(&self, cmd: AddCafeCommand) -> Result<Cafe, AddCafeError> {
        let existing = self
            .repository
            .find_by_name(&cmd.cafe.name)
            .await
            .map_err(AddCafeError::Infrastructure)?;
        if existing.is_some() {
            return Err(AddCafeError::DuplicateName(ValidationError::already_taken(
                "name",
            )));
        }

        match self.repository.insert(&cmd.cafe).await {
            Ok(cafe) => Ok(cafe),
            Err(e) if e.is_duplicate_name() => Err(AddCafeError::DuplicateName(
                ValidationError::already_taken("name"),
            )),
            Err(e) => Err(AddCafeError::Infrastructure(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::cafe::test_support::{
        sample_cafe, sample_new_cafe, MockCafeRepository,
    };

    #[tokio::test]
    async fn persists_a_valid_submission() {
        let repo = Arc::new(MockCafeRepository::new());
        let handler = AddCafeHandler::new(repo.clone());

        let created = handler
            .handle(AddCafeCommand {
                cafe: sample_new_cafe("Lazy Bean"),
            })
            .await
            .unwrap();

        assert!(created.id() > 0);
        let stored = repo.stored();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].name(), "Lazy Bean");
    }

    #[tokio::test]
    async fn rejects_a_duplicate_name_without_inserting() {
        let repo = Arc::new(MockCafeRepository::with_cafes(vec![sample_cafe(
            1,
            "Lazy Bean",
        )]));
        let handler = AddCafeHandler::new(repo.clone());

        let result = handler
            .handle(AddCafeCommand {
                cafe: sample_new_cafe("Lazy Bean"),
            })
            .await;

        assert!(matches!(result, Err(AddCafeError::DuplicateName(_))));
        assert_eq!(repo.stored().len(), 1);
    }

    #[tokio::test]
    async fn duplicate_error_names_the_offending_field() {
        let repo = Arc::new(MockCafeRepository::with_cafes(vec![sample_cafe(
            1,
            "Lazy Bean",
        )]));
        let handler = AddCafeHandler::new(repo);

        match handler
            .handle(AddCafeCommand {
                cafe: sample_new_cafe("Lazy Bean"),
            })
            .await
        {
            Err(AddCafeError::DuplicateName(err)) => assert_eq!(err.field(), "name"),
            other => panic!("expected duplicate-name rejection, got {:?}", other.is_ok()),
        }
    }

    #[tokio::test]
    async fn store_failure_is_infrastructure() {
        let handler = AddCafeHandler::new(Arc::new(MockCafeRepository::failing()));
        let result = handler
            .handle(AddCafeCommand {
                cafe: sample_new_cafe("Lazy Bean"),
            })
            .await;
        assert!(matches!(result, Err(AddCafeError::Infrastructure(_))));
    }
}
