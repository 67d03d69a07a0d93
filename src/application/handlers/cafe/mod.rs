//! Cafe operations: listing, name search, and submission.

mod add_cafe;
mod list_cafes;
mod search_cafes;

#[cfg(test)]
pub(crate) mod test_support;

pub use add_cafe::{AddCafeCommand, AddCafeError, AddCafeHandler};
pub use list_cafes::ListCafesHandler;
pub use search_cafes::{SearchCafesHandler, SearchCafesQuery};
