//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `cafe` - The cafe record, its validation rules, and field serialization
//! - `errors` - Domain and field-validation error types

pub mod cafe;
pub mod errors;

pub use cafe::{Cafe, CafeDraft, NewCafe};
pub use errors::{DomainError, ErrorCode, ValidationError};
