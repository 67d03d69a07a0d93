//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CafeRepository` - Persistence contract for cafe records

mod cafe_repository;

pub use cafe_repository::CafeRepository;
