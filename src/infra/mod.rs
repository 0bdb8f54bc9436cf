//! Infrastructure layer - Storage backing the registry
//!
//! Holds the in-memory user store and the repository abstraction
//! services depend on.

pub mod repositories;

pub use repositories::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;
