//! Application services layer - Use cases and business logic.
//!
//! Services enforce the input rules of each use case and delegate
//! storage to a repository trait, keeping the HTTP layer thin.

mod user_service;

pub use user_service::{UserManager, UserService};
