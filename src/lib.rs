//! User Registry - In-memory user CRUD over HTTP
//!
//! A small Axum service keeping user records in a mutex-guarded map,
//! keyed by numeric id. Nothing is persisted.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: The user record and its validation rules
//! - **services**: Use cases (create, get, list, update, delete)
//! - **infra**: The in-memory store
//! - **api**: HTTP handlers, extractors, and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server on the default port (8000)
//! cargo run -- serve
//!
//! # Print the OpenAPI document
//! cargo run -- openapi
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::User;
pub use errors::{AppError, AppResult};
pub use infra::UserStore;
