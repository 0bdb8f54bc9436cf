//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::UserStore;
use crate::services::{UserManager, UserService};

/// Application state shared by all handlers.
///
/// Each instance owns its own store; nothing is process-global.
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
}

impl AppState {
    /// Create application state with a manually injected service.
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }

    /// Create application state backed by a fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        let store = Arc::new(UserStore::new());
        Self::new(Arc::new(UserManager::new(store)))
    }
}
