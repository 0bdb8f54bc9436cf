//! In-memory user repository.
//!
//! All operations, reads included, are serialized behind one exclusive
//! lock. The lock is held only for the map access itself.

use async_trait::async_trait;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tokio::sync::Mutex;

use crate::domain::User;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Records go in and come out by value; callers never hold a reference
/// into the store.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new record, failing with `Conflict` if its id is taken
    async fn insert(&self, user: User) -> AppResult<User>;

    /// Find a record by id
    async fn find_by_id(&self, id: u32) -> AppResult<Option<User>>;

    /// List every record in unspecified order
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Replace the record stored at `id`, failing with `NotFound` if absent
    async fn replace(&self, id: u32, user: User) -> AppResult<User>;

    /// Remove the record at `id`, failing with `NotFound` if absent
    async fn remove(&self, id: u32) -> AppResult<()>;

    /// Number of stored records
    async fn count(&self) -> AppResult<usize>;
}

/// Mutex-guarded map from user id to user record.
#[derive(Debug, Default)]
pub struct UserStore {
    users: Mutex<HashMap<u32, User>>,
}

impl UserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn insert(&self, user: User) -> AppResult<User> {
        let mut users = self.users.lock().await;

        match users.entry(user.id) {
            Entry::Occupied(_) => {
                tracing::debug!(id = user.id, "Rejected duplicate user id");
                Err(AppError::conflict(format!("User with id {}", user.id)))
            }
            Entry::Vacant(slot) => {
                slot.insert(user.clone());
                tracing::debug!(id = user.id, "User created");
                Ok(user)
            }
        }
    }

    async fn find_by_id(&self, id: u32) -> AppResult<Option<User>> {
        let users = self.users.lock().await;
        Ok(users.get(&id).cloned())
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let users = self.users.lock().await;
        Ok(users.values().cloned().collect())
    }

    async fn replace(&self, id: u32, user: User) -> AppResult<User> {
        // Stored records always carry the key they live under
        let user = user.with_id(id);

        let mut users = self.users.lock().await;

        match users.get_mut(&id) {
            Some(stored) => {
                *stored = user.clone();
                tracing::debug!(id, "User replaced");
                Ok(user)
            }
            None => Err(AppError::NotFound),
        }
    }

    async fn remove(&self, id: u32) -> AppResult<()> {
        let mut users = self.users.lock().await;

        match users.remove(&id) {
            Some(_) => {
                tracing::debug!(id, "User deleted");
                Ok(())
            }
            None => Err(AppError::NotFound),
        }
    }

    async fn count(&self) -> AppResult<usize> {
        let users = self.users.lock().await;
        Ok(users.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn user(id: u32, username: &str) -> User {
        User::new(id, username, "secret", "Test User", "")
    }

    #[tokio::test]
    async fn test_insert_then_find() {
        let store = UserStore::new();
        let created = store.insert(user(1, "alice")).await.unwrap();

        assert_eq!(created, user(1, "alice"));
        assert_eq!(store.find_by_id(1).await.unwrap(), Some(user(1, "alice")));
        assert_eq!(store.find_by_id(2).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_insert_duplicate_keeps_original() {
        let store = UserStore::new();
        store.insert(user(1, "alice")).await.unwrap();

        let err = store.insert(user(1, "mallory")).await.unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(err.to_string(), "User with id 1 already exists");
        assert_eq!(store.find_by_id(1).await.unwrap().unwrap().username, "alice");
    }

    #[tokio::test]
    async fn test_replace_missing_is_not_found() {
        let store = UserStore::new();
        let err = store.replace(5, user(5, "ghost")).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound));
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_replace_overwrites_whole_record() {
        let store = UserStore::new();
        store
            .insert(User::new(1, "alice", "pw", "Alice", "Old Street"))
            .await
            .unwrap();

        store
            .replace(1, User::new(1, "alice2", "pw2", "Alice B", ""))
            .await
            .unwrap();

        let stored = store.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(stored, User::new(1, "alice2", "pw2", "Alice B", ""));
    }

    #[tokio::test]
    async fn test_replace_rekeys_record_to_slot() {
        let store = UserStore::new();
        store.insert(user(1, "alice")).await.unwrap();

        let replaced = store.replace(1, user(42, "alice2")).await.unwrap();

        assert_eq!(replaced.id, 1);
        assert_eq!(store.find_by_id(1).await.unwrap().unwrap().id, 1);
        assert_eq!(store.find_by_id(42).await.unwrap(), None);
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_remove_twice() {
        let store = UserStore::new();
        store.insert(user(3, "carol")).await.unwrap();

        assert!(store.remove(3).await.is_ok());
        assert!(matches!(store.remove(3).await, Err(AppError::NotFound)));
        assert_eq!(store.find_by_id(3).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_returns_all() {
        let store = UserStore::new();
        for id in 1..=3 {
            store.insert(user(id, "u")).await.unwrap();
        }

        let ids: HashSet<u32> = store.list().await.unwrap().iter().map(|u| u.id).collect();
        assert_eq!(ids, HashSet::from([1, 2, 3]));
    }

    #[tokio::test]
    async fn test_returned_records_are_copies() {
        let store = UserStore::new();
        store.insert(user(1, "alice")).await.unwrap();

        let mut fetched = store.find_by_id(1).await.unwrap().unwrap();
        fetched.username = "changed".to_string();

        assert_eq!(store.find_by_id(1).await.unwrap().unwrap().username, "alice");
    }

    #[tokio::test]
    async fn test_stores_are_independent() {
        let first = UserStore::new();
        let second = UserStore::new();
        first.insert(user(1, "alice")).await.unwrap();

        assert_eq!(second.find_by_id(1).await.unwrap(), None);
        assert!(second.insert(user(1, "bob")).await.is_ok());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_inserts_same_id_single_winner() {
        let store = Arc::new(UserStore::new());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.insert(user(9, &format!("u{}", i))).await })
            })
            .collect();

        let mut created = 0;
        let mut conflicts = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => created += 1,
                Err(AppError::Conflict(_)) => conflicts += 1,
                Err(e) => panic!("unexpected error: {}", e),
            }
        }

        assert_eq!(created, 1);
        assert_eq!(conflicts, 15);
        assert_eq!(store.count().await.unwrap(), 1);
    }
}
