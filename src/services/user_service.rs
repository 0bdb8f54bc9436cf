//! User service - Handles user-related business logic.
//!
//! Input rules are checked here, before the store lock is taken; the
//! store itself only decides existence.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::User;
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a user. The id must be greater than 0 and not yet taken.
    ///
    /// Other fields are stored as given, without validation.
    async fn create_user(&self, user: User) -> AppResult<User>;

    /// Get user by ID
    async fn get_user(&self, id: u32) -> AppResult<User>;

    /// List all users in unspecified order
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Replace the user at `id` with `user`.
    ///
    /// `user.id` may be 0 or equal to `id`; the stored record always
    /// carries `id`. Username, password and name are required.
    async fn update_user(&self, id: u32, user: User) -> AppResult<User>;

    /// Delete user by ID
    async fn delete_user(&self, id: u32) -> AppResult<()>;

    /// Number of registered users
    async fn count_users(&self) -> AppResult<usize>;
}

/// Concrete implementation of UserService backed by a repository.
pub struct UserManager<R: UserRepository> {
    repo: Arc<R>,
}

impl<R: UserRepository> UserManager<R> {
    /// Create new user service instance
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: UserRepository> UserService for UserManager<R> {
    async fn create_user(&self, user: User) -> AppResult<User> {
        if user.id == 0 {
            return Err(AppError::bad_request("id must be greater than 0"));
        }

        self.repo.insert(user).await
    }

    async fn get_user(&self, id: u32) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }

    async fn update_user(&self, id: u32, user: User) -> AppResult<User> {
        if user.id != 0 && user.id != id {
            return Err(AppError::bad_request(
                "id in request body does not match id in path",
            ));
        }

        user.check_required()?;

        self.repo.replace(id, user.with_id(id)).await
    }

    async fn delete_user(&self, id: u32) -> AppResult<()> {
        self.repo.remove(id).await
    }

    async fn count_users(&self) -> AppResult<usize> {
        self.repo.count().await
    }
}
