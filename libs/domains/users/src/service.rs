use std::sync::Arc;

use crate::error::{UserError, UserResult};
use crate::models::User;
use crate::repository::UserRepository;
use crate::validation::validate_user;

/// Service layer for User operations
///
/// Writes are validated before they reach the repository; a rejected user
/// never causes a `save`.
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// All users, in repository order
    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        self.repository.find_all().await
    }

    pub async fn get_user(&self, id: i64) -> UserResult<User> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    pub async fn create_user(&self, user: User) -> UserResult<User> {
        validate_user(&user)?;
        self.repository.save(user).await
    }

    /// Full replace keyed by `user.id`; inserts when the id is unknown
    pub async fn update_user(&self, user: User) -> UserResult<User> {
        validate_user(&user)?;
        self.repository.save(user).await
    }

    pub async fn delete_user(&self, id: i64) -> UserResult<()> {
        self.repository.delete_by_id(id).await
    }
}
