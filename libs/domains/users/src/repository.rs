use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::{EMAIL_MAX_LENGTH, User};

/// Repository trait for User persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users, ordered by id
    async fn find_all(&self) -> UserResult<Vec<User>>;

    /// Get a user by ID
    async fn find_by_id(&self, id: i64) -> UserResult<Option<User>>;

    /// Insert the user, or fully replace the one with the same id
    async fn save(&self, user: User) -> UserResult<User>;

    /// Delete a user by ID; deleting an absent id is not an error
    async fn delete_by_id(&self, id: i64) -> UserResult<()>;
}

/// In-memory implementation of UserRepository (for development/testing)
///
/// Enforces the same e-mail constraints as the `users` table so that a
/// duplicate or over-long address fails exactly like it would in Postgres.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<BTreeMap<i64, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-populated with `users`
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let users = users.into_iter().map(|u| (u.id, u)).collect();
        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> UserResult<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn save(&self, user: User) -> UserResult<User> {
        if user.email.chars().count() > EMAIL_MAX_LENGTH {
            return Err(UserError::Storage(format!(
                "value too long for email: {} characters (max {})",
                user.email.chars().count(),
                EMAIL_MAX_LENGTH
            )));
        }

        let mut users = self.users.write().await;

        let email_taken = users
            .values()
            .any(|u| u.id != user.id && u.email == user.email);
        if email_taken {
            return Err(UserError::Storage(format!(
                "duplicate key value violates unique constraint on email: {}",
                user.email
            )));
        }

        users.insert(user.id, user.clone());

        tracing::info!(user_id = user.id, "Saved user");
        Ok(user)
    }

    async fn delete_by_id(&self, id: i64) -> UserResult<()> {
        let mut users = self.users.write().await;

        if users.remove(&id).is_some() {
            tracing::info!(user_id = id, "Deleted user");
        }
        Ok(())
    }
}
