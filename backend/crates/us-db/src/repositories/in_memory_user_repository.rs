//! Process-local user repository.
//!
//! Follows the same contract as the PostgreSQL table: ids start at 1 and
//! are never reused, emails are unique, and mutations on a missing id
//! report not-found.

use crate::DbError;

use us_core::{NewUser, Result as UserResult, User, UserError, UserRepository};

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryUserRepository {
    state: RwLock<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    last_id: i32,
    users: BTreeMap<i32, User>,
}

impl MemoryState {
    fn email_taken(&self, email: &str, except_id: Option<i32>) -> bool {
        self.users
            .values()
            .any(|u| u.email == email && Some(u.id) != except_id)
    }
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start id assignment after `last_id`
    #[cfg(test)]
    pub(crate) fn with_last_id(last_id: i32) -> Self {
        Self {
            state: RwLock::new(MemoryState {
                last_id,
                users: BTreeMap::new(),
            }),
        }
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.state.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new_user: &NewUser) -> UserResult<i32> {
        let mut state = self.state.write().await;

        if state.email_taken(&new_user.email, None) {
            return Err(DbError::duplicate_email(&new_user.email).into());
        }

        let id = state
            .last_id
            .checked_add(1)
            .ok_or_else(DbError::ids_exhausted)?;
        state.last_id = id;
        state.users.insert(id, new_user.clone().with_id(id));

        Ok(id)
    }

    async fn get(&self, id: i32) -> UserResult<User> {
        let state = self.state.read().await;

        state
            .users
            .get(&id)
            .cloned()
            .ok_or_else(|| UserError::not_found(id))
    }

    async fn update(&self, user: &User) -> UserResult<()> {
        let mut state = self.state.write().await;

        if !state.users.contains_key(&user.id) {
            return Err(UserError::not_found(user.id));
        }

        if state.email_taken(&user.email, Some(user.id)) {
            return Err(DbError::duplicate_email(&user.email).into());
        }

        state.users.insert(user.id, user.clone());

        Ok(())
    }

    async fn update_email(&self, id: i32, email: &str) -> UserResult<()> {
        let mut state = self.state.write().await;

        if !state.users.contains_key(&id) {
            return Err(UserError::not_found(id));
        }

        if state.email_taken(email, Some(id)) {
            return Err(DbError::duplicate_email(email).into());
        }

        if let Some(user) = state.users.get_mut(&id) {
            user.email = email.to_string();
        }

        Ok(())
    }

    async fn delete(&self, id: i32) -> UserResult<()> {
        let mut state = self.state.write().await;

        state
            .users
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| UserError::not_found(id))
    }
}
