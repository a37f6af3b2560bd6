//! Storage port for user records.
//!
//! Backends report `UserError::NotFound` when a lookup finds no row or a
//! mutation affects zero rows, and wrap every driver failure (including a
//! duplicate email) in `UserError::Storage`.

use crate::{NewUser, Result, User};

use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user and return the id the store generated for it
    async fn create(&self, new_user: &NewUser) -> Result<i32>;

    async fn get(&self, id: i32) -> Result<User>;

    /// Replace email and name of the row identified by `user.id`
    async fn update(&self, user: &User) -> Result<()>;

    async fn update_email(&self, id: i32, email: &str) -> Result<()>;

    async fn delete(&self, id: i32) -> Result<()>;
}
