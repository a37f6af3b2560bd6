//! Business rules between the HTTP layer and storage.
//!
//! The only rules are non-empty email and name; everything else is
//! forwarded to the repository unchanged.

use crate::{NewUser, Result, User, UserError, UserField, UserRepository};

use std::sync::Arc;

use log::debug;

#[derive(Clone)]
pub struct UserController {
    repo: Arc<dyn UserRepository>,
}

impl UserController {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, new_user: &NewUser) -> Result<i32> {
        validate_user(&new_user.email, &new_user.name)?;
        self.repo.create(new_user).await
    }

    pub async fn get(&self, id: i32) -> Result<User> {
        self.repo.get(id).await
    }

    pub async fn update(&self, user: &User) -> Result<()> {
        validate_user(&user.email, &user.name)?;
        self.repo.update(user).await
    }

    pub async fn update_email(&self, id: i32, email: &str) -> Result<()> {
        if email.is_empty() {
            debug!("Rejected email update for user {}: empty email", id);
            return Err(UserError::empty_field(UserField::Email));
        }

        self.repo.update_email(id, email).await
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        self.repo.delete(id).await
    }
}

#[track_caller]
fn validate_user(email: &str, name: &str) -> Result<()> {
    if email.is_empty() {
        debug!("Rejected user: empty email");
        return Err(UserError::empty_field(UserField::Email));
    }

    if name.is_empty() {
        debug!("Rejected user: empty name");
        return Err(UserError::empty_field(UserField::Name));
    }

    Ok(())
}
