//! User entity as stored and as returned over the API.

use serde::{Deserialize, Serialize};

/// A stored user record. `id` is assigned by the store on create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
}

impl User {
    pub fn new(id: i32, email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            name: name.into(),
        }
    }
}
