use crate::User;

use serde::{Deserialize, Serialize};

/// User payload before the store has assigned an id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub name: String,
}

impl NewUser {
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
        }
    }

    /// Attach the id the store generated
    pub fn with_id(self, id: i32) -> User {
        User {
            id,
            email: self.email,
            name: self.name,
        }
    }
}
