use us_core::User;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub name: String,
}

impl UpdateUserRequest {
    pub fn into_user(self, id: i32) -> User {
        User {
            id,
            email: self.email,
            name: self.name,
        }
    }
}
