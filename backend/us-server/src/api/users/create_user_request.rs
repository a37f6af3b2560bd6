use us_core::NewUser;

use serde::Deserialize;

/// Missing fields decode as empty strings and are rejected by validation
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub name: String,
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        NewUser {
            email: req.email,
            name: req.name,
        }
    }
}
