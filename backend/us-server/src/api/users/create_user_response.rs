use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CreateUserResponse {
    pub id: i32,
}
