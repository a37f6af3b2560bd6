use us_core::User;

use sqlx::FromRow;

/// Row shape of the `users` table
#[derive(Debug, FromRow)]
pub struct UserRow {
    pub id: i32,
    pub email: String,
    pub name: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            email: row.email,
            name: row.name,
        }
    }
}
