//! Idempotent bootstrap of the `users` table.
//!
//! There are no migrations; the table is created on startup when the
//! target database does not have it yet.

use crate::{DbError, Result as DbErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use log::info;
use sqlx::PgPool;

pub const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id SERIAL PRIMARY KEY,
        email TEXT UNIQUE NOT NULL,
        name TEXT NOT NULL
    )
"#;

pub async fn ensure_schema(pool: &PgPool) -> DbErrorResult<()> {
    sqlx::query(CREATE_USERS_TABLE)
        .execute(pool)
        .await
        .map_err(|e| DbError::Initialization {
            message: format!("failed to create users table: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    info!("Schema ready: users table present");

    Ok(())
}
