//! PostgreSQL-backed user repository.
//!
//! Mutations check `rows_affected()` and report not-found when no row
//! matched. Create uses `RETURNING id` so the generated id comes back in
//! the same statement as the insert.

use crate::DbError;
use crate::repositories::user_row::UserRow;

use us_core::{NewUser, Result as UserResult, User, UserError, UserRepository};

use async_trait::async_trait;
use log::debug;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, new_user: &NewUser) -> UserResult<i32> {
        let id: i32 =
            sqlx::query_scalar("INSERT INTO users (email, name) VALUES ($1, $2) RETURNING id")
                .bind(&new_user.email)
                .bind(&new_user.name)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| DbError::from_write(e, &new_user.email))?;

        debug!("Created user {}", id);

        Ok(id)
    }

    async fn get(&self, id: i32) -> UserResult<User> {
        let row = sqlx::query_as::<_, UserRow>("SELECT id, email, name FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(DbError::from)?;

        row.map(User::from).ok_or_else(|| UserError::not_found(id))
    }

    async fn update(&self, user: &User) -> UserResult<()> {
        let result = sqlx::query("UPDATE users SET email = $1, name = $2 WHERE id = $3")
            .bind(&user.email)
            .bind(&user.name)
            .bind(user.id)
            .execute(&self.pool)
            .await
            .map_err(|e| DbError::from_write(e, &user.email))?;

        if result.rows_affected() == 0 {
            return Err(UserError::not_found(user.id));
        }

        Ok(())
    }

    async fn update_email(&self, id: i32, email: &str) -> UserResult<()> {
        let result = sqlx::query("UPDATE users SET email = $1 WHERE id = $2")
            .bind(email)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DbError::from_write(e, email))?;

        if result.rows_affected() == 0 {
            return Err(UserError::not_found(id));
        }

        Ok(())
    }

    async fn delete(&self, id: i32) -> UserResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(DbError::from)?;

        if result.rows_affected() == 0 {
            return Err(UserError::not_found(id));
        }

        debug!("Deleted user {}", id);

        Ok(())
    }
}
