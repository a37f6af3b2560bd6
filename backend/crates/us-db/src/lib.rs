pub mod connection;
pub mod error;
pub mod repositories;
pub mod schema;

#[cfg(test)]
mod tests;

pub use connection::{connect, connect_options};
pub use error::{DbError, Result};
pub use repositories::in_memory_user_repository::InMemoryUserRepository;
pub use repositories::postgres_user_repository::PostgresUserRepository;
pub use schema::ensure_schema;
