use us_core::UserError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Email already in use: {email} {location}")]
    DuplicateEmail {
        email: String,
        location: ErrorLocation,
    },

    #[error("No user ids left to assign {location}")]
    IdsExhausted { location: ErrorLocation },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    #[track_caller]
    pub fn duplicate_email(email: &str) -> Self {
        Self::DuplicateEmail {
            email: email.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn ids_exhausted() -> Self {
        Self::IdsExhausted {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Map a write failure, naming the email when it hit the unique constraint
    #[track_caller]
    pub fn from_write(source: sqlx::Error, email: &str) -> Self {
        let unique_violation = source
            .as_database_error()
            .is_some_and(|db| db.is_unique_violation());

        if unique_violation {
            Self::duplicate_email(email)
        } else {
            Self::from(source)
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Every backend failure is a storage error at the domain level
impl From<DbError> for UserError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        UserError::storage(e)
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
