//! Domain error shared by the controller and every repository backend.
//!
//! Each variant is one error kind (validation, not-found, storage). Storage
//! errors keep the driver error as their source instead of flattening it
//! into the message.

use std::error::Error as StdError;
use std::fmt;
use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

/// User field rejected by validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Email,
    Name,
}

impl UserField {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserField::Email => "email",
            UserField::Name => "name",
        }
    }
}

impl fmt::Display for UserField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse classification of a [`UserError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserErrorKind {
    Validation,
    NotFound,
    Storage,
}

#[derive(Error, Debug)]
pub enum UserError {
    #[error("Validation error: {message} {location}")]
    Validation {
        field: UserField,
        message: String,
        location: ErrorLocation,
    },

    #[error("User {id} not found {location}")]
    NotFound { id: i32, location: ErrorLocation },

    #[error("Storage error: {source} {location}")]
    Storage {
        #[source]
        source: Box<dyn StdError + Send + Sync>,
        location: ErrorLocation,
    },
}

impl UserError {
    /// Create a validation error for an empty required field
    #[track_caller]
    pub fn empty_field(field: UserField) -> Self {
        UserError::Validation {
            field,
            message: format!("bad {}", field),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a not-found error for the given user id
    #[track_caller]
    pub fn not_found(id: i32) -> Self {
        UserError::NotFound {
            id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Wrap a backend failure as a storage error
    #[track_caller]
    pub fn storage<E>(source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        UserError::Storage {
            source: Box::new(source),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn kind(&self) -> UserErrorKind {
        match self {
            UserError::Validation { .. } => UserErrorKind::Validation,
            UserError::NotFound { .. } => UserErrorKind::NotFound,
            UserError::Storage { .. } => UserErrorKind::Storage,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == UserErrorKind::NotFound
    }
}

pub type Result<T> = StdResult<T, UserError>;
