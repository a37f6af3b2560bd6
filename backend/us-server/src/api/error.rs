//! REST API error types
//!
//! Every error body is `{"error": "<message>"}`, except the plain-text
//! 400 that create returns for an undecodable body. Any error coming back
//! from the controller (validation, not-found, storage) is reported as a
//! generic 500 and only logged in detail.

use us_core::UserError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

pub const BAD_USER_ID: &str = "bad user id";
pub const BAD_USER_PAYLOAD: &str = "bad user payload";
pub const NO_EMAIL_PROVIDED: &str = "no email provided";
pub const INTERNAL_ERROR: &str = "internal error";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed path or body (400, JSON body)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Malformed body on create (400, plain text body)
    #[error("Bad request (plain): {message} {location}")]
    PlainBadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Anything the controller or storage reported otherwise (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn bad_user_id() -> Self {
        ApiError::BadRequest {
            message: BAD_USER_ID.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn bad_payload() -> Self {
        ApiError::BadRequest {
            message: BAD_USER_PAYLOAD.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn plain_bad_payload() -> Self {
        ApiError::PlainBadRequest {
            message: BAD_USER_PAYLOAD.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn no_email() -> Self {
        ApiError::BadRequest {
            message: NO_EMAIL_PROVIDED.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal() -> Self {
        ApiError::Internal {
            message: INTERNAL_ERROR.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } | ApiError::PlainBadRequest { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Log the error with location for debugging
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        match self {
            ApiError::PlainBadRequest { message, .. } => (status, message).into_response(),
            ApiError::BadRequest { message, .. } | ApiError::Internal { message, .. } => {
                (status, Json(ApiErrorResponse { error: message })).into_response()
            }
        }
    }
}

/// Convert controller errors to API errors
///
/// Clients never see the cause, only `internal error`.
impl From<UserError> for ApiError {
    #[track_caller]
    fn from(e: UserError) -> Self {
        match e {
            UserError::Validation { field, .. } => {
                log::warn!("User rejected by validation: field={}", field);
            }
            other => {
                log::error!("User operation failed: {}", other);
            }
        }

        ApiError::internal()
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
