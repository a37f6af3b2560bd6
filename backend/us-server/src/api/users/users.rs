//! User REST API handlers
//!
//! Path and body rejections are mapped by hand so that every failure
//! carries one of the fixed error messages instead of axum's defaults.

use crate::{
    ApiError, ApiResult, AppState, CreateUserRequest, CreateUserResponse, UpdateEmailRequest,
    UpdateUserRequest,
};

use us_core::{NewUser, User};

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use log::{debug, info};

// =============================================================================
// Handlers
// =============================================================================

/// POST /users
///
/// Create a user and return its generated id
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CreateUserResponse>)> {
    let Json(req) = payload.map_err(|e| {
        debug!("Rejected create body: {}", e);
        ApiError::plain_bad_payload()
    })?;

    let new_user = NewUser::from(req);
    let id = state.controller.create(&new_user).await?;

    info!("Created user {}", id);

    Ok((StatusCode::CREATED, Json(CreateUserResponse { id })))
}

/// GET /users/{id}
///
/// A non-numeric id is reported as a bad payload here, unlike the other routes.
pub async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<User>> {
    let Path(id) = id.map_err(|e| {
        debug!("Rejected user id: {}", e);
        ApiError::bad_payload()
    })?;
    let user = state.controller.get(id).await?;

    Ok(Json(user))
}

/// PUT /users/{id}
///
/// Replace email and name. Responds with the user as submitted.
pub async fn update_user(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> ApiResult<Json<User>> {
    let id = parse_id(id)?;
    let Json(req) = payload.map_err(|e| {
        debug!("Rejected update body for user {}: {}", id, e);
        ApiError::bad_payload()
    })?;

    let user = req.into_user(id);
    state.controller.update(&user).await?;

    info!("Updated user {}", id);

    Ok(Json(user))
}

/// PATCH /users/{id}
///
/// Change only the email, then respond with the stored record.
pub async fn update_user_email(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateEmailRequest>, JsonRejection>,
) -> ApiResult<Json<User>> {
    let id = parse_id(id)?;
    let Json(req) = payload.map_err(|e| {
        debug!("Rejected email update body for user {}: {}", id, e);
        ApiError::bad_payload()
    })?;

    let email = req.email.ok_or_else(ApiError::no_email)?;

    state.controller.update_email(id, &email).await?;
    let user = state.controller.get(id).await?;

    info!("Updated email of user {}", id);

    Ok(Json(user))
}

/// DELETE /users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<StatusCode> {
    let id = parse_id(id)?;
    state.controller.delete(id).await?;

    info!("Deleted user {}", id);

    Ok(StatusCode::OK)
}

// =============================================================================
// Helpers
// =============================================================================

#[track_caller]
fn parse_id(id: Result<Path<i32>, PathRejection>) -> ApiResult<i32> {
    match id {
        Ok(Path(id)) => Ok(id),
        Err(e) => {
            debug!("Rejected user id: {}", e);
            Err(ApiError::bad_user_id())
        }
    }
}
