use crate::ApiError;

use us_core::{UserError, UserField};

use axum::response::IntoResponse;
use googletest::assert_that;
use googletest::prelude::{contains_substring, eq, not};
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_string(error: ApiError) -> (StatusCode, String) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_bad_user_id_returns_400_with_json_body() {
    let (status, body) = body_string(ApiError::bad_user_id()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"], "bad user id");
}

#[tokio::test]
async fn test_plain_bad_payload_returns_400_with_plain_body() {
    let (status, body) = body_string(ApiError::plain_bad_payload()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "bad user payload");
}

#[tokio::test]
async fn test_no_email_returns_400() {
    let (status, body) = body_string(ApiError::no_email()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"], "no email provided");
}

#[tokio::test]
async fn test_internal_returns_500_with_generic_message() {
    let (status, body) = body_string(ApiError::internal()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"], "internal error");
}

#[test]
fn given_validation_error_when_converted_then_internal_error() {
    // Given
    let err = UserError::empty_field(UserField::Name);

    // When
    let api_err = ApiError::from(err);

    // Then
    assert_that!(api_err.status(), eq(StatusCode::INTERNAL_SERVER_ERROR));
    assert_that!(api_err.to_string(), contains_substring("internal error"));
    assert_that!(api_err.to_string(), not(contains_substring("bad name")));
}

#[tokio::test]
async fn test_validation_error_response_hides_field() {
    let error = ApiError::from(UserError::empty_field(UserField::Email));
    let (status, body) = body_string(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"], "internal error");
}

#[test]
fn given_not_found_error_when_converted_then_internal_error_hides_id() {
    // Given
    let err = UserError::not_found(42);

    // When
    let api_err = ApiError::from(err);

    // Then
    assert_that!(api_err.status(), eq(StatusCode::INTERNAL_SERVER_ERROR));
    assert_that!(api_err.to_string(), not(contains_substring("42")));
}

#[test]
fn given_storage_error_when_converted_then_internal_error() {
    // Given
    let err = UserError::storage(std::io::Error::other("connection reset"));

    // When
    let api_err = ApiError::from(err);

    // Then
    assert_that!(api_err.status(), eq(StatusCode::INTERNAL_SERVER_ERROR));
    assert_that!(api_err.to_string(), not(contains_substring("connection reset")));
}
