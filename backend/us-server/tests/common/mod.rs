#![allow(dead_code)]

//! Test infrastructure for us-server API tests

use us_core::UserController;
use us_db::InMemoryUserRepository;
use us_server::AppState;

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Create AppState backed by an empty in-memory repository
pub fn create_test_app_state() -> AppState {
    let repo = Arc::new(InMemoryUserRepository::new());
    AppState::new(UserController::new(repo))
}

/// Build a request with an optional JSON body
pub fn json_request(method: &str, uri: &str, body: Option<&str>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);

    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Send one request through the router and return status + raw body
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    (status, String::from_utf8(body.to_vec()).unwrap())
}

/// POST a user and return the assigned id
pub async fn create_test_user(app: &Router, email: &str, name: &str) -> i64 {
    let body = format!(r#"{{"email":"{}","name":"{}"}}"#, email, name);
    let (status, body) = send(app, json_request("POST", "/users", Some(&body))).await;
    assert_eq!(status, StatusCode::CREATED);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    json["id"].as_i64().unwrap()
}
