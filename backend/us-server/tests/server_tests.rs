//! Live listener tests: bind an OS-assigned port, serve, shut down
mod common;

use crate::common::create_test_app_state;

use us_config::ServerConfig;
use us_server::{Server, ShutdownCoordinator};

use std::time::Duration;

use tokio::time::timeout;

fn local_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: "0".to_string(),
    }
}

#[tokio::test]
async fn test_server_serves_requests_until_shutdown() {
    let server = Server::new(&local_config(), create_test_app_state());
    let listener = server.bind().await.unwrap();
    let addr = listener.local_addr().unwrap();
    assert_ne!(addr.port(), 0);

    let shutdown = ShutdownCoordinator::new();
    let handle = tokio::spawn(server.serve(listener, shutdown.clone()));

    let client = reqwest::Client::new();
    let base = format!("http://{}", addr);

    let live = client.get(format!("{}/live", base)).send().await.unwrap();
    assert_eq!(live.status(), reqwest::StatusCode::OK);
    assert_eq!(live.text().await.unwrap(), "OK");

    let created = client
        .post(format!("{}/users", base))
        .header("content-type", "application/json")
        .body(r#"{"email":"live@test.local","name":"Live"}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(created.status(), reqwest::StatusCode::CREATED);

    let fetched = client
        .get(format!("{}/users/1", base))
        .send()
        .await
        .unwrap();
    assert_eq!(fetched.status(), reqwest::StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&fetched.text().await.unwrap()).unwrap();
    assert_eq!(json["email"], "live@test.local");

    // Stop serving and wait for serve() to return
    drop(client);
    shutdown.shutdown();
    let result = timeout(Duration::from_secs(5), handle).await;

    assert!(result.is_ok(), "Server should stop after shutdown");
    assert!(result.unwrap().unwrap().is_ok());
}

#[tokio::test]
async fn test_start_returns_bind_error_for_unparseable_host() {
    let config = ServerConfig {
        host: "not a host".to_string(),
        port: "0".to_string(),
    };
    let server = Server::new(&config, create_test_app_state());

    let result = server.start(ShutdownCoordinator::new()).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_shutdown_before_serve_returns_immediately() {
    let server = Server::new(&local_config(), create_test_app_state());
    let listener = server.bind().await.unwrap();

    let shutdown = ShutdownCoordinator::new();
    shutdown.shutdown();

    let result = timeout(Duration::from_secs(5), server.serve(listener, shutdown)).await;

    assert!(result.is_ok());
}
