#![allow(dead_code)]

//! Test infrastructure for us-db repository tests

use us_db::ensure_schema;

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use sqlx::PgPool;

/// Environment variable naming a disposable PostgreSQL database
pub const TEST_DATABASE_URL: &str = "US_TEST_DATABASE_URL";

/// Connect to the test database, or None when it isn't configured
pub async fn create_test_pool() -> Option<PgPool> {
    let url = match std::env::var(TEST_DATABASE_URL) {
        Ok(url) => url,
        Err(_) => {
            eprintln!("{} not set, skipping PostgreSQL test", TEST_DATABASE_URL);
            return None;
        }
    };

    let pool = PgPool::connect(&url)
        .await
        .expect("Failed to connect to test database");

    ensure_schema(&pool)
        .await
        .expect("Failed to create users table");

    Some(pool)
}

/// Email address that no other test run has used
pub fn unique_email(prefix: &str) -> String {
    static COUNTER: AtomicU32 = AtomicU32::new(0);

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos();
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);

    format!("{}-{}-{}@example.com", prefix, nanos, n)
}
