use crate::DatabaseConfig;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, not, ok};

#[test]
fn given_default_database_when_validate_then_ok() {
    assert_that!(DatabaseConfig::default().validate(), ok(anything()));
}

#[test]
fn given_empty_host_when_validate_then_error() {
    let config = DatabaseConfig {
        host: String::new(),
        ..DatabaseConfig::default()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_empty_dbname_when_validate_then_error() {
    let config = DatabaseConfig {
        dbname: "  ".to_string(),
        ..DatabaseConfig::default()
    };

    let err_msg = config.validate().unwrap_err().to_string();
    assert_that!(err_msg, contains_substring("database.dbname"));
}

#[test]
fn given_port_zero_when_validate_then_error() {
    let config = DatabaseConfig {
        port: 0,
        ..DatabaseConfig::default()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_max_connections_out_of_range_when_validate_then_error() {
    let none = DatabaseConfig {
        max_connections: 0,
        ..DatabaseConfig::default()
    };
    let too_many = DatabaseConfig {
        max_connections: 101,
        ..DatabaseConfig::default()
    };

    assert_that!(none.validate(), err(anything()));
    assert_that!(too_many.validate(), err(anything()));
}

#[test]
fn given_password_when_debug_formatted_then_redacted() {
    let config = DatabaseConfig {
        password: "hunter2".to_string(),
        ..DatabaseConfig::default()
    };

    let debug = format!("{:?}", config);

    assert_that!(debug, not(contains_substring("hunter2")));
    assert_that!(debug, contains_substring("<redacted>"));
}
