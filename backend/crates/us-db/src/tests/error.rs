use crate::DbError;

use us_core::{UserError, UserErrorKind};

use std::error::Error as StdError;

#[test]
fn test_db_error_becomes_storage_user_error() {
    let error: UserError = DbError::duplicate_email("a@b.com").into();

    assert_eq!(error.kind(), UserErrorKind::Storage);
    let source = error.source().expect("storage error should keep its cause");
    assert!(source.to_string().contains("Email already in use: a@b.com"));
}

#[test]
fn test_non_database_sqlx_error_is_not_duplicate() {
    let error = DbError::from_write(sqlx::Error::RowNotFound, "a@b.com");

    assert!(matches!(error, DbError::Sqlx { .. }));
}
