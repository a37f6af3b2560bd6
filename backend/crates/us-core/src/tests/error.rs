use crate::{UserError, UserErrorKind, UserField};

use std::error::Error as StdError;
use std::io;

use googletest::prelude::*;

#[test]
fn test_empty_field_names_field_in_message() {
    let error = UserError::empty_field(UserField::Name);

    assert_that!(error.kind(), eq(UserErrorKind::Validation));
    match error {
        UserError::Validation { field, message, .. } => {
            assert_that!(field, eq(UserField::Name));
            assert_that!(message, eq("bad name"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_not_found_kind() {
    let error = UserError::not_found(42);

    assert_that!(error.kind(), eq(UserErrorKind::NotFound));
    assert!(error.is_not_found());
    assert_that!(error.to_string(), contains_substring("User 42 not found"));
}

#[test]
fn test_storage_keeps_cause_as_source() {
    let cause = io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused");

    let error = UserError::storage(cause);

    assert_that!(error.kind(), eq(UserErrorKind::Storage));
    let source = error.source().expect("storage error should carry a source");
    assert_that!(source.to_string(), eq("connection refused"));
}
