//! Unit tests for named constructors

use crate::response::{named_outcomes, named_status, ResponseBuilder};
use crate::status::{self, StatusCode};

#[test]
fn test_named_constructors_preset_status_only() {
    let builder = ResponseBuilder::not_found();
    assert_eq!(builder.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(builder.message(), None);
    assert!(builder.data().is_none());
}

#[test]
fn test_continue_constructor() {
    let response = ResponseBuilder::r#continue().build();
    assert_eq!(response.status(), Some(StatusCode::CONTINUE));
    assert_eq!(response.message(), Some("Continue"));
}

#[test]
fn test_every_named_outcome_has_a_catalog_message() {
    let mut count = 0;
    for (name, code) in named_outcomes() {
        assert!(!name.starts_with("r#"));
        assert!(status::message_for(code).is_some(), "{} has no message", name);
        let built = ResponseBuilder::named(name).unwrap().build();
        assert_eq!(built.status(), Some(code));
        count += 1;
    }
    assert_eq!(count, 31);
}

#[test]
fn test_named_lookup() {
    assert_eq!(named_status("continue"), Some(StatusCode::CONTINUE));
    assert_eq!(named_status("gateway_timeout"), Some(StatusCode::GATEWAY_TIMEOUT));
    assert_eq!(named_status("success"), Some(StatusCode::SUCCESS));
    assert_eq!(named_status("teapot"), None);
    assert!(ResponseBuilder::named("nope").is_none());
}

#[test]
fn test_of_validates() {
    let builder = ResponseBuilder::of(StatusCode::BAD_REQUEST_OTP_EXPIRED).unwrap();
    assert_eq!(builder.status(), Some(StatusCode::new(400_026)));
    assert!(ResponseBuilder::of(StatusCode::new(600)).is_err());
}
