//! Process-wide status policy taken from the environment.
//!
//! Kept in its own test binary with a single test: the policy is resolved
//! once per process, so the variable must be set before any builder exists.

use rb_core::{BuilderConfig, ResponseBuilder, StatusCode, StatusPolicy};

#[test]
fn test_standard_policy_from_env_reaches_every_constructor() {
    std::env::set_var("RESPONSE_STATUS_POLICY", "standard");

    assert_eq!(BuilderConfig::process_default().status_policy, StatusPolicy::Standard);

    assert!(ResponseBuilder::ok().set_status(StatusCode::new(4008)).is_err());
    assert!(ResponseBuilder::custom_response()
        .set_status(StatusCode::NOT_FOUND_USER)
        .is_err());
    assert!(ResponseBuilder::of(StatusCode::new(4008)).is_err());
    assert!(ResponseBuilder::named("not_found")
        .expect("named constructor")
        .set_status(StatusCode::INVALID_EMAIL)
        .is_err());

    let response = ResponseBuilder::ok()
        .set_status(StatusCode::CREATED)
        .expect("standard code")
        .build();
    assert_eq!(response.status(), Some(StatusCode::CREATED));

    let builder = ResponseBuilder::with_policy(StatusPolicy::Extended)
        .set_status(StatusCode::new(4008))
        .expect("explicit policy wins");
    assert_eq!(builder.status(), Some(StatusCode::INVALID_EMAIL));
}
