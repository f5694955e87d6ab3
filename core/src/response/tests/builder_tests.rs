//! Unit tests for ResponseBuilder setters and build-time defaulting

use crate::domain::Paging;
use crate::i18n::LocalizedMessages;
use crate::response::{BuilderConfig, ResponseBuilder, StatusPolicy};
use crate::status::StatusCode;
use rb_shared::{Language, LanguagePreference};
use serde::Serialize;
use serde_json::json;

#[test]
fn test_set_status_accepts_both_bands_by_default() {
    for raw in [100, 200, 404, 599, 4000, 4008, 7001, 404_001, 504_001] {
        let builder = ResponseBuilder::custom_response()
            .set_status(StatusCode::new(raw))
            .unwrap();
        assert_eq!(builder.status(), Some(StatusCode::new(raw)));
    }
}

#[test]
fn test_set_status_rejects_out_of_band() {
    for raw in [-1, 0, 99, 600, 999, 3999] {
        let error = ResponseBuilder::custom_response()
            .set_status(StatusCode::new(raw))
            .unwrap_err();
        assert_eq!(error.field(), "status");
    }
}

#[test]
fn test_standard_policy_rejects_custom_codes() {
    let error = ResponseBuilder::with_policy(StatusPolicy::Standard)
        .set_status(StatusCode::INVALID_EMAIL)
        .unwrap_err();
    assert!(error.reason().contains("between 100 and 599"));

    let builder = ResponseBuilder::with_config(BuilderConfig::new(StatusPolicy::Standard))
        .set_status(StatusCode::NOT_FOUND)
        .unwrap();
    assert_eq!(builder.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(builder.config().status_policy, StatusPolicy::Standard);
}

#[test]
fn test_set_status_none_is_a_no_op() {
    let builder = ResponseBuilder::created().set_status(None).unwrap();
    assert_eq!(builder.status(), Some(StatusCode::CREATED));
}

#[test]
fn test_set_status_value_type_checks() {
    let builder = ResponseBuilder::custom_response()
        .set_status_value(&json!(4008))
        .unwrap();
    assert_eq!(builder.status(), Some(StatusCode::INVALID_EMAIL));

    let builder = ResponseBuilder::ok().set_status_value(&json!(null)).unwrap();
    assert_eq!(builder.status(), Some(StatusCode::OK));

    for bad in [json!("200"), json!(200.5), json!(true), json!([200]), json!({"code": 200})] {
        let error = ResponseBuilder::custom_response()
            .set_status_value(&bad)
            .unwrap_err();
        assert_eq!(error.field(), "status");
    }

    assert!(ResponseBuilder::custom_response()
        .set_status_value(&json!(700))
        .is_err());
}

#[test]
fn test_set_status_value_accepts_integral_floats() {
    let builder = ResponseBuilder::custom_response()
        .set_status_value(&json!(200.0))
        .unwrap();
    assert_eq!(builder.status(), Some(StatusCode::OK));

    let builder = ResponseBuilder::custom_response()
        .set_status_value(&json!(404001.0))
        .unwrap();
    assert_eq!(builder.status(), Some(StatusCode::NOT_FOUND_USER));
}

#[test]
fn test_set_status_value_overflow_is_out_of_range() {
    for huge in [json!(u64::MAX), json!(1.0e20), json!(-1.0e20)] {
        let error = ResponseBuilder::custom_response()
            .set_status_value(&huge)
            .unwrap_err();
        assert_eq!(error.field(), "status");
        assert!(error.reason().starts_with("status code must be"), "{}", error.reason());
    }

    let error = ResponseBuilder::custom_response()
        .set_status_value(&json!(200.5))
        .unwrap_err();
    assert!(error.reason().contains("must be an integer"));
}

#[test]
fn test_set_config_applies_to_preset_builder() {
    let builder = ResponseBuilder::ok().set_config(BuilderConfig::new(StatusPolicy::Standard));
    assert_eq!(builder.config().status_policy, StatusPolicy::Standard);
    assert_eq!(builder.status(), Some(StatusCode::OK));

    let error = builder.set_status(StatusCode::INVALID_EMAIL).unwrap_err();
    assert!(error.reason().contains("between 100 and 599"));
}

#[test]
fn test_set_message_value_type_checks() {
    let builder = ResponseBuilder::ok()
        .set_message_value(&json!("All good"))
        .unwrap();
    assert_eq!(builder.message(), Some("All good"));

    let builder = ResponseBuilder::ok().set_message_value(&json!(null)).unwrap();
    assert_eq!(builder.message(), None);

    for bad in [json!(1), json!(false), json!(["x"]), json!({"text": "x"})] {
        let error = ResponseBuilder::ok().set_message_value(&bad).unwrap_err();
        assert_eq!(error.field(), "message");
    }
}

#[test]
fn test_set_data_changes_payload_type() {
    let builder = ResponseBuilder::ok().set_data(vec!["a", "b"]);
    assert_eq!(builder.data(), Some(&vec!["a", "b"]));

    let builder = builder.set_data(42_u8);
    assert_eq!(builder.data(), Some(&42));
    assert_eq!(builder.status(), Some(StatusCode::OK));
}

#[test]
fn test_set_paging_and_none() {
    let paging = Paging::of(1, 10, 100).unwrap();
    let builder = ResponseBuilder::ok().set_paging(paging).set_paging(None);
    assert_eq!(builder.paging(), Some(&paging));
}

#[test]
fn test_set_paging_value() {
    let builder = ResponseBuilder::ok()
        .set_paging_value(json!({"page": 2, "size": 5}))
        .unwrap();
    assert_eq!(builder.paging().and_then(Paging::page), Some(2));
    assert_eq!(builder.paging().and_then(Paging::total), None);

    let builder = ResponseBuilder::ok().set_paging_value(json!(null)).unwrap();
    assert!(builder.paging().is_none());

    for bad in [
        json!({"size": 0}),
        json!({"page": "one"}),
        json!({"pages": 3}),
        json!([1, 10, 100]),
        json!(3),
    ] {
        let error = ResponseBuilder::ok().set_paging_value(bad).unwrap_err();
        assert_eq!(error.field(), "paging");
    }
}

#[test]
fn test_set_metadata_requires_object() {
    let builder = ResponseBuilder::ok().set_metadata(json!({})).unwrap();
    assert_eq!(builder.metadata().map(|m| m.len()), Some(0));

    for bad in [json!(null), json!([1, 2]), json!("meta"), json!(7)] {
        let error = ResponseBuilder::ok().set_metadata(bad).unwrap_err();
        assert_eq!(error.field(), "metadata");
    }

    let none: Option<u8> = None;
    assert!(ResponseBuilder::ok().set_metadata(none).is_err());
    assert!(ResponseBuilder::ok().set_metadata(vec![1, 2]).is_err());
}

#[test]
fn test_set_metadata_accepts_structs_and_replaces() {
    #[derive(Serialize)]
    struct Version {
        version: &'static str,
    }

    let builder = ResponseBuilder::ok()
        .set_metadata(json!({"first": true}))
        .unwrap()
        .set_metadata(Version { version: "1.0.0" })
        .unwrap();
    let metadata = builder.metadata().unwrap();
    assert_eq!(metadata.get("version"), Some(&json!("1.0.0")));
    assert!(metadata.get("first").is_none());
}

#[test]
fn test_build_uses_catalog_default() {
    let response = ResponseBuilder::not_found().build();
    assert_eq!(response.message(), Some("Not Found"));

    let response = ResponseBuilder::custom_response()
        .set_status(StatusCode::NOT_FOUND_SHIPMENT)
        .unwrap()
        .build();
    assert_eq!(response.message(), Some("Shipment not found"));
}

#[test]
fn test_explicit_message_always_wins() {
    let response = ResponseBuilder::ok().set_message("Custom").build();
    assert_eq!(response.message(), Some("Custom"));

    let response = ResponseBuilder::custom_response()
        .set_message("")
        .set_status(StatusCode::BAD_REQUEST)
        .unwrap()
        .build();
    assert_eq!(response.message(), Some(""));
}

#[test]
fn test_default_follows_last_status() {
    let response = ResponseBuilder::ok()
        .set_status(StatusCode::CONFLICT)
        .unwrap()
        .build();
    assert_eq!(response.status(), Some(StatusCode::CONFLICT));
    assert_eq!(response.message(), Some("Conflict"));
}

#[test]
fn test_unregistered_status_leaves_message_unset() {
    let response = ResponseBuilder::custom_response()
        .set_status(StatusCode::new(4999))
        .unwrap()
        .build();
    assert_eq!(response.status(), Some(StatusCode::new(4999)));
    assert_eq!(response.message(), None);
}

#[test]
fn test_build_without_status_or_message() {
    let response = ResponseBuilder::custom_response().set_data("payload").build();
    assert_eq!(response.status(), None);
    assert_eq!(response.message(), None);
    assert_eq!(response.data(), Some(&"payload"));
}

#[test]
fn test_failed_setter_does_not_affect_earlier_builder_value() {
    let builder = ResponseBuilder::ok().set_message("kept");
    let snapshot = builder.clone();
    assert!(builder.set_status(StatusCode::new(42)).is_err());
    assert_eq!(snapshot.message(), Some("kept"));
    assert_eq!(snapshot.status(), Some(StatusCode::OK));
}

#[test]
fn test_localize_sets_translated_message() {
    let messages = LocalizedMessages::new()
        .with(Language::Vietnamese, StatusCode::NOT_FOUND, "Không tìm thấy");
    let preference = LanguagePreference::new(Language::Vietnamese);

    let response = ResponseBuilder::not_found()
        .localize(&messages, &preference)
        .build();
    assert_eq!(response.message(), Some("Không tìm thấy"));
}

#[test]
fn test_localize_keeps_explicit_message_and_falls_back_to_catalog() {
    let messages = LocalizedMessages::new()
        .with(Language::Korean, StatusCode::NOT_FOUND, "찾을 수 없음");
    let preference = LanguagePreference::new(Language::Korean);

    let response = ResponseBuilder::not_found()
        .set_message("explicit")
        .localize(&messages, &preference)
        .build();
    assert_eq!(response.message(), Some("explicit"));

    let response = ResponseBuilder::bad_request()
        .localize(&messages, &preference)
        .build();
    assert_eq!(response.message(), Some("Bad Request"));
}
