//! Named constructors for well-known outcomes.
//!
//! Each constructor is one row of the table below mapping an outcome name to
//! its status code; the message is resolved from the catalog at build time.

use super::builder::ResponseBuilder;
use crate::status::StatusCode;

macro_rules! named_constructors {
    ($( $name:ident => $code:ident; )+) => {
        impl ResponseBuilder<()> {
            $(
                #[doc = concat!("Builder preset to `StatusCode::", stringify!($code), "`")]
                pub fn $name() -> Self {
                    Self::preset(StatusCode::$code)
                }
            )+
        }

        static NAMED: &[(&str, StatusCode)] = &[
            $( (stringify!($name), StatusCode::$code), )+
        ];
    };
}

named_constructors! {
    r#continue => CONTINUE;
    switching_protocols => SWITCHING_PROTOCOLS;
    processing => PROCESSING;

    ok => OK;
    created => CREATED;
    accepted => ACCEPTED;
    non_authoritative_information => NON_AUTHORITATIVE_INFORMATION;
    no_content => NO_CONTENT;
    reset_content => RESET_CONTENT;
    partial_content => PARTIAL_CONTENT;

    multiple_choices => MULTIPLE_CHOICES;
    moved_permanently => MOVED_PERMANENTLY;
    found => FOUND;
    see_other => SEE_OTHER;
    not_modified => NOT_MODIFIED;
    temporary_redirect => TEMPORARY_REDIRECT;
    permanent_redirect => PERMANENT_REDIRECT;

    bad_request => BAD_REQUEST;
    unauthorized => UNAUTHORIZED;
    payment_required => PAYMENT_REQUIRED;
    forbidden => FORBIDDEN;
    not_found => NOT_FOUND;
    conflict => CONFLICT;
    unprocessable_entity => UNPROCESSABLE_ENTITY;
    too_many_requests => TOO_MANY_REQUESTS;

    internal_server_error => INTERNAL_SERVER_ERROR;
    not_implemented => NOT_IMPLEMENTED;
    bad_gateway => BAD_GATEWAY;
    service_unavailable => SERVICE_UNAVAILABLE;
    gateway_timeout => GATEWAY_TIMEOUT;

    success => SUCCESS;
}

impl ResponseBuilder<()> {
    /// Builder for the outcome called `name` (e.g. `"not_found"`), if any
    pub fn named(name: &str) -> Option<Self> {
        named_status(name).map(Self::preset)
    }
}

/// Status code bound to the named constructor `name`
pub fn named_status(name: &str) -> Option<StatusCode> {
    NAMED
        .iter()
        .find(|(candidate, _)| candidate.trim_start_matches("r#") == name)
        .map(|(_, code)| *code)
}

/// All `(name, status)` pairs with a named constructor
pub fn named_outcomes() -> impl Iterator<Item = (&'static str, StatusCode)> {
    NAMED
        .iter()
        .map(|(name, code)| (name.trim_start_matches("r#"), *code))
}
