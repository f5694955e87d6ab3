//! Fluent response builder
//!
//! A builder accumulates status, message, payload, paging and metadata.
//! Every fallible setter validates immediately and returns the builder
//! again, so chains read `builder.set_status(..)?.set_metadata(..)?`.
//! [`ResponseBuilder::build`] consumes the builder; a new response needs a
//! new builder.

use super::config::{BuilderConfig, StatusPolicy};
use super::model::Response;
use crate::domain::Paging;
use crate::errors::{ResponseError, ResponseResult};
use crate::i18n::LocalizedMessages;
use crate::status::{self, StatusCode};
use rb_shared::LanguagePreference;
use serde::Serialize;
use serde_json::{Map, Value};

/// Mutable accumulator producing an immutable [`Response`]
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseBuilder<T = ()> {
    config: BuilderConfig,
    status: Option<StatusCode>,
    message: Option<String>,
    data: Option<T>,
    paging: Option<Paging>,
    metadata: Option<Map<String, Value>>,
}

impl<T> Default for ResponseBuilder<T> {
    fn default() -> Self {
        Self {
            config: BuilderConfig::process_default(),
            status: None,
            message: None,
            data: None,
            paging: None,
            metadata: None,
        }
    }
}

impl ResponseBuilder<()> {
    /// Builder with no preset status or message, for outcomes outside the catalog
    pub fn custom_response() -> Self {
        Self::default()
    }

    /// Empty builder validating statuses against `config`
    pub fn with_config(config: BuilderConfig) -> Self {
        Self::custom_response().set_config(config)
    }

    /// Empty builder validating statuses against `policy`
    pub fn with_policy(policy: StatusPolicy) -> Self {
        Self::with_config(BuilderConfig::new(policy))
    }

    /// Builder bound to an arbitrary status, validated under the process policy
    pub fn of(status: StatusCode) -> ResponseResult<Self> {
        Self::custom_response().set_status(status)
    }

    /// Builder bound to a catalogued status. The preset is not checked against
    /// the policy; later `set_status` calls are.
    pub(crate) fn preset(status: StatusCode) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

impl<T> ResponseBuilder<T> {
    /// Set the status code; `None` leaves the current status untouched
    pub fn set_status(mut self, status: impl Into<Option<StatusCode>>) -> ResponseResult<Self> {
        if let Some(status) = status.into() {
            let policy = self.config.status_policy;
            if !policy.accepts(status) {
                return Err(ResponseError::invalid_argument(
                    "status",
                    format!("status code must be {}, got {}", policy.describe(), status),
                ));
            }
            self.status = Some(status);
        }
        Ok(self)
    }

    /// Set the status from an untyped value: `null` is ignored, anything
    /// other than an integral number is rejected. `200.0` counts as `200`.
    pub fn set_status_value(self, value: &Value) -> ResponseResult<Self> {
        match value {
            Value::Null => Ok(self),
            Value::Number(number) => {
                if let Some(code) = number.as_i64() {
                    return self.set_status(StatusCode::new(code));
                }
                let integral = number
                    .as_f64()
                    .filter(|f| f.is_finite() && f.fract() == 0.0);
                match integral {
                    Some(f) if f >= i64::MIN as f64 && f < i64::MAX as f64 => {
                        self.set_status(StatusCode::new(f as i64))
                    }
                    _ if number.is_u64() || integral.is_some() => {
                        Err(ResponseError::invalid_argument(
                            "status",
                            format!(
                                "status code must be {}, got {}",
                                self.config.status_policy.describe(),
                                number
                            ),
                        ))
                    }
                    _ => Err(ResponseError::invalid_argument(
                        "status",
                        format!("status must be an integer, got {}", number),
                    )),
                }
            }
            other => Err(ResponseError::invalid_argument(
                "status",
                format!("status must be an integer, got {}", json_type(other)),
            )),
        }
    }

    /// Replace the configuration of this builder.
    ///
    /// Only later `set_status` calls are checked against the new policy; a
    /// status already set is kept as is.
    pub fn set_config(mut self, config: BuilderConfig) -> Self {
        self.config = config;
        self
    }

    /// Set an explicit message, overriding the catalog default
    pub fn set_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set the message from an untyped value: `null` is ignored, anything
    /// other than a string is rejected
    pub fn set_message_value(self, value: &Value) -> ResponseResult<Self> {
        match value {
            Value::Null => Ok(self),
            Value::String(message) => Ok(self.set_message(message.as_str())),
            other => Err(ResponseError::invalid_argument(
                "message",
                format!("message must be a string, got {}", json_type(other)),
            )),
        }
    }

    /// Attach the payload verbatim. The builder takes on the payload's type.
    pub fn set_data<U>(self, data: U) -> ResponseBuilder<U> {
        ResponseBuilder {
            config: self.config,
            status: self.status,
            message: self.message,
            data: Some(data),
            paging: self.paging,
            metadata: self.metadata,
        }
    }

    /// Attach paging; `None` leaves the current paging untouched
    pub fn set_paging(mut self, paging: impl Into<Option<Paging>>) -> Self {
        if let Some(paging) = paging.into() {
            self.paging = Some(paging);
        }
        self
    }

    /// Attach paging from an untyped value: `null` is ignored, the value must
    /// otherwise be an object satisfying the paging invariants
    pub fn set_paging_value(self, value: Value) -> ResponseResult<Self> {
        match value {
            Value::Null => Ok(self),
            Value::Object(_) => {
                let paging: Paging = serde_json::from_value(value).map_err(|e| {
                    ResponseError::invalid_argument("paging", format!("invalid paging: {}", e))
                })?;
                Ok(self.set_paging(paging))
            }
            other => Err(ResponseError::invalid_argument(
                "paging",
                format!("expected a paging object, got {}", json_type(&other)),
            )),
        }
    }

    /// Attach metadata, replacing any previous metadata.
    ///
    /// The value must serialize to a JSON object; `null`, arrays and scalars
    /// are rejected.
    pub fn set_metadata<M: Serialize>(mut self, metadata: M) -> ResponseResult<Self> {
        let value = serde_json::to_value(metadata).map_err(|e| {
            ResponseError::invalid_argument("metadata", format!("metadata is not serializable: {}", e))
        })?;
        match value {
            Value::Object(map) => {
                self.metadata = Some(map);
                Ok(self)
            }
            other => Err(ResponseError::invalid_argument(
                "metadata",
                format!("metadata must be a non-null object, got {}", json_type(&other)),
            )),
        }
    }

    /// Fill the message from a localized table when none was set explicitly.
    ///
    /// Languages are tried in preference order; when no translation exists
    /// the builder is returned unchanged and `build` falls back to the catalog.
    pub fn localize(self, messages: &LocalizedMessages, preference: &LanguagePreference) -> Self {
        if self.message.is_some() {
            return self;
        }
        let translated = self
            .status
            .and_then(|status| messages.get_preferred(preference, status))
            .map(str::to_owned);
        match translated {
            Some(message) => self.set_message(message),
            None => self,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn paging(&self) -> Option<&Paging> {
        self.paging.as_ref()
    }

    pub fn metadata(&self) -> Option<&Map<String, Value>> {
        self.metadata.as_ref()
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Freeze the accumulated fields into a [`Response`].
    ///
    /// Without an explicit message the catalog message for the status is
    /// used; a status with no catalog entry leaves the message unset.
    pub fn build(self) -> Response<T> {
        let (message, source) = match (self.message, self.status) {
            (Some(message), _) => (Some(message), "explicit"),
            (None, Some(code)) => match status::message_for(code) {
                Some(message) => (Some(message.to_owned()), "catalog"),
                None => {
                    tracing::debug!(status = %code, "No canonical message for status");
                    (None, "none")
                }
            },
            (None, None) => (None, "none"),
        };

        tracing::trace!(
            status = ?self.status.map(|code| code.as_i64()),
            message_source = source,
            has_paging = self.paging.is_some(),
            has_metadata = self.metadata.is_some(),
            "Built response"
        );

        Response::new(self.status, message, self.data, self.paging, self.metadata)
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
