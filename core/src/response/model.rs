//! Finalized response value

use crate::domain::Paging;
use crate::status::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Immutable response produced by [`ResponseBuilder::build`](super::ResponseBuilder::build).
///
/// `status`, `message` and `data` are always serialized (as `null` when
/// absent); `paging` and `metadata` are omitted entirely unless set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response<T = ()> {
    status: Option<StatusCode>,

    message: Option<String>,

    data: Option<T>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    paging: Option<Paging>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    metadata: Option<Map<String, Value>>,
}

impl<T> Response<T> {
    pub(crate) fn new(
        status: Option<StatusCode>,
        message: Option<String>,
        data: Option<T>,
        paging: Option<Paging>,
        metadata: Option<Map<String, Value>>,
    ) -> Self {
        Self {
            status,
            message,
            data,
            paging,
            metadata,
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

    /// Extract the data, consuming the response
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Map the data to a different type, keeping the envelope
    pub fn map<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        Response {
            status: self.status,
            message: self.message,
            data: self.data.map(f),
            paging: self.paging,
            metadata: self.metadata,
        }
    }
}

impl<T: Serialize> Response<T> {
    /// Plain structured form of this response
    pub fn to_json_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}
