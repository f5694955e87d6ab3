//! # Response Builder Core
//!
//! Uniform response envelopes for a service boundary:
//! - [`status`]: the catalog mapping status codes to canonical messages
//! - [`domain`]: the [`Paging`] value object
//! - [`response`]: the fluent [`ResponseBuilder`] and the immutable [`Response`]
//! - [`i18n`]: localized message tables a caller may apply before building
//!
//! ```
//! use rb_core::{Paging, ResponseBuilder, StatusCode};
//! use serde_json::json;
//!
//! let response = ResponseBuilder::ok()
//!     .set_data(vec![1, 2, 3])
//!     .set_paging(Paging::of(1, 10, 100)?)
//!     .build();
//!
//! assert_eq!(response.status(), Some(StatusCode::OK));
//! assert_eq!(
//!     response.to_json_value()?,
//!     json!({
//!         "status": 200,
//!         "message": "OK",
//!         "data": [1, 2, 3],
//!         "paging": {"page": 1, "size": 10, "total": 100}
//!     })
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod domain;
pub mod errors;
pub mod i18n;
pub mod response;
pub mod status;

// Re-export commonly used types for convenience
pub use domain::Paging;
pub use errors::{LocalizationError, ResponseError, ResponseResult};
pub use i18n::LocalizedMessages;
pub use response::{BuilderConfig, Response, ResponseBuilder, StatusPolicy};
pub use status::{StatusClass, StatusCode};
