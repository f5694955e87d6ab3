//! Error types raised while assembling responses and message tables.

mod types;


pub use types::{LocalizationError, ResponseError};

/// Result type for fallible builder and paging operations
pub type ResponseResult<T> = Result<T, ResponseError>;
