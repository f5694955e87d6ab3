//! Status codes and their canonical messages.
//!
//! Two bands coexist without overlap: protocol-standard codes (100-599)
//! and application-defined codes (4000 and above, including the 6-digit
//! `base * 1000 + sequence` scheme). The catalog is a static table,
//! built once and safe to read from any thread.

mod catalog;
mod code;

pub use catalog::{entries, is_registered, lookup, message_for, name_of, CatalogEntry};
pub use code::{StatusClass, StatusCode, CUSTOM_BAND_START};
