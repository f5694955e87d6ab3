//! Tests for response construction

mod builder_tests;
mod named_tests;
