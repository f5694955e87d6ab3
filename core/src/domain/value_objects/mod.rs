//! Value objects embedded in responses.

pub mod paging;

pub use paging::Paging;
