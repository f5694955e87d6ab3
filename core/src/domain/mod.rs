//! Domain layer containing the value objects responses are assembled from.

pub mod value_objects;

pub use value_objects::*;
