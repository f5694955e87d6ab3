//! Response construction: builder, finalized response and named outcomes.

mod builder;
pub mod config;
mod model;
mod named;

#[cfg(test)]
mod tests;

pub use builder::ResponseBuilder;
pub use config::{BuilderConfig, StatusPolicy};
pub use model::Response;
pub use named::{named_outcomes, named_status};
