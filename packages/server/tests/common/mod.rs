// Common test utilities

pub mod deps;
pub mod fixtures;
pub mod graphql;

pub use deps::*;
pub use graphql::*;
