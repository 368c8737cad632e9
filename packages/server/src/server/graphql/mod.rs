// GraphQL schema, authorization gate and context
pub mod context;
pub mod gate;
pub mod schema;

pub use context::*;
pub use gate::{gate, Access};
pub use schema::*;
