// Common types and errors shared across the gateway

pub mod errors;
pub mod types;

pub use errors::GatewayError;
pub use types::*;
