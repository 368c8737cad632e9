// AdMarket GraphQL Gateway - Core
//
// A thin GraphQL facade over the platform's microservices. Every exposed
// operation runs through the same authorization gate (verify the caller's
// token with the identity service, check the required role, then delegate)
// and passes the downstream payload through unchanged.

pub mod common;
pub mod config;
pub mod kernel;
pub mod server;

pub use config::*;
