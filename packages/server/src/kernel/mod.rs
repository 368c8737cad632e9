//! Kernel module - gateway infrastructure and dependencies.

pub mod ads_client;
pub mod companies_client;
pub mod deps;
pub(crate) mod http;
pub mod payments_client;
pub mod test_dependencies;
pub mod traits;
pub mod users_client;

pub use ads_client::AdsClient;
pub use companies_client::CompaniesClient;
pub use deps::{GatewayDeps, IdentityAdapter};
pub use payments_client::PaymentsClient;
pub use traits::*;
pub use users_client::UsersClient;
