//! Gateway dependencies (using traits for testability)
//!
//! This module provides the central dependency container handed to every
//! resolver. All external services sit behind trait objects so tests can
//! swap in mocks.

use async_trait::async_trait;
use identity::{AdminCheck, AuthError, AuthResult, IdentityClient};
use std::sync::Arc;

use crate::kernel::{
    BaseAdService, BaseCompanyService, BaseIdentityService, BasePaymentService, BaseUserService,
};

// =============================================================================
// IdentityClient Adapter (implements BaseIdentityService trait)
// =============================================================================

/// Wrapper around IdentityClient that implements BaseIdentityService
pub struct IdentityAdapter(pub Arc<IdentityClient>);

impl IdentityAdapter {
    pub fn new(client: Arc<IdentityClient>) -> Self {
        Self(client)
    }
}

#[async_trait]
impl BaseIdentityService for IdentityAdapter {
    async fn authenticate(&self, token: &str) -> Result<AuthResult, AuthError> {
        self.0.authenticate(token).await
    }

    async fn check_admin(&self, user_id: i32) -> Result<AdminCheck, AuthError> {
        self.0.check_admin(user_id).await
    }
}

// =============================================================================
// GatewayDeps
// =============================================================================

/// Gateway dependencies accessible to resolvers (using traits for testability)
#[derive(Clone)]
pub struct GatewayDeps {
    /// Token verification and role lookup
    pub identity: Arc<dyn BaseIdentityService>,
    pub users: Arc<dyn BaseUserService>,
    pub payments: Arc<dyn BasePaymentService>,
    pub companies: Arc<dyn BaseCompanyService>,
    pub ads: Arc<dyn BaseAdService>,
}

impl GatewayDeps {
    pub fn new(
        identity: Arc<dyn BaseIdentityService>,
        users: Arc<dyn BaseUserService>,
        payments: Arc<dyn BasePaymentService>,
        companies: Arc<dyn BaseCompanyService>,
        ads: Arc<dyn BaseAdService>,
    ) -> Self {
        Self {
            identity,
            users,
            payments,
            companies,
            ads,
        }
    }
}
