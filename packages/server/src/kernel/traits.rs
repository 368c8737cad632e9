// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - each one fronts a single external
// microservice, and resolvers never talk to a service except through them.
//
// Naming convention: Base* for trait names (e.g., BaseUserService)

use async_trait::async_trait;
use identity::{AdminCheck, AuthError, AuthResult};

use crate::common::errors::GatewayError;
use crate::common::types::{
    CompanyId, GoogleUrl, NewUser, Payment, StatusMessage, User, UserToken,
};

// =============================================================================
// Identity (token verification and role lookup)
// =============================================================================

#[async_trait]
pub trait BaseIdentityService: Send + Sync {
    /// Verify a bearer token. A rejected token is an `Ok` result with
    /// `is_valid == false`; only transport failures are errors.
    async fn authenticate(&self, token: &str) -> Result<AuthResult, AuthError>;

    /// Look up whether an account id holds the admin role.
    async fn check_admin(&self, user_id: i32) -> Result<AdminCheck, AuthError>;
}

// =============================================================================
// Delegate services (users, payments, companies, ads)
//
// Every method is a pass-through: `Ok(None)` means the owning service
// answered but had nothing for the request, which the gate turns into the
// operation's not-found error.
// =============================================================================

#[async_trait]
pub trait BaseUserService: Send + Sync {
    /// List all registered users
    async fn all(&self) -> Result<Option<Vec<User>>, GatewayError>;

    /// Fetch one user by id
    async fn by_id(&self, user_id: i32) -> Result<Option<User>, GatewayError>;

    /// Exchange email/password credentials for a session token
    async fn login_with_email(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<UserToken>, GatewayError>;

    /// Fetch the redirect URL that starts the Google login flow
    async fn google_login_url(&self) -> Result<Option<GoogleUrl>, GatewayError>;

    /// Register a new account; echoes a session token on success
    async fn register(&self, new_user: &NewUser) -> Result<Option<UserToken>, GatewayError>;

    /// Confirm a pending account with its emailed verification token
    async fn confirm_account(&self, token: &str) -> Result<Option<StatusMessage>, GatewayError>;
}

#[async_trait]
pub trait BasePaymentService: Send + Sync {
    async fn all(&self) -> Result<Option<Vec<Payment>>, GatewayError>;
    async fn by_id(&self, payment_id: i32) -> Result<Option<Payment>, GatewayError>;
    async fn by_company(&self, company_id: i32) -> Result<Option<Vec<Payment>>, GatewayError>;
    async fn by_ad(&self, ad_id: i32) -> Result<Option<Vec<Payment>>, GatewayError>;
}

#[async_trait]
pub trait BaseCompanyService: Send + Sync {
    async fn create(&self, name: &str, email: &str) -> Result<Option<CompanyId>, GatewayError>;
    async fn update(
        &self,
        company_id: i32,
        name: &str,
        email: &str,
    ) -> Result<Option<CompanyId>, GatewayError>;
}

#[async_trait]
pub trait BaseAdService: Send + Sync {
    /// Flip an ad to published; echoes the ads service's status payload
    async fn publish(&self, ad_id: i32) -> Result<Option<StatusMessage>, GatewayError>;
}
