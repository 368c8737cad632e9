//! The request-authorization gate.
//!
//! Every operation the gateway exposes runs through [`gate`]: verify the
//! caller's token with the identity service, check the required role, then
//! invoke the downstream delegate. The checks always run in that order and
//! the first failing one ends the request, so a rejected caller never
//! generates downstream traffic.

use std::future::Future;

use identity::Role;
use tracing::debug;

use crate::common::errors::GatewayError;
use crate::kernel::BaseIdentityService;

/// Access level a gated operation demands of its caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// No token required
    Public,
    /// Any valid token
    Authenticated,
    /// A valid token whose verify response carries the admin role
    Admin,
}

impl Access {
    fn requires_auth(self) -> bool {
        !matches!(self, Access::Public)
    }

    fn requires_admin(self) -> bool {
        matches!(self, Access::Admin)
    }
}

/// Run one gated operation.
///
/// The token is forwarded to the identity service exactly as the caller
/// sent it (a missing token goes out empty); validity is entirely the
/// identity service's verdict. The delegate runs only after the caller has
/// cleared every check, and a delegate that resolves to `None` becomes a
/// [`GatewayError::NotFound`] carrying `not_found`.
pub async fn gate<T, F, Fut>(
    identity: &dyn BaseIdentityService,
    token: Option<&str>,
    access: Access,
    not_found: &str,
    delegate: F,
) -> Result<T, GatewayError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Option<T>, GatewayError>>,
{
    if access.requires_auth() {
        let auth = identity.authenticate(token.unwrap_or_default()).await?;
        if !auth.is_valid {
            debug!(status = auth.status_code, "token rejected by identity service");
            return Err(GatewayError::Unauthorized);
        }
        if access.requires_admin() && auth.role != Some(Role::Admin) {
            debug!(role = ?auth.role, "caller lacks the admin role");
            return Err(GatewayError::Forbidden);
        }
    }

    match delegate().await? {
        Some(value) => Ok(value),
        None => Err(GatewayError::NotFound(not_found.to_string())),
    }
}
