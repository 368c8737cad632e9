//! Client for the AdMarket identity service.
//!
//! The identity service is the system of record for token validity and
//! account roles. This crate wraps its two verification endpoints behind a
//! typed client: one pooled HTTP connection set, an explicit per-request
//! timeout, and errors that separate "the token is invalid" (a normal
//! outcome) from "no verdict could be obtained" (a fault).

mod error;
pub mod models;

pub use error::AuthError;
pub use models::{AdminCheck, AuthResult, Role};

use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::debug;

/// Timeout applied to identity calls unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for [`IdentityClient`].
#[derive(Debug, Clone)]
pub struct IdentityOptions {
    /// Base URL of the identity service, e.g. `http://users.internal:8000`.
    pub base_url: String,
    /// Per-request timeout; expiry surfaces as [`AuthError::Timeout`].
    pub timeout: Duration,
}

impl IdentityOptions {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// HTTP client for the identity service's verification endpoints.
///
/// Construct one at startup and share it; the inner `reqwest::Client`
/// pools connections across requests.
#[derive(Debug, Clone)]
pub struct IdentityClient {
    base_url: String,
    http: Client,
}

impl IdentityClient {
    pub fn new(options: IdentityOptions) -> Result<Self, AuthError> {
        let http = Client::builder()
            .timeout(options.timeout)
            .build()
            .map_err(|e| AuthError::Initialization(e.to_string()))?;

        Ok(Self {
            base_url: options.base_url,
            http,
        })
    }

    /// Verify a bearer token via `GET /Users/verify/{token}`.
    ///
    /// HTTP 200 means the token is valid; any other status means it is not.
    /// The token travels as-is, so an empty or malformed token simply comes
    /// back invalid. Only transport failures produce an `Err`.
    pub async fn authenticate(&self, token: &str) -> Result<AuthResult, AuthError> {
        let url = format!("{}/Users/verify/{}", self.base_url, token);

        let response = self.http.get(&url).send().await?;
        let status_code = response.status().as_u16();
        let is_valid = response.status() == StatusCode::OK;

        // A valid verify response may carry a role claim in its JSON body.
        // A body without one, or a non-JSON body, just yields no role.
        let role = if is_valid {
            response
                .text()
                .await
                .ok()
                .and_then(|body| serde_json::from_str::<models::VerifyBody>(&body).ok())
                .and_then(|body| body.role)
                .map(Role::from_code)
        } else {
            None
        };

        debug!(status = status_code, valid = is_valid, "verified token");

        Ok(AuthResult {
            is_valid,
            status_code,
            role,
        })
    }

    /// Look up an account's role via `GET /Users/verify/role/{id}`.
    ///
    /// A 500 from the identity service is an upstream fault and fails with
    /// [`AuthError::Upstream`]; any other answer is parsed for the
    /// `isAdmin` flag and role code.
    pub async fn check_admin(&self, user_id: i32) -> Result<AdminCheck, AuthError> {
        let url = format!("{}/Users/verify/role/{}", self.base_url, user_id);

        let response = self.http.get(&url).send().await?;
        let status_code = response.status().as_u16();
        if status_code == 500 {
            return Err(AuthError::Upstream(500));
        }

        let body: models::RoleBody = response.json().await?;

        debug!(status = status_code, is_admin = body.is_admin, "checked role");

        Ok(AdminCheck {
            is_admin: body.is_admin,
            status_code,
            role: body.role.map(Role::from_code),
        })
    }
}
