use serde::Deserialize;

/// Role of an account, as reported by the identity service.
///
/// The wire format is an integer code where `1` marks an elevated account
/// allowed to manage companies, payments and ads. Every other code is an
/// ordinary user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Standard,
    Admin,
}

impl Role {
    /// Map the identity service's integer role code.
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => Role::Admin,
            _ => Role::Standard,
        }
    }

    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// Outcome of one token verification call.
///
/// Produced fresh for every call and discarded once the caller has made
/// its access decision; nothing is cached between requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthResult {
    /// Whether the identity service answered 200 for this token.
    pub is_valid: bool,
    /// HTTP status the identity service answered with.
    pub status_code: u16,
    /// Role claim carried in the verify response body, when present.
    pub role: Option<Role>,
}

/// Outcome of one role lookup call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCheck {
    pub is_admin: bool,
    pub status_code: u16,
    pub role: Option<Role>,
}

/// Body of a successful verify response. Only the role claim is read;
/// everything else the service sends is ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct VerifyBody {
    #[serde(default)]
    pub role: Option<i32>,
}

/// Body of a role lookup response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RoleBody {
    pub is_admin: bool,
    #[serde(default)]
    pub role: Option<i32>,
}
