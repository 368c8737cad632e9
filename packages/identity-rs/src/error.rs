use thiserror::Error;

/// Failure to obtain a verdict from the identity service.
///
/// An invalid token is NOT an error; it comes back as a regular
/// [`AuthResult`](crate::AuthResult). These variants cover the cases where
/// no verdict could be obtained at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The identity service reported a server-side fault.
    #[error("identity service returned an error (status {0})")]
    Upstream(u16),

    /// The call did not complete within the configured timeout.
    #[error("identity service timed out")]
    Timeout,

    /// The identity service could not be reached at all.
    #[error("identity service unreachable: {0}")]
    Unavailable(String),

    /// The identity service answered with a body this client cannot parse.
    #[error("identity service returned a malformed response: {0}")]
    InvalidResponse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("failed to initialize identity client: {0}")]
    Initialization(String),
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AuthError::Timeout
        } else if err.is_decode() {
            AuthError::InvalidResponse(err.to_string())
        } else {
            AuthError::Unavailable(err.to_string())
        }
    }
}
