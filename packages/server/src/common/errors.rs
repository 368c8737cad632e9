use identity::AuthError;
use juniper::{graphql_value, FieldError, IntoFieldError, ScalarValue};
use thiserror::Error;

/// Everything a gated operation can fail with.
///
/// The first three variants are decisions, not faults: the gate rejected
/// the caller or the owning service had nothing for the request. The
/// `Upstream*` variants mean a downstream service broke the contract, and
/// they name which one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The identity service did not accept the caller's token.
    #[error("Invalid Token, user not authorized")]
    Unauthorized,

    /// The token is valid but the caller lacks the required role.
    #[error("User not authorized")]
    Forbidden,

    /// The owning service answered, but had nothing for this request.
    /// The message is operation-specific ("User not found", "Bills not
    /// found", ...).
    #[error("{0}")]
    NotFound(String),

    /// A downstream service answered outside its contract.
    #[error("{service} service error: {detail}")]
    UpstreamError {
        service: &'static str,
        detail: String,
    },

    /// A downstream service could not be reached.
    #[error("{service} service unavailable: {detail}")]
    UpstreamUnavailable {
        service: &'static str,
        detail: String,
    },

    /// A downstream call exceeded the configured timeout.
    #[error("{service} service timed out")]
    UpstreamTimeout { service: &'static str },
}

impl GatewayError {
    /// Stable machine-readable tag, attached to GraphQL error extensions
    /// so clients can branch without parsing messages.
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::Unauthorized => "UNAUTHORIZED",
            GatewayError::Forbidden => "FORBIDDEN",
            GatewayError::NotFound(_) => "NOT_FOUND",
            GatewayError::UpstreamError { .. } => "UPSTREAM_ERROR",
            GatewayError::UpstreamUnavailable { .. } => "UPSTREAM_UNAVAILABLE",
            GatewayError::UpstreamTimeout { .. } => "UPSTREAM_TIMEOUT",
        }
    }

    /// Classify a transport failure against a named downstream service.
    pub fn from_reqwest(service: &'static str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GatewayError::UpstreamTimeout { service }
        } else if err.is_decode() {
            GatewayError::UpstreamError {
                service,
                detail: err.to_string(),
            }
        } else {
            GatewayError::UpstreamUnavailable {
                service,
                detail: err.to_string(),
            }
        }
    }
}

impl From<AuthError> for GatewayError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Upstream(status) => GatewayError::UpstreamError {
                service: "identity",
                detail: format!("status {status}"),
            },
            AuthError::InvalidResponse(detail) => GatewayError::UpstreamError {
                service: "identity",
                detail,
            },
            AuthError::Timeout => GatewayError::UpstreamTimeout {
                service: "identity",
            },
            AuthError::Unavailable(detail) | AuthError::Initialization(detail) => {
                GatewayError::UpstreamUnavailable {
                    service: "identity",
                    detail,
                }
            }
        }
    }
}

impl<S: ScalarValue> IntoFieldError<S> for GatewayError {
    fn into_field_error(self) -> FieldError<S> {
        let message = self.to_string();
        let extensions = match self {
            GatewayError::Unauthorized => graphql_value!({"kind": "UNAUTHORIZED"}),
            GatewayError::Forbidden => graphql_value!({"kind": "FORBIDDEN"}),
            GatewayError::NotFound(_) => graphql_value!({"kind": "NOT_FOUND"}),
            GatewayError::UpstreamError { .. } => graphql_value!({"kind": "UPSTREAM_ERROR"}),
            GatewayError::UpstreamUnavailable { .. } => {
                graphql_value!({"kind": "UPSTREAM_UNAVAILABLE"})
            }
            GatewayError::UpstreamTimeout { .. } => graphql_value!({"kind": "UPSTREAM_TIMEOUT"}),
        };
        FieldError::new(message, extensions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use juniper::DefaultScalarValue;

    #[test]
    fn test_gate_rejections_use_the_published_messages() {
        assert_eq!(
            GatewayError::Unauthorized.to_string(),
            "Invalid Token, user not authorized"
        );
        assert_eq!(GatewayError::Forbidden.to_string(), "User not authorized");
        assert_eq!(
            GatewayError::NotFound("Bills not found".to_string()).to_string(),
            "Bills not found"
        );
    }

    #[test]
    fn test_upstream_errors_name_the_service() {
        let err = GatewayError::UpstreamTimeout { service: "payments" };
        assert_eq!(err.to_string(), "payments service timed out");

        let err = GatewayError::UpstreamError {
            service: "identity",
            detail: "status 500".to_string(),
        };
        assert_eq!(err.to_string(), "identity service error: status 500");
    }

    #[test]
    fn test_identity_failures_map_onto_gateway_errors() {
        assert_eq!(
            GatewayError::from(AuthError::Upstream(500)),
            GatewayError::UpstreamError {
                service: "identity",
                detail: "status 500".to_string(),
            }
        );
        assert_eq!(
            GatewayError::from(AuthError::Timeout),
            GatewayError::UpstreamTimeout { service: "identity" }
        );
        assert_eq!(
            GatewayError::from(AuthError::Unavailable("connection refused".to_string())),
            GatewayError::UpstreamUnavailable {
                service: "identity",
                detail: "connection refused".to_string(),
            }
        );
    }

    #[test]
    fn test_field_errors_carry_a_machine_readable_kind() {
        let fe: FieldError<DefaultScalarValue> = GatewayError::Unauthorized.into_field_error();
        assert_eq!(fe.message(), "Invalid Token, user not authorized");
        assert_eq!(fe.extensions(), &graphql_value!({"kind": "UNAUTHORIZED"}));

        let fe: FieldError<DefaultScalarValue> =
            GatewayError::UpstreamTimeout { service: "identity" }.into_field_error();
        assert_eq!(fe.extensions(), &graphql_value!({"kind": "UPSTREAM_TIMEOUT"}));
    }

    #[test]
    fn test_kind_tags_are_stable() {
        assert_eq!(GatewayError::Unauthorized.kind(), "UNAUTHORIZED");
        assert_eq!(GatewayError::Forbidden.kind(), "FORBIDDEN");
        assert_eq!(GatewayError::NotFound(String::new()).kind(), "NOT_FOUND");
        assert_eq!(
            GatewayError::UpstreamUnavailable {
                service: "ads",
                detail: String::new(),
            }
            .kind(),
            "UPSTREAM_UNAVAILABLE"
        );
    }
}
