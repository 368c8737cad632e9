use juniper::GraphQLObject;
use serde::{Deserialize, Serialize};

// Pass-through payloads. Each of these mirrors what the owning
// microservice sends over the wire (camelCase JSON); the gateway forwards
// them without reshaping, so a field added upstream only needs a field
// added here.

/// Public API representation of a user account (from the users service)
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "A registered user account")]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// ISO-8601 date, forwarded as the users service formats it
    pub birthdate: String,
    /// Raw role code; `1` is an admin account
    pub role: i32,
}

/// Session token issued by the users service on login or registration
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "A session token issued by the users service")]
pub struct UserToken {
    pub token: String,
}

/// OAuth redirect target for the Google login flow
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(name = "GoogleURL", description = "Redirect URL for the Google login flow")]
pub struct GoogleUrl {
    pub url: String,
}

/// Free-form confirmation payload used by operations that return no
/// entity of their own (account verification, ad publishing)
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(name = "Other", description = "Status message from a downstream service")]
pub struct StatusMessage {
    pub message: String,
}

/// A payment record from the payments service
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "A payment record")]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: i32,
    pub company_id: i32,
    pub ad_id: i32,
    pub amount: f64,
    pub status: String,
}

/// Identifier echo from the companies service after create/update
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(name = "CompanyID", description = "Identifier of a created or updated company")]
pub struct CompanyId {
    pub id: i32,
}

/// Registration payload forwarded to the users service
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub birthdate: String,
    /// The users service expects a boolean here: `true` requests an
    /// admin-capable account, subject to its own approval rules
    pub role: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_parses_the_users_service_wire_format() {
        let body = r#"{
            "id": 7,
            "email": "ada@example.com",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "birthdate": "1815-12-10",
            "role": 1
        }"#;

        let user: User = serde_json::from_str(body).unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.first_name, "Ada");
        assert_eq!(user.role, 1);
    }

    #[test]
    fn test_new_user_serializes_camel_case_for_the_users_service() {
        let new_user = NewUser {
            email: "ada@example.com".to_string(),
            password: "secret".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            birthdate: "1815-12-10".to_string(),
            role: false,
        };

        let value = serde_json::to_value(&new_user).unwrap();
        assert_eq!(value["firstName"], "Ada");
        assert_eq!(value["lastName"], "Lovelace");
        assert_eq!(value["role"], false);
    }

    #[test]
    fn test_payment_parses_the_payments_service_wire_format() {
        let body = r#"{"id": 3, "companyId": 11, "adId": 5, "amount": 49.9, "status": "paid"}"#;
        let payment: Payment = serde_json::from_str(body).unwrap();
        assert_eq!(payment.company_id, 11);
        assert_eq!(payment.ad_id, 5);
        assert_eq!(payment.status, "paid");
    }
}
