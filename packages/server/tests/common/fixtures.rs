//! Test fixtures for building downstream service payloads.

use gateway_core::common::{Payment, User};

/// Build a user as the users service would return it
pub fn user(id: i32, email: &str, role: i32) -> User {
    User {
        id,
        email: email.to_string(),
        first_name: "Test".to_string(),
        last_name: format!("User{}", id),
        birthdate: "1990-01-01".to_string(),
        role,
    }
}

/// Build a payment as the payments service would return it
pub fn payment(id: i32, company_id: i32, ad_id: i32, amount: f64) -> Payment {
    Payment {
        id,
        company_id,
        ad_id,
        amount,
        status: "paid".to_string(),
    }
}
