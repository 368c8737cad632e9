// Mock implementations for testing
//
// Each mock records the calls it receives, so tests can assert not only
// what a gated operation returned but also that a rejected caller never
// reached the downstream service.

use async_trait::async_trait;
use identity::{AdminCheck, AuthError, AuthResult, Role};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::http::non_empty;
use super::{
    BaseAdService, BaseCompanyService, BaseIdentityService, BasePaymentService, BaseUserService,
};
use crate::common::errors::GatewayError;
use crate::common::types::{CompanyId, GoogleUrl, NewUser, Payment, StatusMessage, User, UserToken};

// =============================================================================
// Mock Identity Service
// =============================================================================

pub struct MockIdentityService {
    tokens: Arc<Mutex<HashMap<String, Option<Role>>>>,
    admin_ids: Arc<Mutex<HashMap<i32, bool>>>,
    failure: Arc<Mutex<Option<AuthError>>>,
    authenticate_calls: Arc<Mutex<Vec<String>>>,
    check_admin_calls: Arc<Mutex<Vec<i32>>>,
}

impl MockIdentityService {
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(Mutex::new(HashMap::new())),
            admin_ids: Arc::new(Mutex::new(HashMap::new())),
            failure: Arc::new(Mutex::new(None)),
            authenticate_calls: Arc::new(Mutex::new(Vec::new())),
            check_admin_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Register a token the identity service accepts, with its role claim
    pub fn with_token(self, token: &str, role: Role) -> Self {
        self.tokens
            .lock()
            .unwrap()
            .insert(token.to_string(), Some(role));
        self
    }

    /// Register a valid token whose verify response carries no role claim
    pub fn with_roleless_token(self, token: &str) -> Self {
        self.tokens.lock().unwrap().insert(token.to_string(), None);
        self
    }

    /// Script a role lookup result for an account id
    pub fn with_admin_id(self, user_id: i32, is_admin: bool) -> Self {
        self.admin_ids.lock().unwrap().insert(user_id, is_admin);
        self
    }

    /// Make every identity call fail with the given error
    pub fn failing_with(self, error: AuthError) -> Self {
        *self.failure.lock().unwrap() = Some(error);
        self
    }

    /// Get all tokens that were verified
    pub fn authenticate_calls(&self) -> Vec<String> {
        self.authenticate_calls.lock().unwrap().clone()
    }

    /// Get all account ids whose role was looked up
    pub fn check_admin_calls(&self) -> Vec<i32> {
        self.check_admin_calls.lock().unwrap().clone()
    }

    /// Check if a token was verified
    pub fn was_authenticated(&self, token: &str) -> bool {
        self.authenticate_calls
            .lock()
            .unwrap()
            .iter()
            .any(|t| t == token)
    }
}

#[async_trait]
impl BaseIdentityService for MockIdentityService {
    async fn authenticate(&self, token: &str) -> Result<AuthResult, AuthError> {
        self.authenticate_calls
            .lock()
            .unwrap()
            .push(token.to_string());

        if let Some(error) = self.failure.lock().unwrap().clone() {
            return Err(error);
        }

        match self.tokens.lock().unwrap().get(token) {
            Some(role) => Ok(AuthResult {
                is_valid: true,
                status_code: 200,
                role: *role,
            }),
            None => Ok(AuthResult {
                is_valid: false,
                status_code: 401,
                role: None,
            }),
        }
    }

    async fn check_admin(&self, user_id: i32) -> Result<AdminCheck, AuthError> {
        self.check_admin_calls.lock().unwrap().push(user_id);

        if let Some(error) = self.failure.lock().unwrap().clone() {
            return Err(error);
        }

        match self.admin_ids.lock().unwrap().get(&user_id) {
            Some(&is_admin) => Ok(AdminCheck {
                is_admin,
                status_code: 200,
                role: Some(if is_admin { Role::Admin } else { Role::Standard }),
            }),
            None => Ok(AdminCheck {
                is_admin: false,
                status_code: 404,
                role: None,
            }),
        }
    }
}

// =============================================================================
// Mock User Service
// =============================================================================

/// Arguments captured from user service calls
#[derive(Debug, Clone, PartialEq)]
pub enum UserCall {
    All,
    ById(i32),
    LoginWithEmail(String),
    GoogleLoginUrl,
    Register(String),
    ConfirmAccount(String),
}

pub struct MockUserService {
    users: Arc<Mutex<Vec<User>>>,
    credentials: Arc<Mutex<HashMap<(String, String), String>>>,
    google_url: Arc<Mutex<Option<String>>>,
    registration_token: Arc<Mutex<Option<String>>>,
    confirmations: Arc<Mutex<HashMap<String, String>>>,
    calls: Arc<Mutex<Vec<UserCall>>>,
}

impl MockUserService {
    pub fn new() -> Self {
        Self {
            users: Arc::new(Mutex::new(Vec::new())),
            credentials: Arc::new(Mutex::new(HashMap::new())),
            google_url: Arc::new(Mutex::new(None)),
            registration_token: Arc::new(Mutex::new(None)),
            confirmations: Arc::new(Mutex::new(HashMap::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_users(self, users: Vec<User>) -> Self {
        self.users.lock().unwrap().extend(users);
        self
    }

    /// Script a credential pair the users service accepts
    pub fn with_credentials(self, email: &str, password: &str, token: &str) -> Self {
        self.credentials
            .lock()
            .unwrap()
            .insert((email.to_string(), password.to_string()), token.to_string());
        self
    }

    pub fn with_google_url(self, url: &str) -> Self {
        *self.google_url.lock().unwrap() = Some(url.to_string());
        self
    }

    /// Token handed back for any successful registration
    pub fn with_registration_token(self, token: &str) -> Self {
        *self.registration_token.lock().unwrap() = Some(token.to_string());
        self
    }

    /// Script an account-confirmation token and its status message
    pub fn with_confirmation(self, token: &str, message: &str) -> Self {
        self.confirmations
            .lock()
            .unwrap()
            .insert(token.to_string(), message.to_string());
        self
    }

    /// Get all calls that reached the users service
    pub fn calls(&self) -> Vec<UserCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseUserService for MockUserService {
    async fn all(&self) -> Result<Option<Vec<User>>, GatewayError> {
        self.calls.lock().unwrap().push(UserCall::All);
        Ok(non_empty(self.users.lock().unwrap().clone()))
    }

    async fn by_id(&self, user_id: i32) -> Result<Option<User>, GatewayError> {
        self.calls.lock().unwrap().push(UserCall::ById(user_id));
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == user_id)
            .cloned())
    }

    async fn login_with_email(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<UserToken>, GatewayError> {
        self.calls
            .lock()
            .unwrap()
            .push(UserCall::LoginWithEmail(email.to_string()));
        Ok(self
            .credentials
            .lock()
            .unwrap()
            .get(&(email.to_string(), password.to_string()))
            .map(|token| UserToken {
                token: token.clone(),
            }))
    }

    async fn google_login_url(&self) -> Result<Option<GoogleUrl>, GatewayError> {
        self.calls.lock().unwrap().push(UserCall::GoogleLoginUrl);
        Ok(self
            .google_url
            .lock()
            .unwrap()
            .clone()
            .map(|url| GoogleUrl { url }))
    }

    async fn register(&self, new_user: &NewUser) -> Result<Option<UserToken>, GatewayError> {
        self.calls
            .lock()
            .unwrap()
            .push(UserCall::Register(new_user.email.clone()));
        Ok(self
            .registration_token
            .lock()
            .unwrap()
            .clone()
            .map(|token| UserToken { token }))
    }

    async fn confirm_account(&self, token: &str) -> Result<Option<StatusMessage>, GatewayError> {
        self.calls
            .lock()
            .unwrap()
            .push(UserCall::ConfirmAccount(token.to_string()));
        Ok(self
            .confirmations
            .lock()
            .unwrap()
            .get(token)
            .map(|message| StatusMessage {
                message: message.clone(),
            }))
    }
}

// =============================================================================
// Mock Payment Service
// =============================================================================

/// Arguments captured from payment service calls
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentCall {
    All,
    ById(i32),
    ByCompany(i32),
    ByAd(i32),
}

pub struct MockPaymentService {
    payments: Arc<Mutex<Vec<Payment>>>,
    calls: Arc<Mutex<Vec<PaymentCall>>>,
}

impl MockPaymentService {
    pub fn new() -> Self {
        Self {
            payments: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_payments(self, payments: Vec<Payment>) -> Self {
        self.payments.lock().unwrap().extend(payments);
        self
    }

    /// Get all calls that reached the payments service
    pub fn calls(&self) -> Vec<PaymentCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BasePaymentService for MockPaymentService {
    async fn all(&self) -> Result<Option<Vec<Payment>>, GatewayError> {
        self.calls.lock().unwrap().push(PaymentCall::All);
        Ok(non_empty(self.payments.lock().unwrap().clone()))
    }

    async fn by_id(&self, payment_id: i32) -> Result<Option<Payment>, GatewayError> {
        self.calls.lock().unwrap().push(PaymentCall::ById(payment_id));
        Ok(self
            .payments
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == payment_id)
            .cloned())
    }

    async fn by_company(&self, company_id: i32) -> Result<Option<Vec<Payment>>, GatewayError> {
        self.calls
            .lock()
            .unwrap()
            .push(PaymentCall::ByCompany(company_id));
        let matching: Vec<Payment> = self
            .payments
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.company_id == company_id)
            .cloned()
            .collect();
        Ok(non_empty(matching))
    }

    async fn by_ad(&self, ad_id: i32) -> Result<Option<Vec<Payment>>, GatewayError> {
        self.calls.lock().unwrap().push(PaymentCall::ByAd(ad_id));
        let matching: Vec<Payment> = self
            .payments
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.ad_id == ad_id)
            .cloned()
            .collect();
        Ok(non_empty(matching))
    }
}

// =============================================================================
// Mock Company Service
// =============================================================================

/// Arguments captured from company service calls
#[derive(Debug, Clone, PartialEq)]
pub enum CompanyCall {
    Create { name: String, email: String },
    Update { company_id: i32, name: String, email: String },
}

pub struct MockCompanyService {
    created_id: Arc<Mutex<Option<i32>>>,
    known_companies: Arc<Mutex<Vec<i32>>>,
    calls: Arc<Mutex<Vec<CompanyCall>>>,
}

impl MockCompanyService {
    pub fn new() -> Self {
        Self {
            created_id: Arc::new(Mutex::new(None)),
            known_companies: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Id the companies service assigns to the next created company
    pub fn with_created_id(self, id: i32) -> Self {
        *self.created_id.lock().unwrap() = Some(id);
        self
    }

    /// Register an existing company id that updates will hit
    pub fn with_company(self, id: i32) -> Self {
        self.known_companies.lock().unwrap().push(id);
        self
    }

    /// Get all calls that reached the companies service
    pub fn calls(&self) -> Vec<CompanyCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseCompanyService for MockCompanyService {
    async fn create(&self, name: &str, email: &str) -> Result<Option<CompanyId>, GatewayError> {
        self.calls.lock().unwrap().push(CompanyCall::Create {
            name: name.to_string(),
            email: email.to_string(),
        });
        Ok(self.created_id.lock().unwrap().map(|id| CompanyId { id }))
    }

    async fn update(
        &self,
        company_id: i32,
        name: &str,
        email: &str,
    ) -> Result<Option<CompanyId>, GatewayError> {
        self.calls.lock().unwrap().push(CompanyCall::Update {
            company_id,
            name: name.to_string(),
            email: email.to_string(),
        });
        let known = self.known_companies.lock().unwrap().contains(&company_id);
        Ok(known.then_some(CompanyId { id: company_id }))
    }
}

// =============================================================================
// Mock Ad Service
// =============================================================================

pub struct MockAdService {
    known_ads: Arc<Mutex<Vec<i32>>>,
    publish_calls: Arc<Mutex<Vec<i32>>>,
}

impl MockAdService {
    pub fn new() -> Self {
        Self {
            known_ads: Arc::new(Mutex::new(Vec::new())),
            publish_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Register an ad id the ads service can publish
    pub fn with_ad(self, ad_id: i32) -> Self {
        self.known_ads.lock().unwrap().push(ad_id);
        self
    }

    /// Get all ad ids a publish reached the ads service for
    pub fn publish_calls(&self) -> Vec<i32> {
        self.publish_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseAdService for MockAdService {
    async fn publish(&self, ad_id: i32) -> Result<Option<StatusMessage>, GatewayError> {
        self.publish_calls.lock().unwrap().push(ad_id);
        let known = self.known_ads.lock().unwrap().contains(&ad_id);
        Ok(known.then_some(StatusMessage {
            message: "Ad published".to_string(),
        }))
    }
}
