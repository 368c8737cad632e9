//! Mock dependency bundle for integration tests.
//!
//! Builds a [`GatewayDeps`] out of the kernel mocks while keeping the
//! concrete handles, so tests can both drive the schema and assert which
//! calls reached (or never reached) each downstream service.

use std::sync::Arc;

use gateway_core::kernel::test_dependencies::{
    MockAdService, MockCompanyService, MockIdentityService, MockPaymentService, MockUserService,
};
use gateway_core::kernel::GatewayDeps;

pub struct MockServices {
    pub identity: Arc<MockIdentityService>,
    pub users: Arc<MockUserService>,
    pub payments: Arc<MockPaymentService>,
    pub companies: Arc<MockCompanyService>,
    pub ads: Arc<MockAdService>,
}

impl MockServices {
    /// Bundle with the given identity script and empty downstream services.
    pub fn new(identity: MockIdentityService) -> Self {
        Self {
            identity: Arc::new(identity),
            users: Arc::new(MockUserService::new()),
            payments: Arc::new(MockPaymentService::new()),
            companies: Arc::new(MockCompanyService::new()),
            ads: Arc::new(MockAdService::new()),
        }
    }

    pub fn with_users(mut self, users: MockUserService) -> Self {
        self.users = Arc::new(users);
        self
    }

    pub fn with_payments(mut self, payments: MockPaymentService) -> Self {
        self.payments = Arc::new(payments);
        self
    }

    pub fn with_companies(mut self, companies: MockCompanyService) -> Self {
        self.companies = Arc::new(companies);
        self
    }

    pub fn with_ads(mut self, ads: MockAdService) -> Self {
        self.ads = Arc::new(ads);
        self
    }

    /// Dependency container for building a schema context.
    pub fn deps(&self) -> GatewayDeps {
        GatewayDeps::new(
            self.identity.clone(),
            self.users.clone(),
            self.payments.clone(),
            self.companies.clone(),
            self.ads.clone(),
        )
    }
}
