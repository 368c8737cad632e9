//! GraphQL schema definition.
//!
//! Operation names (`GetUsers`, `BillsByCompanyId`, ...) and their argument
//! spellings are the gateway's published API; clients depend on them as-is,
//! which is why several stray from GraphQL's usual camelCase.

use juniper::{EmptySubscription, RootNode};

use super::context::GraphQLContext;
use super::gate::{gate, Access};
use crate::common::errors::GatewayError;
use crate::common::types::{
    CompanyId, GoogleUrl, NewUser, Payment, StatusMessage, User, UserToken,
};

pub struct Query;

#[juniper::graphql_object(context = GraphQLContext)]
impl Query {
    // =========================================================================
    // User Queries
    // =========================================================================

    /// List every registered user. Requires a valid token.
    #[graphql(name = "GetUsers")]
    async fn get_users(
        ctx: &GraphQLContext,
        user_token: String,
    ) -> Result<Vec<User>, GatewayError> {
        gate(
            ctx.deps().identity.as_ref(),
            Some(&user_token),
            Access::Authenticated,
            "Users not found",
            || async move { ctx.deps().users.all().await },
        )
        .await
    }

    /// Fetch one user by id. Requires a valid token.
    #[graphql(name = "GetUserByUserID")]
    async fn get_user_by_user_id(
        ctx: &GraphQLContext,
        #[graphql(name = "userID")] user_id: i32,
        user_token: String,
    ) -> Result<User, GatewayError> {
        gate(
            ctx.deps().identity.as_ref(),
            Some(&user_token),
            Access::Authenticated,
            "User not found",
            || async move { ctx.deps().users.by_id(user_id).await },
        )
        .await
    }

    /// Exchange email/password credentials for a session token.
    #[graphql(name = "LoginWithEmail")]
    async fn login_with_email(
        ctx: &GraphQLContext,
        email: String,
        password: String,
    ) -> Result<UserToken, GatewayError> {
        gate(
            ctx.deps().identity.as_ref(),
            None,
            Access::Public,
            "User not found",
            || async move { ctx.deps().users.login_with_email(&email, &password).await },
        )
        .await
    }

    /// Get the redirect URL that starts the Google login flow.
    #[graphql(name = "LoginWithGoogle")]
    async fn login_with_google(ctx: &GraphQLContext) -> Result<GoogleUrl, GatewayError> {
        gate(
            ctx.deps().identity.as_ref(),
            None,
            Access::Public,
            "User not found",
            || async move { ctx.deps().users.google_login_url().await },
        )
        .await
    }

    // =========================================================================
    // Payment Queries (admin only)
    // =========================================================================

    /// List the payments of one company.
    #[graphql(name = "BillsByCompanyId")]
    async fn bills_by_company_id(
        ctx: &GraphQLContext,
        user_token: String,
        #[graphql(name = "companyID")] company_id: i32,
    ) -> Result<Vec<Payment>, GatewayError> {
        gate(
            ctx.deps().identity.as_ref(),
            Some(&user_token),
            Access::Admin,
            "Bills not found",
            || async move { ctx.deps().payments.by_company(company_id).await },
        )
        .await
    }

    /// List the payments attached to one ad.
    #[graphql(name = "BillsByAdId")]
    async fn bills_by_ad_id(
        ctx: &GraphQLContext,
        user_token: String,
        #[graphql(name = "adID")] ad_id: i32,
    ) -> Result<Vec<Payment>, GatewayError> {
        gate(
            ctx.deps().identity.as_ref(),
            Some(&user_token),
            Access::Admin,
            "Bills not found",
            || async move { ctx.deps().payments.by_ad(ad_id).await },
        )
        .await
    }

    /// List every payment on the platform.
    #[graphql(name = "AllBills")]
    async fn all_bills(
        ctx: &GraphQLContext,
        user_token: String,
    ) -> Result<Vec<Payment>, GatewayError> {
        gate(
            ctx.deps().identity.as_ref(),
            Some(&user_token),
            Access::Admin,
            "Bills not found",
            || async move { ctx.deps().payments.all().await },
        )
        .await
    }

    /// Fetch one payment by id.
    #[graphql(name = "BillById")]
    async fn bill_by_id(
        ctx: &GraphQLContext,
        user_token: String,
        id_payment: i32,
    ) -> Result<Payment, GatewayError> {
        gate(
            ctx.deps().identity.as_ref(),
            Some(&user_token),
            Access::Admin,
            "Bill not found",
            || async move { ctx.deps().payments.by_id(id_payment).await },
        )
        .await
    }
}

pub struct Mutation;

#[juniper::graphql_object(context = GraphQLContext)]
impl Mutation {
    // =========================================================================
    // User Mutations
    // =========================================================================

    /// Register a new account; echoes the session token the users service
    /// issues.
    #[graphql(name = "RegisterWithEmail")]
    async fn register_with_email(
        ctx: &GraphQLContext,
        email: String,
        password: String,
        first_name: String,
        last_name: String,
        birthdate: String,
        role: bool,
    ) -> Result<UserToken, GatewayError> {
        let new_user = NewUser {
            email,
            password,
            first_name,
            last_name,
            birthdate,
            role,
        };
        gate(
            ctx.deps().identity.as_ref(),
            None,
            Access::Public,
            "User not found",
            || async move { ctx.deps().users.register(&new_user).await },
        )
        .await
    }

    /// Confirm a pending account with its emailed verification token.
    #[graphql(name = "VerifyUserAccount")]
    async fn verify_user_account(
        ctx: &GraphQLContext,
        token: String,
    ) -> Result<StatusMessage, GatewayError> {
        gate(
            ctx.deps().identity.as_ref(),
            None,
            Access::Public,
            "User not found",
            || async move { ctx.deps().users.confirm_account(&token).await },
        )
        .await
    }

    // =========================================================================
    // Company Mutations (admin only)
    // =========================================================================

    /// Create a company; echoes the id the companies service assigns.
    #[graphql(name = "CreateCompany")]
    async fn create_company(
        ctx: &GraphQLContext,
        user_token: String,
        name: String,
        email: String,
    ) -> Result<CompanyId, GatewayError> {
        gate(
            ctx.deps().identity.as_ref(),
            Some(&user_token),
            Access::Admin,
            "Company not created",
            || async move { ctx.deps().companies.create(&name, &email).await },
        )
        .await
    }

    /// Update a company's name and contact email.
    #[graphql(name = "UpdateCompany")]
    async fn update_company(
        ctx: &GraphQLContext,
        user_token: String,
        company_id: i32,
        name: String,
        email: String,
    ) -> Result<CompanyId, GatewayError> {
        gate(
            ctx.deps().identity.as_ref(),
            Some(&user_token),
            Access::Admin,
            "Company not updated",
            || async move { ctx.deps().companies.update(company_id, &name, &email).await },
        )
        .await
    }

    // =========================================================================
    // Ad Mutations (admin only)
    // =========================================================================

    /// Flip an ad to published.
    #[graphql(name = "PublishAd")]
    async fn publish_ad(
        ctx: &GraphQLContext,
        user_token: String,
        #[graphql(name = "adID")] ad_id: i32,
    ) -> Result<StatusMessage, GatewayError> {
        gate(
            ctx.deps().identity.as_ref(),
            Some(&user_token),
            Access::Admin,
            "Ad not published",
            || async move { ctx.deps().ads.publish(ad_id).await },
        )
        .await
    }
}

pub type Schema = RootNode<'static, Query, Mutation, EmptySubscription<GraphQLContext>>;

pub fn create_schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}
