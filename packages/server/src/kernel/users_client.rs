//! HTTP client for the users microservice.
//!
//! Account listing, login and registration all live in the users service;
//! the gateway only forwards. The `reqwest::Client` is the gateway-wide
//! shared pool, handed in at startup.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;

use super::http::{non_empty, read_json};
use super::traits::BaseUserService;
use crate::common::errors::GatewayError;
use crate::common::types::{GoogleUrl, NewUser, StatusMessage, User, UserToken};

const SERVICE: &str = "users";

pub struct UsersClient {
    base_url: String,
    http: Client,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

impl UsersClient {
    pub fn new(base_url: String, http: Client) -> Self {
        Self { base_url, http }
    }

    async fn get(&self, path: &str) -> Result<reqwest::Response, GatewayError> {
        self.http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .map_err(|e| GatewayError::from_reqwest(SERVICE, e))
    }
}

#[async_trait]
impl BaseUserService for UsersClient {
    async fn all(&self) -> Result<Option<Vec<User>>, GatewayError> {
        let response = self.get("/Users").await?;
        Ok(read_json::<Vec<User>>(SERVICE, response)
            .await?
            .and_then(non_empty))
    }

    async fn by_id(&self, user_id: i32) -> Result<Option<User>, GatewayError> {
        let response = self.get(&format!("/Users/{}", user_id)).await?;
        read_json(SERVICE, response).await
    }

    async fn login_with_email(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<UserToken>, GatewayError> {
        let response = self
            .http
            .post(format!("{}/Users/login", self.base_url))
            .json(&LoginRequest { email, password })
            .send()
            .await
            .map_err(|e| GatewayError::from_reqwest(SERVICE, e))?;

        // Bad credentials come back as a 401; to the gateway that is the
        // same no-token outcome as an unknown account.
        if response.status() == StatusCode::UNAUTHORIZED {
            return Ok(None);
        }
        read_json(SERVICE, response).await
    }

    async fn google_login_url(&self) -> Result<Option<GoogleUrl>, GatewayError> {
        let response = self.get("/Users/login/google").await?;
        read_json(SERVICE, response).await
    }

    async fn register(&self, new_user: &NewUser) -> Result<Option<UserToken>, GatewayError> {
        let response = self
            .http
            .post(format!("{}/Users/register", self.base_url))
            .json(new_user)
            .send()
            .await
            .map_err(|e| GatewayError::from_reqwest(SERVICE, e))?;
        read_json(SERVICE, response).await
    }

    async fn confirm_account(&self, token: &str) -> Result<Option<StatusMessage>, GatewayError> {
        let response = self.get(&format!("/Users/confirm/{}", token)).await?;
        read_json(SERVICE, response).await
    }
}
