//! HTTP client for the companies microservice.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use super::http::read_json;
use super::traits::BaseCompanyService;
use crate::common::errors::GatewayError;
use crate::common::types::CompanyId;

const SERVICE: &str = "companies";

pub struct CompaniesClient {
    base_url: String,
    http: Client,
}

#[derive(Debug, Serialize)]
struct CompanyRequest<'a> {
    name: &'a str,
    email: &'a str,
}

impl CompaniesClient {
    pub fn new(base_url: String, http: Client) -> Self {
        Self { base_url, http }
    }
}

#[async_trait]
impl BaseCompanyService for CompaniesClient {
    async fn create(&self, name: &str, email: &str) -> Result<Option<CompanyId>, GatewayError> {
        let response = self
            .http
            .post(format!("{}/Companies", self.base_url))
            .json(&CompanyRequest { name, email })
            .send()
            .await
            .map_err(|e| GatewayError::from_reqwest(SERVICE, e))?;
        read_json(SERVICE, response).await
    }

    async fn update(
        &self,
        company_id: i32,
        name: &str,
        email: &str,
    ) -> Result<Option<CompanyId>, GatewayError> {
        let response = self
            .http
            .put(format!("{}/Companies/{}", self.base_url, company_id))
            .json(&CompanyRequest { name, email })
            .send()
            .await
            .map_err(|e| GatewayError::from_reqwest(SERVICE, e))?;
        read_json(SERVICE, response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_posts_the_company_and_returns_its_id() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/Companies")
                    .json_body(json!({"name": "Acme", "email": "ads@acme.example"}));
                then.status(201).json_body(json!({"id": 42}));
            })
            .await;

        let client = CompaniesClient::new(server.base_url(), Client::new());
        let company = client.create("Acme", "ads@acme.example").await.unwrap();

        mock.assert_async().await;
        assert_eq!(company.expect("created").id, 42);
    }

    #[tokio::test]
    async fn test_update_of_an_unknown_company_is_absent() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(PUT).path("/Companies/9");
                then.status(404);
            })
            .await;

        let client = CompaniesClient::new(server.base_url(), Client::new());
        let company = client.update(9, "Acme", "ads@acme.example").await.unwrap();
        assert!(company.is_none());
    }
}
