//! HTTP client for the ads microservice.

use async_trait::async_trait;
use reqwest::Client;

use super::http::read_json;
use super::traits::BaseAdService;
use crate::common::errors::GatewayError;
use crate::common::types::StatusMessage;

const SERVICE: &str = "ads";

pub struct AdsClient {
    base_url: String,
    http: Client,
}

impl AdsClient {
    pub fn new(base_url: String, http: Client) -> Self {
        Self { base_url, http }
    }
}

#[async_trait]
impl BaseAdService for AdsClient {
    async fn publish(&self, ad_id: i32) -> Result<Option<StatusMessage>, GatewayError> {
        let response = self
            .http
            .post(format!("{}/Ads/publish/{}", self.base_url, ad_id))
            .send()
            .await
            .map_err(|e| GatewayError::from_reqwest(SERVICE, e))?;
        read_json(SERVICE, response).await
    }
}
