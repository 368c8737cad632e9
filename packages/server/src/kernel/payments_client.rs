//! HTTP client for the payments microservice.

use async_trait::async_trait;
use reqwest::Client;

use super::http::{non_empty, read_json};
use super::traits::BasePaymentService;
use crate::common::errors::GatewayError;
use crate::common::types::Payment;

const SERVICE: &str = "payments";

pub struct PaymentsClient {
    base_url: String,
    http: Client,
}

impl PaymentsClient {
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

    async fn get_list(&self, path: &str) -> Result<Option<Vec<Payment>>, GatewayError> {
        let response = self.get(path).await?;
        Ok(read_json::<Vec<Payment>>(SERVICE, response)
            .await?
            .and_then(non_empty))
    }
}

#[async_trait]
impl BasePaymentService for PaymentsClient {
    async fn all(&self) -> Result<Option<Vec<Payment>>, GatewayError> {
        self.get_list("/Payments").await
    }

    async fn by_id(&self, payment_id: i32) -> Result<Option<Payment>, GatewayError> {
        let response = self.get(&format!("/Payments/{}", payment_id)).await?;
        read_json(SERVICE, response).await
    }

    async fn by_company(&self, company_id: i32) -> Result<Option<Vec<Payment>>, GatewayError> {
        self.get_list(&format!("/Payments/company/{}", company_id)).await
    }

    async fn by_ad(&self, ad_id: i32) -> Result<Option<Vec<Payment>>, GatewayError> {
        self.get_list(&format!("/Payments/ad/{}", ad_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::time::Duration;

    #[tokio::test]
    async fn test_by_company_returns_that_companys_payments() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/Payments/company/11");
                then.status(200).json_body(json!([
                    {"id": 1, "companyId": 11, "adId": 5, "amount": 10.0, "status": "paid"},
                    {"id": 2, "companyId": 11, "adId": 6, "amount": 25.5, "status": "pending"}
                ]));
            })
            .await;

        let client = PaymentsClient::new(server.base_url(), Client::new());
        let payments = client.by_company(11).await.unwrap().expect("two payments");

        mock.assert_async().await;
        assert_eq!(payments.len(), 2);
        assert!(payments.iter().all(|p| p.company_id == 11));
    }

    #[tokio::test]
    async fn test_slow_service_surfaces_as_a_timeout() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/Payments");
                then.status(200)
                    .json_body(json!([]))
                    .delay(Duration::from_millis(500));
            })
            .await;

        let http = Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .unwrap();
        let client = PaymentsClient::new(server.base_url(), http);

        let err = client.all().await.unwrap_err();
        assert_eq!(err, GatewayError::UpstreamTimeout { service: "payments" });
    }
}
