// Shared response handling for the delegate service clients.
//
// The four downstream services follow one REST convention: 404 means "no
// record for this request", 2xx carries a JSON payload, anything else is a
// contract breach. Decoding that convention lives here so every client
// maps statuses the same way.

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::common::errors::GatewayError;

/// Decode a delegate response: 404 is an absent record, 2xx is a payload,
/// everything else is an upstream fault attributed to `service`.
pub(crate) async fn read_json<T: DeserializeOwned>(
    service: &'static str,
    response: Response,
) -> Result<Option<T>, GatewayError> {
    match response.status() {
        StatusCode::NOT_FOUND => Ok(None),
        status if status.is_success() => {
            let value = response
                .json::<T>()
                .await
                .map_err(|e| GatewayError::from_reqwest(service, e))?;
            Ok(Some(value))
        }
        status => Err(GatewayError::UpstreamError {
            service,
            detail: format!("status {}", status.as_u16()),
        }),
    }
}

/// Normalize an upstream list payload: an empty array means the service
/// had nothing for the request.
pub(crate) fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}
