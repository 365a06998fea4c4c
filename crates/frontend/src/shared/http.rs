//! Thin wrappers over gloo-net for talking to the admin backend.
//!
//! Every call is a single request/response round trip: no retries, no
//! caching. Non-2xx responses are turned into [`ApiError`] with the
//! message taken from the body's `detail` field when present.

use contracts::shared::api_error::ApiError;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

async fn into_api_error(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    ApiError::from_status_body(status, &body)
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(into_api_error(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::transport(format!("Failed to parse response: {}", e)))
}

pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::transport(format!("Failed to send request: {}", e)))?;
    parse_json(response).await
}

pub async fn post_json<T, B>(url: &str, body: &B) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let response = Request::post(url)
        .json(body)
        .map_err(|e| ApiError::transport(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::transport(format!("Failed to send request: {}", e)))?;
    parse_json(response).await
}

pub async fn patch_json<T, B>(url: &str, body: &B) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let response = Request::patch(url)
        .json(body)
        .map_err(|e| ApiError::transport(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::transport(format!("Failed to send request: {}", e)))?;
    parse_json(response).await
}

pub async fn delete(url: &str) -> Result<(), ApiError> {
    let response = Request::delete(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::transport(format!("Failed to send request: {}", e)))?;
    if !response.ok() {
        return Err(into_api_error(response).await);
    }
    Ok(())
}

/// Multipart POST. The browser sets the content type and boundary itself.
pub async fn post_form<T: DeserializeOwned>(
    url: &str,
    form: web_sys::FormData,
) -> Result<T, ApiError> {
    let response = Request::post(url)
        .body(form)
        .map_err(|e| ApiError::transport(format!("Failed to build request: {:?}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::transport(format!("Failed to send request: {}", e)))?;
    parse_json(response).await
}
