use contracts::domain::config::{Ack, ConfigUpdate, ConnectionConfig};
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::api_url;
use crate::shared::http;

pub async fn fetch_config() -> Result<ConnectionConfig, ApiError> {
    http::get_json(&api_url("/api/config/")).await
}

pub async fn save_config(payload: &ConfigUpdate) -> Result<Ack, ApiError> {
    http::post_json(&api_url("/api/config/"), payload).await
}

pub async fn test_connection() -> Result<Ack, ApiError> {
    http::get_json(&api_url("/api/config/test")).await
}

/// Precondition gate for platform-mutating actions (dataset creation,
/// document upload). Queries the backend every time it is called: the
/// configuration may change between actions, so the result is never cached.
pub async fn ensure_configured() -> bool {
    match fetch_config().await {
        Ok(config) => config.configured,
        Err(err) => {
            log::warn!("configuration check failed: {}", err);
            false
        }
    }
}
