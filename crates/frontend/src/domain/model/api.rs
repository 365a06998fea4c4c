use contracts::domain::config::Ack;
use contracts::domain::model::{AiModel, ModelPayload};
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::api_url;
use crate::shared::http;

pub async fn fetch_models() -> Result<Vec<AiModel>, ApiError> {
    http::get_json(&api_url("/api/models/")).await
}

pub async fn create_model(payload: &ModelPayload) -> Result<Ack, ApiError> {
    http::post_json(&api_url("/api/models/"), payload).await
}

pub async fn update_model(id: &str, payload: &ModelPayload) -> Result<Ack, ApiError> {
    http::patch_json(&api_url(&format!("/api/models/{}", id)), payload).await
}

pub async fn delete_model(id: &str) -> Result<(), ApiError> {
    http::delete(&api_url(&format!("/api/models/{}", id))).await
}
