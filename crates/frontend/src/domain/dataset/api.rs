use contracts::domain::config::Ack;
use contracts::domain::dataset::{
    CreateDataset, Dataset, DatasetPage, INDEXING_TECHNIQUE, PROCESS_RULE,
};
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::api_url;
use crate::shared::http;

pub async fn fetch_datasets() -> Result<Vec<Dataset>, ApiError> {
    let page: DatasetPage = http::get_json(&api_url("/api/datasets/")).await?;
    Ok(page.data)
}

pub async fn create_dataset(payload: &CreateDataset) -> Result<(), ApiError> {
    http::post_json::<serde_json::Value, _>(&api_url("/api/datasets/"), payload)
        .await
        .map(|_| ())
}

pub async fn delete_dataset(id: &str) -> Result<(), ApiError> {
    http::delete(&api_url(&format!("/api/datasets/{}", id))).await
}

/// Upload one document into a dataset as a multipart form with the two
/// fixed processing parameters.
pub async fn upload_file(dataset_id: &str, file: &web_sys::File) -> Result<Ack, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|e| ApiError::transport(format!("Failed to build form data: {:?}", e)))?;
    form.append_with_blob("file", file)
        .map_err(|e| ApiError::transport(format!("Failed to attach file: {:?}", e)))?;
    form.append_with_str("process_rule", PROCESS_RULE)
        .and_then(|_| form.append_with_str("indexing_technique", INDEXING_TECHNIQUE))
        .map_err(|e| ApiError::transport(format!("Failed to build form data: {:?}", e)))?;

    http::post_form(&api_url(&format!("/api/datasets/{}/files", dataset_id)), form).await
}
