use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::timestamp;
use crate::shared::validation::FieldError;

/// Fixed processing parameters sent with every document upload.
pub const PROCESS_RULE: &str = "automatic";
pub const INDEXING_TECHNIQUE: &str = "high_quality";

/// File types the platform ingests.
pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["txt", "pdf", "doc", "docx", "md", "html"];

/// `accept` attribute value for the upload file input.
pub const UPLOAD_ACCEPT: &str = ".txt,.pdf,.doc,.docx,.md,.html";

/// Whether a file name passes the upload allow-list.
pub fn is_supported_file(name: &str) -> bool {
    name.rsplit_once('.')
        .map(|(_, ext)| SUPPORTED_EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)))
        .unwrap_or(false)
}

/// Knowledge-base record as returned inside the `GET /api/datasets/` envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub document_count: u32,
    #[serde(with = "timestamp::flexible")]
    pub created_at: DateTime<Utc>,
}

/// `GET /api/datasets/` wraps the records in a `data` array.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetPage {
    #[serde(default)]
    pub data: Vec<Dataset>,
}

/// Body for `POST /api/datasets/`. The platform expects the indexing and
/// permission fields even though the console never varies them.
#[derive(Debug, Clone, Serialize)]
pub struct CreateDataset {
    pub name: String,
    pub description: String,
    pub indexing_technique: String,
    pub permission: String,
    pub provider: String,
}

/// Form values for the create-dataset modal.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DatasetDraft {
    pub name: String,
    pub description: String,
}

impl DatasetDraft {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        if self.name.trim().is_empty() {
            Err(vec![FieldError::new("name", "Name is required")])
        } else {
            Ok(())
        }
    }

    pub fn into_payload(self) -> CreateDataset {
        CreateDataset {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            indexing_technique: INDEXING_TECHNIQUE.to_string(),
            permission: "only_me".to_string(),
            provider: "vendor".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_with_epoch_timestamp() {
        let page: DatasetPage = serde_json::from_str(
            r#"{"data": [{"id": "d1", "name": "Docs", "document_count": 3, "created_at": 1700000000}]}"#,
        )
        .unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].name, "Docs");
        assert_eq!(page.data[0].document_count, 3);
        assert_eq!(page.data[0].created_at.to_rfc3339(), "2023-11-14T22:13:20+00:00");
    }

    #[test]
    fn test_empty_envelope() {
        let page: DatasetPage = serde_json::from_str("{}").unwrap();
        assert!(page.data.is_empty());
    }

    #[test]
    fn test_file_allow_list() {
        assert!(is_supported_file("report.pdf"));
        assert!(is_supported_file("README.MD"));
        assert!(is_supported_file("notes.docx"));
        assert!(!is_supported_file("archive.zip"));
        assert!(!is_supported_file("binary.exe"));
        assert!(!is_supported_file("no_extension"));
    }

    #[test]
    fn test_create_payload_carries_fixed_fields() {
        let draft = DatasetDraft {
            name: " Docs ".to_string(),
            description: "All docs".to_string(),
        };
        let json = serde_json::to_value(draft.into_payload()).unwrap();
        assert_eq!(json["name"], "Docs");
        assert_eq!(json["indexing_technique"], "high_quality");
        assert_eq!(json["permission"], "only_me");
        assert_eq!(json["provider"], "vendor");
    }

    #[test]
    fn test_draft_requires_name() {
        assert!(DatasetDraft::default().validate().is_err());
    }
}
