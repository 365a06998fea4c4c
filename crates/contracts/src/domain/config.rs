use serde::{Deserialize, Serialize};

use crate::shared::secret::SecretField;
use crate::shared::validation::FieldError;

/// Suggested platform address for a fresh install.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8091/";

/// Singleton connection settings for the external platform.
///
/// `api_key` is masked by the server; the real value never reaches the
/// client. `configured` is true iff both fields hold valid values
/// server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub configured: bool,
}

/// `POST /api/config/` body. A missing `api_key` leaves the stored key as is.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigUpdate {
    pub base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

/// Generic `{message}` acknowledgement body.
#[derive(Debug, Clone, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}

/// Form values for the config panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDraft {
    pub base_url: String,
    pub api_key: SecretField,
}

impl ConfigDraft {
    /// Both fields are required, but an untouched mask counts as a key:
    /// the stored secret stays in place.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.base_url.trim().is_empty() {
            errors.push(FieldError::new("base_url", "API address is required"));
        }
        if self.api_key == SecretField::Unset {
            errors.push(FieldError::new("api_key", "API key is required"));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn into_payload(self) -> ConfigUpdate {
        ConfigUpdate {
            base_url: self.base_url.trim().to_string(),
            api_key: self.api_key.into_payload(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_both_fields() {
        let draft = ConfigDraft {
            base_url: "  ".to_string(),
            api_key: SecretField::Unset,
        };
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "base_url");
        assert_eq!(errors[1].field, "api_key");
    }

    #[test]
    fn test_untouched_mask_passes_and_is_omitted() {
        let draft = ConfigDraft {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: SecretField::Unchanged,
        };
        assert!(draft.validate().is_ok());
        let payload = draft.into_payload();
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("api_key").is_none());
        assert_eq!(json["base_url"], DEFAULT_BASE_URL);
    }

    #[test]
    fn test_fresh_key_is_sent() {
        let draft = ConfigDraft {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: SecretField::Provided("dataset-key".to_string()),
        };
        let json = serde_json::to_value(draft.into_payload()).unwrap();
        assert_eq!(json["api_key"], "dataset-key");
    }
}
