use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::secret::SecretField;
use crate::shared::timestamp;
use crate::shared::validation::FieldError;

/// Supported model providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelProvider {
    OpenAi,
    Anthropic,
    Ollama,
    Azure,
    HuggingFace,
}

impl ModelProvider {
    pub const ALL: [ModelProvider; 5] = [
        ModelProvider::OpenAi,
        ModelProvider::Anthropic,
        ModelProvider::Ollama,
        ModelProvider::Azure,
        ModelProvider::HuggingFace,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelProvider::OpenAi => "openai",
            ModelProvider::Anthropic => "anthropic",
            ModelProvider::Ollama => "ollama",
            ModelProvider::Azure => "azure",
            ModelProvider::HuggingFace => "huggingface",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "openai" => Ok(ModelProvider::OpenAi),
            "anthropic" => Ok(ModelProvider::Anthropic),
            "ollama" => Ok(ModelProvider::Ollama),
            "azure" => Ok(ModelProvider::Azure),
            "huggingface" => Ok(ModelProvider::HuggingFace),
            _ => Err(format!("Unknown provider: {}", s)),
        }
    }

    /// Human label for selects and tags.
    pub fn label(&self) -> &'static str {
        match self {
            ModelProvider::OpenAi => "OpenAI",
            ModelProvider::Anthropic => "Anthropic",
            ModelProvider::Ollama => "Ollama",
            ModelProvider::Azure => "Azure OpenAI",
            ModelProvider::HuggingFace => "Hugging Face",
        }
    }
}

/// AI model registration as returned by `GET /api/models/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiModel {
    pub id: String,
    pub name: String,
    pub provider: ModelProvider,
    pub model_name: String,
    #[serde(default)]
    pub base_url: Option<String>,
    /// Masked by the server when a key is stored.
    #[serde(default)]
    pub api_key: Option<String>,
    pub enabled: bool,
    #[serde(with = "timestamp::flexible")]
    pub created_at: DateTime<Utc>,
}

/// Body for `POST /api/models/` and `PATCH /api/models/{id}`.
///
/// `api_key` is omitted unless the user typed a fresh value, so an edit
/// that leaves the mask alone never overwrites the stored secret.
#[derive(Debug, Clone, Serialize)]
pub struct ModelPayload {
    pub name: String,
    pub provider: ModelProvider,
    pub model_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub enabled: bool,
}

/// Form values for the model create/edit modal.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelDraft {
    pub name: String,
    pub provider: ModelProvider,
    pub model_name: String,
    pub base_url: String,
    pub api_key: SecretField,
    pub enabled: bool,
}

impl Default for ModelDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            provider: ModelProvider::OpenAi,
            model_name: String::new(),
            base_url: String::new(),
            api_key: SecretField::Unset,
            enabled: true,
        }
    }
}

impl ModelDraft {
    /// Pre-populate the edit form; a stored key shows up as the mask.
    pub fn from_record(record: &AiModel) -> Self {
        Self {
            name: record.name.clone(),
            provider: record.provider,
            model_name: record.model_name.clone(),
            base_url: record.base_url.clone().unwrap_or_default(),
            api_key: if record.api_key.as_deref().is_some_and(|k| !k.is_empty()) {
                SecretField::Unchanged
            } else {
                SecretField::Unset
            },
            enabled: record.enabled,
        }
    }

    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError::new("name", "Display name is required"));
        }
        if self.model_name.trim().is_empty() {
            errors.push(FieldError::new("model_name", "Model name is required"));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn into_payload(self) -> ModelPayload {
        let base_url = self.base_url.trim();
        ModelPayload {
            name: self.name.trim().to_string(),
            provider: self.provider,
            model_name: self.model_name.trim().to_string(),
            base_url: if base_url.is_empty() {
                None
            } else {
                Some(base_url.to_string())
            },
            api_key: self.api_key.into_payload(),
            enabled: self.enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::secret::MASKED_PLACEHOLDER;

    fn sample_record() -> AiModel {
        serde_json::from_str(
            r#"{
                "id": "m1",
                "name": "Chat",
                "provider": "anthropic",
                "model_name": "claude-2",
                "api_key": "********",
                "enabled": true,
                "created_at": "2024-01-02T03:04:05"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_provider_round_trip() {
        for provider in ModelProvider::ALL {
            assert_eq!(ModelProvider::from_str(provider.as_str()), Ok(provider));
        }
        assert!(ModelProvider::from_str("aws").is_err());
    }

    #[test]
    fn test_create_draft_is_empty_with_defaults() {
        let draft = ModelDraft::default();
        assert_eq!(draft.name, "");
        assert_eq!(draft.provider, ModelProvider::OpenAi);
        assert_eq!(draft.api_key, SecretField::Unset);
        assert!(draft.enabled);
    }

    #[test]
    fn test_validate_reports_required_fields() {
        let errors = ModelDraft::default().validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "model_name"]);
    }

    #[test]
    fn test_untouched_mask_never_sent_on_edit() {
        let mut draft = ModelDraft::from_record(&sample_record());
        assert_eq!(draft.api_key, SecretField::Unchanged);
        draft.api_key = SecretField::from_input(MASKED_PLACEHOLDER);
        let json = serde_json::to_value(draft.into_payload()).unwrap();
        assert!(json.get("api_key").is_none());
        assert_eq!(json["provider"], "anthropic");
    }

    #[test]
    fn test_fresh_key_is_sent() {
        let mut draft = ModelDraft::from_record(&sample_record());
        draft.api_key = SecretField::from_input("sk-new");
        let json = serde_json::to_value(draft.into_payload()).unwrap();
        assert_eq!(json["api_key"], "sk-new");
    }

    #[test]
    fn test_blank_base_url_is_omitted() {
        let draft = ModelDraft {
            name: "Local".to_string(),
            model_name: "llama2".to_string(),
            base_url: "   ".to_string(),
            ..ModelDraft::default()
        };
        let json = serde_json::to_value(draft.into_payload()).unwrap();
        assert!(json.get("base_url").is_none());
    }
}
