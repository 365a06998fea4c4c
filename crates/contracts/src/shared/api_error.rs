use std::fmt;

/// Error returned by any admin backend call.
///
/// `status` is `None` for transport-level failures (request never got a
/// response); otherwise it carries the non-2xx HTTP status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: Option<u16>,
    pub message: String,
}

impl ApiError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    /// Build an error from a non-2xx response.
    ///
    /// The backend convention is a JSON body with a `detail` field. A JSON
    /// body without `detail` falls back to a generic message; a body that is
    /// not JSON at all is used verbatim.
    pub fn from_status_body(status: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<serde_json::Value>(body) {
            Ok(value) => value
                .get("detail")
                .and_then(|d| d.as_str())
                .map(|d| d.to_string())
                .unwrap_or_else(|| format!("HTTP error {}", status)),
            Err(_) => {
                let raw = body.trim();
                if raw.is_empty() {
                    format!("HTTP error {}", status)
                } else {
                    raw.to_string()
                }
            }
        };
        Self {
            status: Some(status),
            message,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} (HTTP {})", self.message, status),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_field_wins() {
        let err = ApiError::from_status_body(400, r#"{"detail": "please configure the API key first"}"#);
        assert_eq!(err.status, Some(400));
        assert_eq!(err.message, "please configure the API key first");
    }

    #[test]
    fn test_json_without_detail_is_generic() {
        let err = ApiError::from_status_body(500, r#"{"error": "boom"}"#);
        assert_eq!(err.message, "HTTP error 500");
    }

    #[test]
    fn test_non_json_body_used_verbatim() {
        let err = ApiError::from_status_body(502, "Bad Gateway");
        assert_eq!(err.message, "Bad Gateway");
    }

    #[test]
    fn test_empty_body_is_generic() {
        let err = ApiError::from_status_body(404, "  ");
        assert_eq!(err.message, "HTTP error 404");
    }

    #[test]
    fn test_display_includes_status() {
        let err = ApiError::from_status_body(500, "oops");
        assert_eq!(err.to_string(), "oops (HTTP 500)");
        let err = ApiError::transport("Failed to send request");
        assert_eq!(err.to_string(), "Failed to send request");
    }
}
