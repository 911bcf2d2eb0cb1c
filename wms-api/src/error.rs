use tower_api_client::{Error as ApiError, StatusCode};

#[derive(Debug)]
pub enum WmsApiError {
    /// The backend answered with a non-success status
    Backend(StatusCode, String),
    /// Transport, decoding or client-side failure
    Internal(ApiError),
}

impl From<ApiError> for WmsApiError {
    fn from(value: ApiError) -> Self {
        match value {
            ApiError::ClientError(status, detail) | ApiError::ServerError(status, detail) => {
                WmsApiError::Backend(status, summarize_detail(&detail))
            }
            e => WmsApiError::Internal(e),
        }
    }
}

impl std::fmt::Display for WmsApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WmsApiError::Internal(e) => write!(f, "Internal error: {}", e),
            WmsApiError::Backend(status, detail) if detail.is_empty() => write!(f, "({})", status),
            WmsApiError::Backend(status, detail) => write!(f, "({}) {}", status, detail),
        }
    }
}

impl std::error::Error for WmsApiError {}

/// ORDS error bodies are JSON with a `message` field; anything else is
/// passed through trimmed to a single line.
fn summarize_detail(detail: &str) -> String {
    if let Ok(body) = serde_json::from_str::<serde_json::Value>(detail) {
        if let Some(message) = body.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }
    }

    detail.lines().next().unwrap_or_default().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_ords_error_body() {
        let body = r#"{"code":"NotFound","message":"The request could not be mapped"}"#;
        assert_eq!(summarize_detail(body), "The request could not be mapped");
    }

    #[test]
    fn test_summarize_plain_body_keeps_first_line() {
        assert_eq!(summarize_detail("  Bad Gateway \n<html>"), "Bad Gateway");
        assert_eq!(summarize_detail(""), "");
    }
}
