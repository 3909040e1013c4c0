use thiserror::Error;

/// Banner text when the backend gives no usable `message`.
pub const GENERIC_FAILURE_MESSAGE: &str = "Request failed. Please try again.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or(GENERIC_FAILURE_MESSAGE))]
    Rejected { status: u16, message: Option<String> },
    #[error("unexpected response body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid API base URL '{0}' (expected http:// or https://)")]
    InvalidBaseUrl(String),
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl ApiError {
    /// Text for the error banner: the backend's `message` verbatim when it
    /// sent one, the generic fallback otherwise.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            ApiError::Transport { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub(crate) fn rejected(status: u16, body: &str) -> Self {
        ApiError::Rejected {
            status,
            message: extract_message(body),
        }
    }
}

/// Pulls a non-empty string `message` out of an error body.
pub fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(|m| m.as_str())
        .filter(|m| !m.trim().is_empty())
        .map(str::to_string)
}
