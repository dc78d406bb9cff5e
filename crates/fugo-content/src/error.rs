//! Error Types for the content layer

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ContentError>;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Valid JSON that does not have the expected layout
    #[error("Malformed response: {0}")]
    Shape(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ContentError {
    /// Transport-level failure (connection, DNS, non-2xx)
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Status { .. })
    }

    /// Short message suitable for a log line next to the section name
    pub fn diagnostic(&self) -> String {
        match self {
            Self::Network(e) if e.is_timeout() => "request timed out".into(),
            Self::Network(e) if e.is_decode() => "response body could not be decoded".into(),
            Self::Status { status, .. } => format!("upstream answered {status}"),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_is_network() {
        let err = ContentError::Status { status: 503, url: "https://cdn.contentful.com".into() };
        assert!(err.is_network());
        assert_eq!(err.diagnostic(), "upstream answered 503");
    }

    #[test]
    fn test_shape_is_not_network() {
        let err = ContentError::Shape("missing items".into());
        assert!(!err.is_network());
        assert_eq!(err.to_string(), "Malformed response: missing items");
    }
}
