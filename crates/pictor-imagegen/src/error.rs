use std::time::Duration;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ImageGenError>;

/// Errors surfaced by the image generation service
#[derive(Debug, Error)]
pub enum ImageGenError {
    /// Caller parameters were rejected before any request was sent
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The HTTP collaborator failed to complete the call
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The provider reported success but broke its response contract
    #[error("provider protocol violation: {0}")]
    Protocol(String),

    /// The cancellation token fired before the call completed
    #[error("image generation cancelled")]
    Cancelled,

    /// The request body could not be serialized
    #[error("failed to serialize request: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Service configuration is unusable
    #[error("configuration error: {0}")]
    Config(String),
}

impl ImageGenError {
    /// Whether repeating the same call may succeed
    ///
    /// Validation, protocol and configuration failures never are.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(TransportError::Connection(_) | TransportError::Timeout(_)) => true,
            Self::Transport(TransportError::Api { status, .. }) => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// A single malformed caller input
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// No description was supplied
    #[error("invalid request: `description` must be provided")]
    MissingDescription,

    /// Width and height are unequal or not a supported side length
    #[error("invalid request: `width` is {width} ({width}x{height}); use 256, 512 or 1024 squares")]
    InvalidSize { width: u32, height: u32 },

    /// Quality is missing or not `standard`/`hd`
    #[error("invalid request: `quality` must be `standard` or `hd`, got {}", shown(.0))]
    InvalidQuality(Option<String>),

    /// Style is missing or not `vivid`/`natural`
    #[error("invalid request: `style` must be `vivid` or `natural`, got {}", shown(.0))]
    InvalidStyle(Option<String>),
}

impl ValidationError {
    /// Name of the offending parameter
    pub const fn parameter(&self) -> &'static str {
        match self {
            Self::MissingDescription => "description",
            Self::InvalidSize { .. } => "width",
            Self::InvalidQuality(_) => "quality",
            Self::InvalidStyle(_) => "style",
        }
    }
}

#[allow(clippy::ref_option)]
fn shown(value: &Option<String>) -> String {
    value.as_ref().map_or_else(|| "nothing".to_owned(), |v| format!("`{v}`"))
}

/// Failures reported by the HTTP collaborator
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request could not be sent or the connection dropped
    #[error("connection error: {0}")]
    Connection(String),

    /// The provider did not answer within the configured timeout
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// The provider rejected the credentials
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// The provider answered with a non-success status
    #[error("provider API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body was not a valid generation response
    #[error("failed to decode provider response: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_error_names_width_and_value() {
        let err = ValidationError::InvalidSize { width: 300, height: 300 };
        assert_eq!(err.parameter(), "width");
        assert!(err.to_string().contains("`width` is 300"));
        assert!(err.to_string().contains("300x300"));
    }

    #[test]
    fn quality_error_shows_rejected_value() {
        let err = ValidationError::InvalidQuality(Some("ultra".to_owned()));
        assert!(err.to_string().ends_with("got `ultra`"));

        let err = ValidationError::InvalidQuality(None);
        assert!(err.to_string().ends_with("got nothing"));
    }

    #[test]
    fn retryable_classification() {
        let err = ImageGenError::from(TransportError::Api {
            status: 503,
            message: "overloaded".to_owned(),
        });
        assert!(err.is_retryable());

        let err = ImageGenError::from(TransportError::Api {
            status: 400,
            message: "bad".to_owned(),
        });
        assert!(!err.is_retryable());

        let err = ImageGenError::from(TransportError::Api {
            status: 429,
            message: "rate limited".to_owned(),
        });
        assert!(err.is_retryable());

        let err = ImageGenError::from(TransportError::Timeout(Duration::from_secs(1)));
        assert!(err.is_retryable());

        let err = ImageGenError::from(TransportError::Authentication("bad key".to_owned()));
        assert!(!err.is_retryable());

        assert!(!ImageGenError::Cancelled.is_retryable());
        assert!(!ImageGenError::from(ValidationError::MissingDescription).is_retryable());
        assert!(ImageGenError::Cancelled.is_cancelled());
    }
}
