//! Error handling and custom error types
//!
//! Every failure a generation request can end in is a variant here; the
//! `Display` text of a variant is exactly the status message shown to the
//! user.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("error: an API key is required")]
    MissingCredential,

    #[error("error: a prompt is required")]
    MissingPrompt,

    #[error("API error ({status}): {body}")]
    Provider { status: u16, body: String },

    #[error("response format unparseable, full payload: {payload}")]
    UnparseableResponse { payload: String },

    #[error("request succeeded but no image data returned, full payload: {payload}")]
    NoImageReturned { payload: String },

    #[error("image decode failed: {0}")]
    Decode(String),

    #[error("system error: {0}")]
    System(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse classification of [`Error`], kept on results so callers can branch
/// without matching on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    MissingCredential,
    MissingPrompt,
    ProviderError,
    UnparseableResponse,
    NoImageReturned,
    DecodeError,
    SystemError,
    Config,
}

impl Error {
    pub fn kind(&self) -> FailureKind {
        match self {
            Error::MissingCredential => FailureKind::MissingCredential,
            Error::MissingPrompt => FailureKind::MissingPrompt,
            Error::Provider { .. } => FailureKind::ProviderError,
            Error::UnparseableResponse { .. } => FailureKind::UnparseableResponse,
            Error::NoImageReturned { .. } => FailureKind::NoImageReturned,
            Error::Decode(_) => FailureKind::DecodeError,
            Error::System(_) => FailureKind::SystemError,
            Error::Config(_) => FailureKind::Config,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::System(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::System(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_message_carries_status_and_body() {
        let err = Error::Provider {
            status: 429,
            body: "{\"error\":\"rate limited\"}".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API error (429): {\"error\":\"rate limited\"}"
        );
    }

    #[test]
    fn test_decode_and_provider_messages_are_distinguishable() {
        let decode = Error::Decode("Invalid byte 33, offset 0.".to_string()).to_string();
        let provider = Error::Provider {
            status: 500,
            body: "Invalid byte".to_string(),
        }
        .to_string();

        assert!(decode.starts_with("image decode failed"));
        assert!(provider.starts_with("API error"));
    }

    #[test]
    fn test_json_error_maps_to_system_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = json_err.into();
        assert_eq!(err.kind(), FailureKind::SystemError);
        assert!(err.to_string().starts_with("system error: "));
    }
}
