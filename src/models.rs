//! Data models and configuration
//!
//! Request-scoped entities flowing through one generation: the user's
//! [`GenerationRequest`] in, a [`GenerationResult`] out.

use crate::catalog::{AspectRatio, DEFAULT_MODEL};
use crate::error::FailureKind;
use crate::{Error, Result};
use image::DynamicImage;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";

#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub api_key: String,
    pub endpoint: String,
    pub model: String,
    pub prompt: String,
    pub aspect_ratio: Option<AspectRatio>,
}

impl GenerationRequest {
    pub fn new(api_key: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            prompt: prompt.into(),
            aspect_ratio: None,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: AspectRatio) -> Self {
        self.aspect_ratio = Some(aspect_ratio);
        self
    }
}

/// A bitmap decoded from the provider's data URL.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub image: DynamicImage,
    /// MIME type declared in the `data:` header, if the URL had one.
    pub declared_mime: Option<String>,
    /// MIME type sniffed from the decoded bytes.
    pub detected_mime: &'static str,
}

impl DecodedImage {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Everything handed back to the front-end after one request.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub image: Option<DecodedImage>,
    pub status_message: String,
    pub raw_response: Option<serde_json::Value>,
    /// Assistant text content, kept even when no image came back.
    pub text: Option<String>,
    pub failure: Option<FailureKind>,
}

impl GenerationResult {
    pub fn success(
        image: DecodedImage,
        text: Option<String>,
        raw_response: serde_json::Value,
    ) -> Self {
        let status_message = match &text {
            Some(text) => format!("success! {}", text),
            None => "success!".to_string(),
        };

        Self {
            image: Some(image),
            status_message,
            raw_response: Some(raw_response),
            text,
            failure: None,
        }
    }

    pub fn failure(error: &Error) -> Self {
        Self {
            image: None,
            status_message: error.to_string(),
            raw_response: None,
            text: None,
            failure: Some(error.kind()),
        }
    }

    pub fn with_raw_response(mut self, raw_response: serde_json::Value) -> Self {
        self.raw_response = Some(raw_response);
        self
    }

    pub fn with_text(mut self, text: Option<String>) -> Self {
        self.text = text;
        self
    }

    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub endpoint: String,
    pub model: String,
    pub aspect_ratio: AspectRatio,
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            aspect_ratio: AspectRatio::default(),
            timeout: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let aspect_ratio = match lookup("OPENROUTER_ASPECT_RATIO") {
            Some(value) => value.parse()?,
            None => defaults.aspect_ratio,
        };

        let timeout = lookup("OPENROUTER_TIMEOUT_SECS")
            .map(|value| parse_timeout_secs(&value))
            .transpose()?;

        Ok(Self {
            api_key: lookup("OPENROUTER_API_KEY").filter(|key| !key.is_empty()),
            endpoint: lookup("OPENROUTER_ENDPOINT").unwrap_or(defaults.endpoint),
            model: lookup("OPENROUTER_MODEL").unwrap_or(defaults.model),
            aspect_ratio,
            timeout,
        })
    }
}

pub fn parse_timeout_secs(value: &str) -> Result<Duration> {
    let secs: u64 = value.trim().parse().map_err(|_| {
        Error::Config(format!(
            "Invalid timeout '{}'. Expected a whole number of seconds",
            value
        ))
    })?;

    if secs == 0 {
        return Err(Error::Config("Timeout must be at least 1 second".to_string()));
    }

    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert!(config.api_key.is_none());
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.aspect_ratio, AspectRatio::Square);
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_config_reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("OPENROUTER_API_KEY", "sk-or-test"),
            ("OPENROUTER_ENDPOINT", "http://localhost:9999/v1/chat/completions"),
            ("OPENROUTER_MODEL", "openai/gpt-5-image"),
            ("OPENROUTER_ASPECT_RATIO", "16:9"),
            ("OPENROUTER_TIMEOUT_SECS", "45"),
        ]))
        .unwrap();

        assert_eq!(config.api_key.as_deref(), Some("sk-or-test"));
        assert_eq!(config.endpoint, "http://localhost:9999/v1/chat/completions");
        assert_eq!(config.model, "openai/gpt-5-image");
        assert_eq!(config.aspect_ratio, AspectRatio::Landscape16x9);
        assert_eq!(config.timeout, Some(Duration::from_secs(45)));
    }

    #[test]
    fn test_config_empty_api_key_is_unset() {
        let config = Config::from_lookup(lookup_from(&[("OPENROUTER_API_KEY", "")])).unwrap();
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_config_rejects_bad_aspect_ratio() {
        let err = Config::from_lookup(lookup_from(&[("OPENROUTER_ASPECT_RATIO", "square")]))
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_parse_timeout_secs() {
        assert_eq!(parse_timeout_secs("30").unwrap(), Duration::from_secs(30));
        assert!(parse_timeout_secs("0").is_err());
        assert!(parse_timeout_secs("soon").is_err());
    }

    #[test]
    fn test_success_status_includes_text() {
        let image = DecodedImage {
            image: DynamicImage::new_rgba8(1, 1),
            declared_mime: Some("image/png".to_string()),
            detected_mime: "image/png",
        };

        let with_text = GenerationResult::success(
            image.clone(),
            Some("ok".to_string()),
            serde_json::json!({}),
        );
        assert_eq!(with_text.status_message, "success! ok");
        assert!(with_text.is_success());

        let without_text = GenerationResult::success(image, None, serde_json::json!({}));
        assert_eq!(without_text.status_message, "success!");
    }

    #[test]
    fn test_failure_result_has_no_image_or_raw() {
        let result = GenerationResult::failure(&Error::MissingPrompt);
        assert!(result.image.is_none());
        assert!(result.raw_response.is_none());
        assert_eq!(result.failure, Some(FailureKind::MissingPrompt));
        assert!(!result.is_success());
    }
}
