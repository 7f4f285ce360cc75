//! Translation of a [`GenerationRequest`] into the OpenRouter wire request.

use super::types::{ChatCompletionRequest, ChatMessage, ImageConfig, MODALITIES};
use crate::models::GenerationRequest;
use crate::{Error, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

pub const APP_REFERER: &str = "http://localhost/openrouter-imagegen";
pub const APP_TITLE: &str = "OpenRouter Image Generator";

/// A validated request, ready to POST.
#[derive(Debug)]
pub struct PreparedRequest {
    pub url: String,
    pub headers: HeaderMap,
    pub body: ChatCompletionRequest,
}

/// Validate `request` and build its headers and body.
///
/// The credential is checked before the prompt; neither check touches the
/// network.
pub fn build_request(request: &GenerationRequest) -> Result<PreparedRequest> {
    if request.api_key.is_empty() {
        return Err(Error::MissingCredential);
    }
    if request.prompt.is_empty() {
        return Err(Error::MissingPrompt);
    }

    Ok(PreparedRequest {
        url: request.endpoint.clone(),
        headers: build_headers(&request.api_key)?,
        body: build_body(request),
    })
}

fn build_headers(api_key: &str) -> Result<HeaderMap> {
    let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(|_| {
        Error::System("API key contains characters not allowed in an HTTP header".to_string())
    })?;
    auth.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, auth);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(
        HeaderName::from_static("http-referer"),
        HeaderValue::from_static(APP_REFERER),
    );
    headers.insert(
        HeaderName::from_static("x-title"),
        HeaderValue::from_static(APP_TITLE),
    );
    Ok(headers)
}

fn build_body(request: &GenerationRequest) -> ChatCompletionRequest {
    // The default ratio is omitted so providers without image_config support
    // see a plain request.
    let image_config = request
        .aspect_ratio
        .filter(|ratio| !ratio.is_default())
        .map(|ratio| ImageConfig {
            aspect_ratio: ratio.as_str().to_string(),
        });

    ChatCompletionRequest {
        model: request.model.clone(),
        messages: vec![ChatMessage {
            role: "user".to_string(),
            content: request.prompt.clone(),
        }],
        modalities: MODALITIES.iter().map(|m| m.to_string()).collect(),
        image_config,
    }
}
