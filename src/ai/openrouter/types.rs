//! OpenRouter chat-completion payloads for image generation.
//!
//! Responses are read by walking `serde_json::Value` (see `response.rs`);
//! only the message content has a typed shape here.

use serde::{Deserialize, Serialize};

/// Output modalities requested on every call.
pub const MODALITIES: [&str; 2] = ["image", "text"];

/// Request body for chat completions with image output.
#[derive(Debug, Serialize, PartialEq)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub modalities: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_config: Option<ImageConfig>,
}

/// Provider image-shape hint (honored by Gemini-family models).
#[derive(Debug, Serialize, PartialEq)]
pub struct ImageConfig {
    pub aspect_ratio: String,
}

/// Outbound chat message.
#[derive(Debug, Serialize, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Message content union: providers send either a plain string or a list
/// of typed parts.
///
/// Variant order matters for `#[serde(untagged)]` decoding.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

impl MessageContent {
    /// Text of the message, `None` when it is empty.
    pub fn text(&self) -> Option<String> {
        let text = match self {
            MessageContent::Text(text) => text.clone(),
            MessageContent::Parts(parts) => parts
                .iter()
                .filter(|part| part.part_type == "text")
                .filter_map(|part| part.text.as_deref())
                .collect::<Vec<_>>()
                .join("\n"),
        };

        (!text.is_empty()).then_some(text)
    }
}

/// One content segment in multipart assistant output.
#[derive(Debug, Deserialize)]
pub struct ContentPart {
    #[serde(rename = "type", default)]
    pub part_type: String,
    pub text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_string() {
        let content: MessageContent = serde_json::from_value(serde_json::json!("ok")).unwrap();
        assert_eq!(content.text().as_deref(), Some("ok"));
    }

    #[test]
    fn test_content_empty_string_is_none() {
        let content: MessageContent = serde_json::from_value(serde_json::json!("")).unwrap();
        assert!(content.text().is_none());
    }

    #[test]
    fn test_content_parts_joined() {
        let content: MessageContent = serde_json::from_value(serde_json::json!([
            { "type": "text", "text": "first" },
            { "type": "image_url" },
            { "type": "text", "text": "second" }
        ]))
        .unwrap();
        assert_eq!(content.text().as_deref(), Some("first\nsecond"));
    }

    #[test]
    fn test_content_parts_without_text_type_ignored() {
        let content: MessageContent = serde_json::from_value(serde_json::json!([
            { "type": "reasoning", "text": "thinking..." },
            { "text": "untyped" }
        ]))
        .unwrap();
        assert!(content.text().is_none());
    }

    #[test]
    fn test_content_object_does_not_parse() {
        let parsed = serde_json::from_value::<MessageContent>(serde_json::json!({
            "reasoning": "x"
        }));
        assert!(parsed.is_err());
    }
}
