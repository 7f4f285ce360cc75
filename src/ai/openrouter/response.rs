//! Translation of an OpenRouter HTTP response into a [`GenerationResult`].

use super::types::MessageContent;
use crate::image::decode_image_url;
use crate::models::GenerationResult;
use crate::{Error, Result};
use serde::Deserialize;
use serde_json::Value;

/// Decode the provider's reply. The first matching outcome wins:
///
/// 1. non-200 status: provider error, raw body quoted verbatim
/// 2. no non-empty `choices` array: unparseable response
/// 3. no `images` on the first message: succeeded without image data
/// 4. first image decoded, or a decode error
///
/// Outcomes 2-4 keep the parsed JSON as the raw response. A body that is
/// not a JSON object, or a first choice missing `message` or
/// `images[0].image_url.url`, is a system error with no raw response.
pub fn decode_response(status: u16, body: &str) -> GenerationResult {
    if status != 200 {
        let error = Error::Provider {
            status,
            body: body.to_string(),
        };
        tracing::error!("{}", error);
        return GenerationResult::failure(&error);
    }

    let raw: Value = match serde_json::from_str(body) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::error!("Failed to parse provider response: {}\nBody: {}", e, body);
            return GenerationResult::failure(&Error::from(e));
        }
    };

    decode_payload(raw)
}

/// What the first choice of a response carries.
#[derive(Debug)]
enum Reply {
    NoChoices,
    TextOnly { text: Option<String> },
    Image { url: Value, text: Option<String> },
}

fn decode_payload(raw: Value) -> GenerationResult {
    let reply = match read_reply(&raw) {
        Ok(reply) => reply,
        Err(error) => {
            tracing::error!("{}", error);
            return GenerationResult::failure(&error);
        }
    };

    match reply {
        Reply::NoChoices => {
            tracing::warn!("Provider response has no choices");
            let error = Error::UnparseableResponse {
                payload: pretty(&raw),
            };
            GenerationResult::failure(&error).with_raw_response(raw)
        }
        Reply::TextOnly { text } => {
            tracing::warn!("Provider returned no image data");
            let error = Error::NoImageReturned {
                payload: pretty(&raw),
            };
            GenerationResult::failure(&error)
                .with_text(text)
                .with_raw_response(raw)
        }
        Reply::Image { url, text } => {
            let decoded = match url.as_str() {
                Some(url) => decode_image_url(url),
                None => Err(Error::Decode(format!(
                    "image url is not a string: {}",
                    url
                ))),
            };

            match decoded {
                Ok(image) => GenerationResult::success(image, text, raw),
                Err(error) => {
                    tracing::warn!("{}", error);
                    GenerationResult::failure(&error)
                        .with_text(text)
                        .with_raw_response(raw)
                }
            }
        }
    }
}

/// Walk `choices[0].message`, reading only the content and the first image.
/// Other choices and other images are never inspected.
fn read_reply(raw: &Value) -> Result<Reply> {
    let root = raw
        .as_object()
        .ok_or_else(|| Error::System(format!("expected a JSON object, got {}", raw)))?;

    let Some(choice) = root
        .get("choices")
        .and_then(Value::as_array)
        .and_then(|choices| choices.first())
    else {
        return Ok(Reply::NoChoices);
    };

    let message = choice
        .get("message")
        .and_then(Value::as_object)
        .ok_or_else(|| missing_field("choices[0].message"))?;

    let text = message.get("content").and_then(content_text);

    let first_image = match message.get("images") {
        None | Some(Value::Null) => None,
        Some(Value::Array(images)) => images.first(),
        Some(other) => {
            return Err(Error::System(format!(
                "choices[0].message.images is not a list: {}",
                other
            )))
        }
    };

    let Some(first_image) = first_image else {
        return Ok(Reply::TextOnly { text });
    };

    let url = first_image
        .get("image_url")
        .and_then(|image_url| image_url.get("url"))
        .ok_or_else(|| missing_field("choices[0].message.images[0].image_url.url"))?;

    Ok(Reply::Image {
        url: url.clone(),
        text,
    })
}

/// Text of a `content` value; shapes other than a string or a list of parts
/// carry no text.
fn content_text(content: &Value) -> Option<String> {
    MessageContent::deserialize(content)
        .ok()
        .and_then(|content| content.text())
}

fn missing_field(path: &str) -> Error {
    Error::System(format!("response is missing `{}`", path))
}

fn pretty(raw: &Value) -> String {
    serde_json::to_string_pretty(raw).unwrap_or_else(|_| raw.to_string())
}
