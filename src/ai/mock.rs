use super::ImageGenerationService;
use crate::models::{DecodedImage, GenerationRequest, GenerationResult};
use crate::Error;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Canned results for exercising front-ends without a network.
pub struct MockImageGenerationClient {
    responses: Arc<Mutex<Vec<GenerationResult>>>,
    requests: Arc<Mutex<Vec<GenerationRequest>>>,
}

impl MockImageGenerationClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_response(self, response: GenerationResult) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    pub fn with_failure(self, error: Error) -> Self {
        self.with_response(GenerationResult::failure(&error))
    }

    pub fn get_call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<GenerationRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    fn default_result(request: &GenerationRequest) -> GenerationResult {
        let image = DecodedImage {
            image: image::DynamicImage::new_rgba8(1, 1),
            declared_mime: Some("image/png".to_string()),
            detected_mime: "image/png",
        };
        GenerationResult::success(
            image,
            Some(format!("mock image for: {}", request.prompt)),
            serde_json::json!({ "mock": true, "model": request.model }),
        )
    }
}

impl Default for MockImageGenerationClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageGenerationService for MockImageGenerationClient {
    async fn generate(&self, request: &GenerationRequest) -> GenerationResult {
        let mut requests = self.requests.lock().unwrap();
        requests.push(request.clone());
        let call = requests.len();

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Self::default_result(request)
        } else {
            responses[(call - 1) % responses.len()].clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;

    #[tokio::test]
    async fn test_mock_default_result() {
        let client = MockImageGenerationClient::new();
        let result = client
            .generate(&GenerationRequest::new("key", "a castle"))
            .await;

        assert!(result.is_success());
        assert!(result.status_message.contains("a castle"));
        assert!(result.image.is_some());
    }

    #[tokio::test]
    async fn test_mock_cycles_responses() {
        let client = MockImageGenerationClient::new()
            .with_failure(Error::MissingPrompt)
            .with_failure(Error::Decode("bad".to_string()));
        let request = GenerationRequest::new("key", "x");

        assert_eq!(
            client.generate(&request).await.failure,
            Some(FailureKind::MissingPrompt)
        );
        assert_eq!(
            client.generate(&request).await.failure,
            Some(FailureKind::DecodeError)
        );
        // Should cycle back
        assert_eq!(
            client.generate(&request).await.failure,
            Some(FailureKind::MissingPrompt)
        );
    }

    #[tokio::test]
    async fn test_mock_records_requests() {
        let client = MockImageGenerationClient::new();
        assert_eq!(client.get_call_count(), 0);

        client
            .generate(&GenerationRequest::new("key", "first").with_model("openai/gpt-5-image"))
            .await;
        assert_eq!(client.get_call_count(), 1);
        assert_eq!(
            client.last_request().unwrap().model,
            "openai/gpt-5-image"
        );
    }
}
