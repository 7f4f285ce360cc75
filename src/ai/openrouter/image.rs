use super::client::OpenRouterHttpClient;
use super::request::build_request;
use super::response::decode_response;
use crate::ai::ImageGenerationService;
use crate::models::{GenerationRequest, GenerationResult};
use async_trait::async_trait;
use std::time::Duration;

/// Image generation through an OpenRouter-compatible chat-completions
/// endpoint.
pub struct OpenRouterImageClient {
    http: OpenRouterHttpClient,
}

impl OpenRouterImageClient {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self::new_with_client(reqwest::Client::new(), timeout)
    }

    pub fn new_with_client(client: reqwest::Client, timeout: Option<Duration>) -> Self {
        Self {
            http: OpenRouterHttpClient::new_with_client(client, timeout),
        }
    }
}

#[async_trait]
impl ImageGenerationService for OpenRouterImageClient {
    async fn generate(&self, request: &GenerationRequest) -> GenerationResult {
        let prepared = match build_request(request) {
            Ok(prepared) => prepared,
            Err(e) => {
                tracing::warn!("Rejected generation request: {}", e);
                return GenerationResult::failure(&e);
            }
        };

        match self.http.send(prepared).await {
            Ok((status, body)) => decode_response(status, &body),
            Err(e) => GenerationResult::failure(&e),
        }
    }
}
