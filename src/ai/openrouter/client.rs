use super::request::PreparedRequest;
use crate::Result;
use reqwest::Client;
use std::time::Duration;

/// Thin transport over `reqwest`: sends a prepared request and hands back
/// the status and body untouched, leaving interpretation to the decoder.
pub struct OpenRouterHttpClient {
    client: Client,
    timeout: Option<Duration>,
}

impl OpenRouterHttpClient {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self::new_with_client(Client::new(), timeout)
    }

    pub fn new_with_client(client: Client, timeout: Option<Duration>) -> Self {
        Self { client, timeout }
    }

    /// POST the request. Transport failures (connect errors, timeouts, body
    /// read errors) surface as [`crate::Error::System`].
    pub async fn send(&self, request: PreparedRequest) -> Result<(u16, String)> {
        tracing::debug!(
            "Sending image generation request to {} (model: {})",
            request.url,
            request.body.model
        );

        let mut builder = self
            .client
            .post(&request.url)
            .headers(request.headers)
            .json(&request.body);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!("Failed to send request to {}: {}", request.url, e);
            e
        })?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        tracing::debug!("Provider responded with status {}", status);

        Ok((status, body))
    }
}
