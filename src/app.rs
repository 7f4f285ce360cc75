//! Front-end orchestration: turns configuration plus a prompt into a
//! generation request, runs it, and renders the three outputs (image
//! summary, status text, raw JSON) for the terminal.

use crate::ai::{ImageGenerationService, OpenRouterImageClient};
use crate::catalog::{self, AspectRatio};
use crate::models::{Config, GenerationRequest, GenerationResult};
use std::fmt::Write as _;
use tracing::{info, warn};

pub struct App {
    service: Box<dyn ImageGenerationService>,
    config: Config,
}

impl App {
    /// Build an app talking to the configured endpoint.
    pub fn new(config: Config) -> Self {
        if config.timeout.is_none() {
            info!("No request timeout configured; a stalled provider blocks until it answers");
        }
        let service = Box::new(OpenRouterImageClient::new(config.timeout));
        Self::with_service(service, config)
    }

    /// Build an app from a concrete service, primarily for tests.
    pub fn with_service(service: Box<dyn ImageGenerationService>, config: Config) -> Self {
        Self { service, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Request for `prompt` using the configured credential, endpoint, model
    /// and aspect ratio. A missing key becomes an empty one so validation
    /// reports it.
    pub fn request_for(&self, prompt: &str) -> GenerationRequest {
        GenerationRequest {
            api_key: self.config.api_key.clone().unwrap_or_default(),
            endpoint: self.config.endpoint.clone(),
            model: self.config.model.clone(),
            prompt: prompt.to_string(),
            aspect_ratio: Some(self.config.aspect_ratio),
        }
    }

    pub async fn generate(&self, prompt: &str) -> GenerationResult {
        let request = self.request_for(prompt);
        info!(
            "Generating image with model {} (aspect ratio {})",
            request.model, self.config.aspect_ratio
        );

        let result = self.service.generate(&request).await;
        match result.failure {
            None => info!("Generation succeeded"),
            Some(kind) => warn!("Generation failed ({:?})", kind),
        }
        result
    }
}

/// Terminal rendering of a result: status line, model note, image summary
/// and optionally the raw JSON.
pub fn render_result(result: &GenerationResult, model: &str, show_raw: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Status: {}", result.status_message);
    let _ = writeln!(out, "Model:  {} ({})", model, catalog::model_info(model));

    match &result.image {
        Some(image) => {
            let _ = writeln!(
                out,
                "Image:  {}x{} {}",
                image.width(),
                image.height(),
                image.detected_mime
            );
        }
        None => {
            let _ = writeln!(out, "Image:  none");
        }
    }

    if result.failure.is_some() {
        if let Some(text) = &result.text {
            let _ = writeln!(out, "Text:   {}", text);
        }
    }

    if show_raw {
        match &result.raw_response {
            Some(raw) => {
                let pretty = serde_json::to_string_pretty(raw).unwrap_or_else(|_| raw.to_string());
                let _ = writeln!(out, "Raw response:\n{}", pretty);
            }
            None => {
                let _ = writeln!(out, "Raw response: none");
            }
        }
    }

    out
}

pub fn render_models() -> String {
    let mut out = String::from("Suggested models (any model id is accepted):\n");
    for model in catalog::DEFAULT_MODELS {
        let _ = writeln!(out, "  {:<40} {}", model, catalog::model_info(model));
    }
    let _ = writeln!(
        out,
        "\nAspect ratios (Gemini models only): {}",
        catalog::supported_ratios()
    );
    out
}

pub fn render_examples() -> String {
    catalog::example_prompts()
        .map(|prompt| format!("  {}\n", prompt))
        .collect()
}

/// Aspect ratio the configuration will actually send, for display.
pub fn effective_aspect_ratio(config: &Config) -> Option<AspectRatio> {
    (!config.aspect_ratio.is_default()).then_some(config.aspect_ratio)
}
