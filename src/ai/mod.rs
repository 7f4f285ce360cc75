//! Provider integration for image generation
//!
//! [`ImageGenerationService`] is the seam between the front-end and a
//! provider: one request in, one fully-classified result out.

pub mod mock;
pub mod openrouter;

pub use mock::MockImageGenerationClient;
pub use openrouter::OpenRouterImageClient;

use crate::models::{GenerationRequest, GenerationResult};
use async_trait::async_trait;

#[async_trait]
pub trait ImageGenerationService: Send + Sync {
    /// Run one generation. Never fails: every error is folded into the
    /// result's status message and failure kind.
    async fn generate(&self, request: &GenerationRequest) -> GenerationResult;
}
