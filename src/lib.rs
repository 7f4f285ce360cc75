//! Command-line image generator for OpenRouter-compatible multimodal
//! chat-completion APIs.
//!
//! A prompt is turned into a chat-completion request asking for image and
//! text output; the first returned image is decoded from its Base64 data
//! URL and reported together with the provider's text and raw JSON.

pub mod ai;
pub mod app;
pub mod catalog;
pub mod error;
pub mod image;
pub mod models;

pub use error::{Error, FailureKind, Result};
