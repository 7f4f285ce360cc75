//! Static lookup tables shown by the front-end: suggested models, their
//! price/context notes, and the supported aspect ratios.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_MODEL: &str = "google/gemini-2.5-flash-image";

/// Suggested image-capable models, cheapest first. The list is advisory:
/// any model id is accepted.
pub const DEFAULT_MODELS: &[&str] = &[
    "google/gemini-2.5-flash-image",
    "google/gemini-3-pro-image-preview",
    "openai/gpt-5-image-mini",
    "google/gemini-2.5-flash-image-preview",
    "black-forest-labs/flux.2-pro",
    "openai/gpt-5-image",
    "black-forest-labs/flux.2-flex",
];

const MODEL_INFO: &[(&str, &str)] = &[
    (
        "google/gemini-2.5-flash-image",
        "$0.30/$2.50 per 1M tokens | Context: 32K",
    ),
    (
        "google/gemini-3-pro-image-preview",
        "$2/$12 per 1M tokens | Context: 65K",
    ),
    (
        "openai/gpt-5-image-mini",
        "$2.50/$2 per 1M tokens | Context: 400K",
    ),
    (
        "google/gemini-2.5-flash-image-preview",
        "Preview Model | Context: TBD",
    ),
    (
        "black-forest-labs/flux.2-pro",
        "$3.66/$3.66 per 1M tokens | Context: 46K",
    ),
    ("openai/gpt-5-image", "$10/$10 per 1M tokens | Context: 400K"),
    (
        "black-forest-labs/flux.2-flex",
        "$14.64/$14.64 per 1M tokens | Context: 67K",
    ),
];

pub const CUSTOM_MODEL_INFO: &str = "Custom model";

pub const EXAMPLE_PROMPTS: &str = include_str!("../data/example_prompts.txt");

/// Description for `model`, falling back to [`CUSTOM_MODEL_INFO`] for
/// unlisted ids.
pub fn model_info(model: &str) -> &'static str {
    MODEL_INFO
        .iter()
        .find(|(id, _)| *id == model)
        .map(|(_, info)| *info)
        .unwrap_or(CUSTOM_MODEL_INFO)
}

pub fn example_prompts() -> impl Iterator<Item = &'static str> {
    EXAMPLE_PROMPTS
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
}

/// Width:height hint. Only Gemini-family models honor it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AspectRatio {
    #[default]
    Square,
    Portrait2x3,
    Landscape3x2,
    Portrait3x4,
    Landscape4x3,
    Portrait4x5,
    Landscape5x4,
    Portrait9x16,
    Landscape16x9,
    Ultrawide21x9,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 10] = [
        AspectRatio::Square,
        AspectRatio::Portrait2x3,
        AspectRatio::Landscape3x2,
        AspectRatio::Portrait3x4,
        AspectRatio::Landscape4x3,
        AspectRatio::Portrait4x5,
        AspectRatio::Landscape5x4,
        AspectRatio::Portrait9x16,
        AspectRatio::Landscape16x9,
        AspectRatio::Ultrawide21x9,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Portrait2x3 => "2:3",
            AspectRatio::Landscape3x2 => "3:2",
            AspectRatio::Portrait3x4 => "3:4",
            AspectRatio::Landscape4x3 => "4:3",
            AspectRatio::Portrait4x5 => "4:5",
            AspectRatio::Landscape5x4 => "5:4",
            AspectRatio::Portrait9x16 => "9:16",
            AspectRatio::Landscape16x9 => "16:9",
            AspectRatio::Ultrawide21x9 => "21:9",
        }
    }

    pub fn is_default(&self) -> bool {
        *self == AspectRatio::Square
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AspectRatio {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        AspectRatio::ALL
            .into_iter()
            .find(|ratio| ratio.as_str() == s)
            .ok_or_else(|| {
                Error::Config(format!(
                    "Unsupported aspect ratio '{}'. Expected one of: {}",
                    s,
                    supported_ratios()
                ))
            })
    }
}

impl TryFrom<String> for AspectRatio {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<AspectRatio> for String {
    fn from(ratio: AspectRatio) -> Self {
        ratio.as_str().to_string()
    }
}

pub fn supported_ratios() -> String {
    AspectRatio::ALL
        .iter()
        .map(AspectRatio::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
