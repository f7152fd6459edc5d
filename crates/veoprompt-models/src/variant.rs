//! Selectable Gemini model variants.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Model variant used for generation requests.
///
/// Configuration only: the two variants trade speed against quality and do
/// not alter the data model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum ModelVariant {
    /// Faster, cheaper variant.
    #[default]
    Flash,
    /// Higher-quality variant.
    Pro,
}

impl ModelVariant {
    /// Model identifier as used in the Gemini API path.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelVariant::Flash => "gemini-2.5-flash",
            ModelVariant::Pro => "gemini-2.5-pro",
        }
    }
}

impl fmt::Display for ModelVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ModelVariant {
    type Err = ModelVariantParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "flash" | "gemini-2.5-flash" => Ok(ModelVariant::Flash),
            "pro" | "gemini-2.5-pro" => Ok(ModelVariant::Pro),
            _ => Err(ModelVariantParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown model variant: {0}")]
pub struct ModelVariantParseError(String);
