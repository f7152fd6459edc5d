//! Client error types.

use reqwest::StatusCode;
use thiserror::Error;

pub type GeminiResult<T> = Result<T, GeminiError>;

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("GEMINI_API_KEY not set")]
    MissingApiKey,

    #[error("Gemini API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Gemini API returned {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("No content in Gemini response")]
    EmptyResponse,

    #[error("Response is not a valid prompt document: {0}")]
    InvalidDocument(#[from] serde_json::Error),
}
