//! Gemini client for the VeoPrompt structured-generation contract.
//!
//! Exactly two request kinds exist: generate a full [`PromptDocument`] from a
//! free-text concept (schema-constrained JSON response), and generate a
//! single replacement string for one field given the overall concept. No
//! retry policy; a failed call surfaces as a single [`GeminiError`].
//!
//! [`PromptDocument`]: veoprompt_models::PromptDocument

mod client;
mod directives;
mod error;

pub use client::{GeminiClient, GEMINI_API_BASE};
pub use directives::{document_directive, suggestion_directive};
pub use error::{GeminiError, GeminiResult};
