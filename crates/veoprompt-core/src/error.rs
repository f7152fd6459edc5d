//! Core error types.

use thiserror::Error;

use veoprompt_gemini::GeminiError;
use veoprompt_models::{FieldPathError, Language};

use crate::i18n::translations;

/// Errors from prompt store mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("No document present")]
    DocumentAbsent,

    #[error(transparent)]
    Field(#[from] FieldPathError),
}

/// Errors from the credential file.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Credential store error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors surfaced by session operations.
///
/// Malformed raw-text edits are deliberately not represented here: they are
/// silent at the data layer (spec'd as `MalformedEdit`) and reported only as
/// a rejected edit outcome.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("AI not initialized")]
    NotInitialized,

    #[error("Scene description is empty")]
    EmptyDescription,

    #[error(transparent)]
    Generation(#[from] GeminiError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Credential(#[from] CredentialError),
}

impl SessionError {
    /// Single user-facing message for this error in the given language.
    ///
    /// Underlying causes are logged, never shown.
    pub fn localized_message(&self, language: Language) -> &'static str {
        let t = translations(language);
        match self {
            SessionError::NotInitialized => t.error_not_initialized,
            SessionError::EmptyDescription => t.describe_scene,
            _ => t.error_generic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localized_messages() {
        let err = SessionError::NotInitialized;
        assert!(err.localized_message(Language::En).contains("API key"));
        assert!(err
            .localized_message(Language::Ko)
            .contains("API 키"));

        let err = SessionError::Store(StoreError::DocumentAbsent);
        assert_eq!(
            err.localized_message(Language::En),
            translations(Language::En).error_generic
        );
    }
}
