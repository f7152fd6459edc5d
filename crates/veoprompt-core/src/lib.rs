//! Core state management for VeoPrompt.
//!
//! This crate owns the pieces between the Gemini client and a UI:
//! - [`PromptStore`]: the single mutable cell holding the current document
//! - [`RawTextView`]: the editable JSON serialization of that document
//! - [`PromptSession`]: the composition root wiring store, client,
//!   credentials and localization together
//!
//! Nothing here is fatal: every failure leaves the prior state intact.

pub mod credentials;
pub mod error;
pub mod i18n;
pub mod raw_text;
pub mod session;
pub mod store;

pub use credentials::CredentialFile;
pub use error::{CredentialError, SessionError, StoreError};
pub use i18n::{field_label, options, translations, SuggestionOptions, Translations};
pub use raw_text::{EditOutcome, RawTextView};
pub use session::{PromptSession, SessionConfig};
pub use store::PromptStore;
