//! Shared data models for VeoPrompt.
//!
//! This crate provides Serde-serializable types for:
//! - The structured video prompt document and its sections
//! - Typed field paths for single-leaf reads and writes
//! - The Gemini response schema used for constrained generation
//! - Language and model variant selectors

pub mod field_path;
pub mod language;
pub mod prompt;
pub mod schema;
pub mod variant;

// Re-export common types
pub use field_path::{
    AudioField, CameraField, CharacterField, FieldPath, FieldPathError, SceneField,
};
pub use language::{Language, LanguageParseError};
pub use prompt::{
    AppearanceAndAction, Audio, BackgroundDetails, CameraMovement, Character, Dialogue,
    PromptDocument, SceneSettings, VideoStyle,
};
pub use schema::response_schema;
pub use variant::{ModelVariant, ModelVariantParseError};
