//! Typed addressing of editable leaves inside a [`PromptDocument`].
//!
//! Editors and suggestion requests identify the leaf they act on with a
//! [`FieldPath`] variant instead of an ad hoc string key, so per-field busy
//! state and merges cannot collide on a typo.

use std::fmt;

use thiserror::Error;

use crate::prompt::{Character, Dialogue, PromptDocument};

/// Addressable text leaf within a [`PromptDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldPath {
    Scene(SceneField),
    /// Field of the character at the given index.
    Character(usize, CharacterField),
    Camera(CameraField),
    Audio(AudioField),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneField {
    OverallSituation,
    Location,
    /// Background element at the given index.
    Element(usize),
    Genre,
    LookAndFeel,
    ColorPalette,
    Lighting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterField {
    Name,
    Appearance,
    Action,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraField {
    Kind,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioField {
    Music,
    /// Sound effect at the given index.
    Sfx(usize),
    DialogueSpeaker,
    DialogueLine,
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::Scene(field) => match field {
                SceneField::OverallSituation => write!(f, "scene_settings.overall_situation"),
                SceneField::Location => {
                    write!(f, "scene_settings.background_details.location")
                }
                SceneField::Element(i) => {
                    write!(f, "scene_settings.background_details.elements.{}", i)
                }
                SceneField::Genre => write!(f, "scene_settings.video_style.genre"),
                SceneField::LookAndFeel => write!(f, "scene_settings.video_style.look_and_feel"),
                SceneField::ColorPalette => {
                    write!(f, "scene_settings.video_style.color_palette")
                }
                SceneField::Lighting => write!(f, "scene_settings.video_style.lighting"),
            },
            FieldPath::Character(i, field) => match field {
                CharacterField::Name => write!(f, "characters.{}.name", i),
                CharacterField::Appearance => {
                    write!(f, "characters.{}.appearance_and_action.appearance", i)
                }
                CharacterField::Action => {
                    write!(f, "characters.{}.appearance_and_action.action", i)
                }
            },
            FieldPath::Camera(field) => match field {
                CameraField::Kind => write!(f, "camera_movement.type"),
                CameraField::Description => write!(f, "camera_movement.description"),
            },
            FieldPath::Audio(field) => match field {
                AudioField::Music => write!(f, "audio.music"),
                AudioField::Sfx(i) => write!(f, "audio.sfx.{}", i),
                AudioField::DialogueSpeaker => write!(f, "audio.dialogue.speaker"),
                AudioField::DialogueLine => write!(f, "audio.dialogue.line"),
            },
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldPathError {
    #[error("No character at index {0}")]
    CharacterIndex(usize),

    #[error("No background element at index {0}")]
    ElementIndex(usize),

    #[error("No sound effect at index {0}")]
    SfxIndex(usize),
}

impl PromptDocument {
    /// Read the leaf at `path`.
    ///
    /// Returns `None` for out-of-range sequence indices and for dialogue
    /// leaves when the document has no dialogue.
    pub fn get_field(&self, path: FieldPath) -> Option<&str> {
        match path {
            FieldPath::Scene(field) => {
                let scene = &self.scene_settings;
                match field {
                    SceneField::OverallSituation => Some(scene.overall_situation.as_str()),
                    SceneField::Location => Some(scene.background_details.location.as_str()),
                    SceneField::Element(i) => {
                        scene.background_details.elements.get(i).map(String::as_str)
                    }
                    SceneField::Genre => Some(scene.video_style.genre.as_str()),
                    SceneField::LookAndFeel => Some(scene.video_style.look_and_feel.as_str()),
                    SceneField::ColorPalette => Some(scene.video_style.color_palette.as_str()),
                    SceneField::Lighting => Some(scene.video_style.lighting.as_str()),
                }
            }
            FieldPath::Character(i, field) => {
                let character = self.characters.get(i)?;
                match field {
                    CharacterField::Name => Some(character.name.as_str()),
                    CharacterField::Appearance => {
                        Some(character.appearance_and_action.appearance.as_str())
                    }
                    CharacterField::Action => {
                        Some(character.appearance_and_action.action.as_str())
                    }
                }
            }
            FieldPath::Camera(field) => match field {
                CameraField::Kind => Some(self.camera_movement.kind.as_str()),
                CameraField::Description => Some(self.camera_movement.description.as_str()),
            },
            FieldPath::Audio(field) => match field {
                AudioField::Music => Some(self.audio.music.as_str()),
                AudioField::Sfx(i) => self.audio.sfx.get(i).map(String::as_str),
                AudioField::DialogueSpeaker => {
                    self.audio.dialogue.as_ref().map(|d| d.speaker.as_str())
                }
                AudioField::DialogueLine => {
                    self.audio.dialogue.as_ref().map(|d| d.line.as_str())
                }
            },
        }
    }

    /// Write the leaf at `path`, leaving every other field untouched.
    ///
    /// Writing a dialogue leaf on a document without dialogue first creates
    /// an empty, schema-valid `Dialogue`. Out-of-range sequence indices fail
    /// without modifying the document.
    pub fn set_field(
        &mut self,
        path: FieldPath,
        value: impl Into<String>,
    ) -> Result<(), FieldPathError> {
        let value = value.into();
        match path {
            FieldPath::Scene(field) => {
                let scene = &mut self.scene_settings;
                match field {
                    SceneField::OverallSituation => scene.overall_situation = value,
                    SceneField::Location => scene.background_details.location = value,
                    SceneField::Element(i) => {
                        let slot = scene
                            .background_details
                            .elements
                            .get_mut(i)
                            .ok_or(FieldPathError::ElementIndex(i))?;
                        *slot = value;
                    }
                    SceneField::Genre => scene.video_style.genre = value,
                    SceneField::LookAndFeel => scene.video_style.look_and_feel = value,
                    SceneField::ColorPalette => scene.video_style.color_palette = value,
                    SceneField::Lighting => scene.video_style.lighting = value,
                }
            }
            FieldPath::Character(i, field) => {
                let character = self
                    .characters
                    .get_mut(i)
                    .ok_or(FieldPathError::CharacterIndex(i))?;
                match field {
                    CharacterField::Name => character.name = value,
                    CharacterField::Appearance => {
                        character.appearance_and_action.appearance = value
                    }
                    CharacterField::Action => character.appearance_and_action.action = value,
                }
            }
            FieldPath::Camera(field) => match field {
                CameraField::Kind => self.camera_movement.kind = value,
                CameraField::Description => self.camera_movement.description = value,
            },
            FieldPath::Audio(field) => match field {
                AudioField::Music => self.audio.music = value,
                AudioField::Sfx(i) => {
                    let slot = self
                        .audio
                        .sfx
                        .get_mut(i)
                        .ok_or(FieldPathError::SfxIndex(i))?;
                    *slot = value;
                }
                AudioField::DialogueSpeaker => {
                    self.audio
                        .dialogue
                        .get_or_insert_with(Dialogue::empty)
                        .speaker = value;
                }
                AudioField::DialogueLine => {
                    self.audio.dialogue.get_or_insert_with(Dialogue::empty).line = value;
                }
            },
        }
        Ok(())
    }

    /// Append a schema-valid empty character.
    pub fn add_character(&mut self) {
        self.characters.push(Character::empty());
    }

    /// Remove the character at `index`, preserving the order of the rest.
    pub fn remove_character(&mut self, index: usize) -> Result<(), FieldPathError> {
        if index >= self.characters.len() {
            return Err(FieldPathError::CharacterIndex(index));
        }
        self.characters.remove(index);
        Ok(())
    }

    /// Append an empty background element.
    pub fn add_element(&mut self) {
        self.scene_settings
            .background_details
            .elements
            .push(String::new());
    }

    /// Remove the background element at `index`.
    pub fn remove_element(&mut self, index: usize) -> Result<(), FieldPathError> {
        let elements = &mut self.scene_settings.background_details.elements;
        if index >= elements.len() {
            return Err(FieldPathError::ElementIndex(index));
        }
        elements.remove(index);
        Ok(())
    }

    /// Append an empty sound effect entry.
    pub fn add_sfx(&mut self) {
        self.audio.sfx.push(String::new());
    }

    /// Remove the sound effect at `index`.
    pub fn remove_sfx(&mut self, index: usize) -> Result<(), FieldPathError> {
        if index >= self.audio.sfx.len() {
            return Err(FieldPathError::SfxIndex(index));
        }
        self.audio.sfx.remove(index);
        Ok(())
    }
}
