//! Structured video prompt document.
//!
//! The document is the single source of truth shared by the field editors and
//! the raw JSON view. It either exists in full or not at all; every field
//! below is required except `Audio::dialogue`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The full structured prompt describing one video scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PromptDocument {
    pub scene_settings: SceneSettings,

    /// Characters present in the scene (may be empty).
    pub characters: Vec<Character>,

    pub camera_movement: CameraMovement,

    pub audio: Audio,
}

/// Overall scene context, background and visual style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SceneSettings {
    /// Brief, evocative summary of the entire scene's context and action.
    pub overall_situation: String,

    pub background_details: BackgroundDetails,

    pub video_style: VideoStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BackgroundDetails {
    /// Specific location of the scene, e.g. "A bioluminescent forest at midnight".
    pub location: String,

    /// Key inanimate objects or environmental features in the background.
    /// Order is meaningful for display and editing only.
    pub elements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VideoStyle {
    /// Cinematic genre or style. Free text; the UI offers a non-binding
    /// suggestion list, but any value is valid.
    pub genre: String,

    /// Overall aesthetic and mood, e.g. "Dreamy and surreal with high contrast".
    pub look_and_feel: String,

    /// Dominant colors of the scene.
    pub color_palette: String,

    /// Description of the scene's lighting.
    pub lighting: String,
}

/// One character in the scene.
///
/// `name` doubles as the (non-enforced) join key for the dialogue speaker.
/// Duplicate names are structurally allowed; speaker lookup is then ambiguous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Character {
    /// Name or identifier, e.g. "hero", "robot_sidekick".
    pub name: String,

    pub appearance_and_action: AppearanceAndAction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AppearanceAndAction {
    /// Physical appearance and clothing.
    pub appearance: String,

    /// What the character is actively doing in the scene.
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CameraMovement {
    /// Type of camera shot. Free text with a non-binding suggestion list.
    #[serde(rename = "type")]
    pub kind: String,

    /// Detailed description of the camera's movement and focus.
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Audio {
    /// Background music or score.
    pub music: String,

    /// Key sound effects, in display order.
    pub sfx: Vec<String>,

    /// Spoken lines. Absent when the scene has no dialogue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialogue: Option<Dialogue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Dialogue {
    /// Speaker name, expected (but not enforced) to match a character name.
    pub speaker: String,

    pub line: String,
}

impl PromptDocument {
    /// Minimal schema-valid document: every string empty, every sequence
    /// empty, no dialogue.
    pub fn empty() -> Self {
        Self {
            scene_settings: SceneSettings {
                overall_situation: String::new(),
                background_details: BackgroundDetails {
                    location: String::new(),
                    elements: Vec::new(),
                },
                video_style: VideoStyle {
                    genre: String::new(),
                    look_and_feel: String::new(),
                    color_palette: String::new(),
                    lighting: String::new(),
                },
            },
            characters: Vec::new(),
            camera_movement: CameraMovement {
                kind: String::new(),
                description: String::new(),
            },
            audio: Audio {
                music: String::new(),
                sfx: Vec::new(),
                dialogue: None,
            },
        }
    }
}

impl Character {
    /// Schema-valid default used when an editor adds a new character.
    pub fn empty() -> Self {
        Self {
            name: String::new(),
            appearance_and_action: AppearanceAndAction {
                appearance: String::new(),
                action: String::new(),
            },
        }
    }
}

impl Dialogue {
    /// Schema-valid default created on first write to a dialogue leaf.
    pub fn empty() -> Self {
        Self {
            speaker: String::new(),
            line: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_shape() {
        let doc = PromptDocument::empty();
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "scene_settings": {
                    "overall_situation": "",
                    "background_details": {"location": "", "elements": []},
                    "video_style": {
                        "genre": "",
                        "look_and_feel": "",
                        "color_palette": "",
                        "lighting": ""
                    }
                },
                "characters": [],
                "camera_movement": {"type": "", "description": ""},
                "audio": {"music": "", "sfx": []}
            })
        );
    }

    #[test]
    fn test_dialogue_omitted_when_absent() {
        let doc = PromptDocument::empty();
        let text = serde_json::to_string(&doc).unwrap();
        assert!(!text.contains("dialogue"));
    }

    #[test]
    fn test_empty_character_serialization() {
        let chr = Character::empty();
        let value = serde_json::to_value(&chr).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "",
                "appearance_and_action": {"appearance": "", "action": ""}
            })
        );
    }

    #[test]
    fn test_camera_type_field_name() {
        let doc = PromptDocument::empty();
        let value = serde_json::to_value(&doc).unwrap();
        assert!(value["camera_movement"].get("type").is_some());
        assert!(value["camera_movement"].get("kind").is_none());
    }

    #[test]
    fn test_missing_required_field_rejected() {
        // camera_movement.description missing
        let payload = serde_json::json!({
            "scene_settings": {
                "overall_situation": "",
                "background_details": {"location": "", "elements": []},
                "video_style": {
                    "genre": "",
                    "look_and_feel": "",
                    "color_palette": "",
                    "lighting": ""
                }
            },
            "characters": [],
            "camera_movement": {"type": ""},
            "audio": {"music": "", "sfx": []}
        });
        assert!(serde_json::from_value::<PromptDocument>(payload).is_err());
    }
}
