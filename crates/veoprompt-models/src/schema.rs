//! Gemini response schema for constrained document generation.
//!
//! The schema is sent verbatim as the `responseSchema` of a `generateContent`
//! request so the model's output parses directly into a
//! [`PromptDocument`](crate::PromptDocument). Gemini expects its own OpenAPI
//! subset rather than JSON Schema, so the shape is declared by hand here; a
//! test keeps the property names in lockstep with the schemars-derived schema
//! of the Rust types.

use serde_json::{json, Value};

/// Build the `responseSchema` payload for structured prompt generation.
///
/// `dialogue` is the only nested object that is not required; every sequence
/// must be present even when empty.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "scene_settings": {
                "type": "OBJECT",
                "properties": {
                    "overall_situation": {
                        "type": "STRING",
                        "description": "A brief, evocative summary of the entire scene's context and action."
                    },
                    "background_details": {
                        "type": "OBJECT",
                        "properties": {
                            "location": {
                                "type": "STRING",
                                "description": "The specific location of the scene, e.g., 'A bioluminescent forest at midnight'."
                            },
                            "elements": {
                                "type": "ARRAY",
                                "items": {"type": "STRING"},
                                "description": "Key inanimate objects or environmental features in the background."
                            }
                        },
                        "required": ["location", "elements"]
                    },
                    "video_style": {
                        "type": "OBJECT",
                        "properties": {
                            "genre": {
                                "type": "STRING",
                                "description": "The cinematic genre or style, e.g., 'Sci-Fi Noir', 'Cyberpunk', 'Cartoon Style'."
                            },
                            "look_and_feel": {
                                "type": "STRING",
                                "description": "The overall aesthetic and mood, e.g., 'Dreamy and surreal with high contrast'."
                            },
                            "color_palette": {
                                "type": "STRING",
                                "description": "The dominant colors of the scene, e.g., 'Neon pinks, electric blues, and deep purples'."
                            },
                            "lighting": {
                                "type": "STRING",
                                "description": "Description of the scene's lighting, e.g., 'Soft, diffused morning light streaming through a window'."
                            }
                        },
                        "required": ["genre", "look_and_feel", "color_palette", "lighting"]
                    }
                },
                "required": ["overall_situation", "background_details", "video_style"]
            },
            "characters": {
                "type": "ARRAY",
                "description": "A list of characters present in the scene.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": {
                            "type": "STRING",
                            "description": "The character's name or identifier, e.g., 'hero', 'villain', 'robot_sidekick'."
                        },
                        "appearance_and_action": {
                            "type": "OBJECT",
                            "properties": {
                                "appearance": {
                                    "type": "STRING",
                                    "description": "Detailed description of the character's physical appearance and clothing."
                                },
                                "action": {
                                    "type": "STRING",
                                    "description": "What the character is actively doing in the scene."
                                }
                            },
                            "required": ["appearance", "action"]
                        }
                    },
                    "required": ["name", "appearance_and_action"]
                }
            },
            "camera_movement": {
                "type": "OBJECT",
                "properties": {
                    "type": {
                        "type": "STRING",
                        "description": "The type of camera shot, e.g., 'Dolly Zoom', 'Tracking Shot', 'Dutch Angle'."
                    },
                    "description": {
                        "type": "STRING",
                        "description": "A detailed description of the camera's movement and focus."
                    }
                },
                "required": ["type", "description"]
            },
            "audio": {
                "type": "OBJECT",
                "properties": {
                    "music": {
                        "type": "STRING",
                        "description": "Description of the background music or score."
                    },
                    "sfx": {
                        "type": "ARRAY",
                        "items": {"type": "STRING"},
                        "description": "A list of key sound effects."
                    },
                    "dialogue": {
                        "type": "OBJECT",
                        "description": "Spoken lines in the scene. Can be empty if no dialogue.",
                        "properties": {
                            "speaker": {
                                "type": "STRING",
                                "description": "The name of the character who is speaking (must match a name from the characters list)."
                            },
                            "line": {
                                "type": "STRING",
                                "description": "The dialogue line."
                            }
                        }
                    }
                },
                "required": ["music", "sfx"]
            }
        },
        "required": ["scene_settings", "characters", "camera_movement", "audio"]
    })
}
