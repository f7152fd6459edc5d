//! Raw JSON view of the prompt document.
//!
//! The view renders the current document as pretty-printed JSON and accepts
//! manual edits back. A failed parse never touches the document: the typed
//! text stays visible as-is and the store keeps its prior value.

use tracing::debug;

use veoprompt_models::PromptDocument;

/// Result of a manual text edit.
#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    /// The text parsed into a complete document; the caller should replace
    /// the store value with it.
    Applied(PromptDocument),
    /// The text is not a valid document. Nothing changed.
    Rejected,
}

/// Editable textual serialization of the current document.
#[derive(Debug, Default)]
pub struct RawTextView {
    text: String,
}

impl RawTextView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text, canonical or as last typed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Canonical serialization of a document.
    pub fn render(document: &PromptDocument) -> String {
        serde_json::to_string_pretty(document).unwrap_or_default()
    }

    /// Re-render from the store value. An absent document renders empty text.
    /// This direction never fails.
    pub fn refresh(&mut self, document: Option<&PromptDocument>) {
        self.text = match document {
            Some(doc) => Self::render(doc),
            None => String::new(),
        };
    }

    /// Accept a manual edit.
    ///
    /// The typed text is kept verbatim either way. Only a successful parse
    /// yields a document for the caller to apply.
    pub fn edit(&mut self, text: impl Into<String>) -> EditOutcome {
        self.text = text.into();
        match serde_json::from_str::<PromptDocument>(&self.text) {
            Ok(document) => EditOutcome::Applied(document),
            Err(e) => {
                debug!(error = %e, "Ignoring malformed document edit");
                EditOutcome::Rejected
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use veoprompt_models::{Character, Dialogue};

    use super::*;

    fn sample_document() -> PromptDocument {
        let mut doc = PromptDocument::empty();
        doc.scene_settings.overall_situation = "A chase across rooftops".to_string();
        doc.scene_settings.background_details.location = "Rain-slicked city".to_string();
        doc.scene_settings
            .background_details
            .elements
            .push("neon signs".to_string());
        doc.characters.push(Character::empty());
        doc.characters[0].name = "hero".to_string();
        doc.audio.sfx.push("thunder".to_string());
        doc.audio.dialogue = Some(Dialogue {
            speaker: "hero".to_string(),
            line: "Almost there.".to_string(),
        });
        doc
    }

    #[test]
    fn test_round_trip() {
        let doc = sample_document();
        let mut view = RawTextView::new();
        view.refresh(Some(&doc));
        let rendered = view.text().to_string();
        assert_eq!(view.edit(rendered), EditOutcome::Applied(doc));
    }

    #[test]
    fn test_empty_document_round_trip() {
        let doc = PromptDocument::empty();
        let mut view = RawTextView::new();
        view.refresh(Some(&doc));

        let parsed: PromptDocument = serde_json::from_str(view.text()).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn test_absent_document_renders_empty() {
        let mut view = RawTextView::new();
        view.refresh(Some(&PromptDocument::empty()));
        view.refresh(None);
        assert_eq!(view.text(), "");
    }

    #[test]
    fn test_malformed_edit_keeps_text_verbatim() {
        let mut view = RawTextView::new();
        view.refresh(Some(&PromptDocument::empty()));

        let outcome = view.edit("{not valid json");
        assert_eq!(outcome, EditOutcome::Rejected);
        assert_eq!(view.text(), "{not valid json");
    }

    #[test]
    fn test_edit_rejects_schema_invalid_json() {
        let mut view = RawTextView::new();
        // Valid JSON, but not a complete document
        let outcome = view.edit("{\"characters\": []}");
        assert_eq!(outcome, EditOutcome::Rejected);
    }

    #[test]
    fn test_parse_equivalent_reserialization() {
        // Whitespace and key order may differ from what was typed, but the
        // parsed value must survive re-rendering.
        let typed = "{\"audio\":{\"sfx\":[],\"music\":\"\"},\"characters\":[],\
                     \"camera_movement\":{\"type\":\"\",\"description\":\"\"},\
                     \"scene_settings\":{\"overall_situation\":\"\",\
                     \"background_details\":{\"location\":\"\",\"elements\":[]},\
                     \"video_style\":{\"genre\":\"\",\"look_and_feel\":\"\",\
                     \"color_palette\":\"\",\"lighting\":\"\"}}}";
        let mut view = RawTextView::new();
        let EditOutcome::Applied(doc) = view.edit(typed) else {
            panic!("expected parse to succeed");
        };
        let rendered = RawTextView::render(&doc);
        let reparsed: PromptDocument = serde_json::from_str(&rendered).unwrap();
        assert_eq!(reparsed, doc);
    }
}
