//! Prompt data store.
//!
//! A single mutable cell holding the current document (or absence), with
//! change broadcast to subscribers over a `tokio::sync::watch` channel.
//! Mutations are synchronous; a failed mutation leaves the cell untouched and
//! does not notify.

use tokio::sync::watch;
use tracing::debug;

use veoprompt_models::{FieldPath, FieldPathError, PromptDocument};

use crate::error::StoreError;

/// In-memory store for the current [`PromptDocument`].
pub struct PromptStore {
    cell: watch::Sender<Option<PromptDocument>>,
}

impl PromptStore {
    /// Create an empty store (no document present).
    pub fn new() -> Self {
        let (cell, _) = watch::channel(None);
        Self { cell }
    }

    /// Subscribe to document changes.
    ///
    /// Receivers observe the value after each successful mutation.
    pub fn subscribe(&self) -> watch::Receiver<Option<PromptDocument>> {
        self.cell.subscribe()
    }

    /// Clone of the current value.
    pub fn snapshot(&self) -> Option<PromptDocument> {
        self.cell.borrow().clone()
    }

    pub fn is_present(&self) -> bool {
        self.cell.borrow().is_some()
    }

    /// Atomically swap in a whole document.
    pub fn replace(&self, document: PromptDocument) {
        self.cell.send_replace(Some(document));
        debug!("Prompt document replaced");
    }

    /// Set the store to absent.
    pub fn clear(&self) {
        self.cell.send_replace(None);
        debug!("Prompt document cleared");
    }

    /// Apply a single-leaf update without disturbing any other field.
    pub fn update(&self, path: FieldPath, value: impl Into<String>) -> Result<(), StoreError> {
        let value = value.into();
        self.mutate(move |doc| doc.set_field(path, value))
    }

    /// Append a schema-valid empty character.
    pub fn add_character(&self) -> Result<(), StoreError> {
        self.mutate(|doc| {
            doc.add_character();
            Ok(())
        })
    }

    pub fn remove_character(&self, index: usize) -> Result<(), StoreError> {
        self.mutate(move |doc| doc.remove_character(index))
    }

    /// Append an empty background element.
    pub fn add_element(&self) -> Result<(), StoreError> {
        self.mutate(|doc| {
            doc.add_element();
            Ok(())
        })
    }

    pub fn remove_element(&self, index: usize) -> Result<(), StoreError> {
        self.mutate(move |doc| doc.remove_element(index))
    }

    /// Append an empty sound effect entry.
    pub fn add_sfx(&self) -> Result<(), StoreError> {
        self.mutate(|doc| {
            doc.add_sfx();
            Ok(())
        })
    }

    pub fn remove_sfx(&self, index: usize) -> Result<(), StoreError> {
        self.mutate(move |doc| doc.remove_sfx(index))
    }

    /// Run one mutation against the current document.
    ///
    /// Subscribers are notified only when the closure succeeds; with no
    /// document present nothing runs and `DocumentAbsent` is returned.
    fn mutate<F>(&self, op: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut PromptDocument) -> Result<(), FieldPathError>,
    {
        let mut outcome = Err(StoreError::DocumentAbsent);
        self.cell.send_if_modified(|current| match current.as_mut() {
            None => false,
            Some(doc) => match op(doc) {
                Ok(()) => {
                    outcome = Ok(());
                    true
                }
                Err(e) => {
                    outcome = Err(StoreError::Field(e));
                    false
                }
            },
        });
        outcome
    }
}

impl Default for PromptStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use veoprompt_models::{AudioField, CharacterField, SceneField};

    use super::*;

    #[test]
    fn test_replace_and_snapshot() {
        let store = PromptStore::new();
        assert!(store.snapshot().is_none());
        store.replace(PromptDocument::empty());
        assert_eq!(store.snapshot(), Some(PromptDocument::empty()));
    }

    #[test]
    fn test_clear_sets_absent() {
        let store = PromptStore::new();
        store.replace(PromptDocument::empty());
        store.clear();
        assert!(store.snapshot().is_none());
    }

    #[test]
    fn test_update_without_document_fails_silently() {
        let store = PromptStore::new();
        let err = store
            .update(FieldPath::Scene(SceneField::Lighting), "dusk")
            .unwrap_err();
        assert_eq!(err, StoreError::DocumentAbsent);
        assert!(store.snapshot().is_none());
    }

    #[test]
    fn test_update_touches_single_leaf() {
        let store = PromptStore::new();
        store.replace(PromptDocument::empty());
        let before = store.snapshot().unwrap();

        store
            .update(FieldPath::Scene(SceneField::Lighting), "stormy night")
            .unwrap();

        let after = store.snapshot().unwrap();
        assert_eq!(after.scene_settings.video_style.lighting, "stormy night");
        assert_eq!(after.characters, before.characters);
        assert_eq!(after.audio, before.audio);
        assert_eq!(after.camera_movement, before.camera_movement);
        assert_eq!(
            after.scene_settings.overall_situation,
            before.scene_settings.overall_situation
        );
    }

    #[test]
    fn test_failed_update_leaves_value_and_does_not_notify() {
        let store = PromptStore::new();
        store.replace(PromptDocument::empty());
        let mut rx = store.subscribe();
        rx.borrow_and_update();

        let before = store.snapshot().unwrap();
        assert!(store
            .update(FieldPath::Character(5, CharacterField::Name), "x")
            .is_err());
        assert_eq!(store.snapshot().unwrap(), before);
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_successful_update_notifies_subscribers() {
        let store = PromptStore::new();
        store.replace(PromptDocument::empty());
        let mut rx = store.subscribe();
        rx.borrow_and_update();

        store.add_character().unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().as_ref().unwrap().characters.len(), 1);
    }

    #[test]
    fn test_sequence_edits_keep_document_schema_valid() {
        let store = PromptStore::new();
        store.replace(PromptDocument::empty());
        store.add_character().unwrap();
        store.add_element().unwrap();
        store.add_sfx().unwrap();
        store
            .update(FieldPath::Audio(AudioField::Sfx(0)), "rain")
            .unwrap();
        store.remove_element(0).unwrap();
        store.remove_character(0).unwrap();

        // Still deserializable as a complete document after every edit
        let doc = store.snapshot().unwrap();
        let value = serde_json::to_value(&doc).unwrap();
        let parsed: PromptDocument = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, doc);
        assert_eq!(parsed.audio.sfx, vec!["rain".to_string()]);
    }
}
