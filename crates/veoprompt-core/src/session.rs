//! Editing session: the composition root.
//!
//! Owns the client handle explicitly (no ambient global), the prompt store,
//! the raw text view and the credential file. Full-document generation
//! carries a token; a result whose token is no longer the latest is discarded
//! instead of clobbering newer state.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::watch;
use tracing::{debug, info, warn};

use veoprompt_gemini::{GeminiClient, GEMINI_API_BASE};
use veoprompt_models::{FieldPath, Language, ModelVariant, PromptDocument};

use crate::credentials::CredentialFile;
use crate::error::{SessionError, StoreError};
use crate::i18n::field_label;
use crate::raw_text::{EditOutcome, RawTextView};
use crate::store::PromptStore;

/// Session configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub language: Language,
    pub variant: ModelVariant,
    /// Credential file location; `None` resolves via the environment.
    pub credentials_path: Option<PathBuf>,
    /// Gemini endpoint; overridable for tests.
    pub api_base_url: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            variant: ModelVariant::default(),
            credentials_path: None,
            api_base_url: GEMINI_API_BASE.to_string(),
        }
    }
}

impl SessionConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            language: std::env::var("VEOPROMPT_LANGUAGE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
            variant: std::env::var("VEOPROMPT_MODEL")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
            credentials_path: std::env::var("VEOPROMPT_CREDENTIALS_PATH")
                .ok()
                .map(PathBuf::from),
            api_base_url: std::env::var("GEMINI_API_BASE")
                .unwrap_or_else(|_| GEMINI_API_BASE.to_string()),
        }
    }
}

struct SessionState {
    language: Language,
    variant: ModelVariant,
    description: String,
    suggesting: HashSet<FieldPath>,
}

/// One user's prompt-building session.
pub struct PromptSession {
    store: PromptStore,
    raw: Mutex<RawTextView>,
    client: Mutex<Option<Arc<GeminiClient>>>,
    credentials: CredentialFile,
    state: Mutex<SessionState>,
    latest_generation: AtomicU64,
    api_base_url: String,
}

impl PromptSession {
    /// Create a session, activating the client if a credential is already
    /// persisted.
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        let credentials = match &config.credentials_path {
            Some(path) => CredentialFile::new(path),
            None => CredentialFile::from_env(),
        };
        let client = credentials
            .load()?
            .map(|key| Arc::new(GeminiClient::with_base_url(key, &config.api_base_url)));
        if client.is_some() {
            info!("Session started with stored credential");
        }

        Ok(Self {
            store: PromptStore::new(),
            raw: Mutex::new(RawTextView::new()),
            client: Mutex::new(client),
            credentials,
            state: Mutex::new(SessionState {
                language: config.language,
                variant: config.variant,
                description: String::new(),
                suggesting: HashSet::new(),
            }),
            latest_generation: AtomicU64::new(0),
            api_base_url: config.api_base_url,
        })
    }

    pub fn is_initialized(&self) -> bool {
        self.lock_client().is_some()
    }

    /// Persist a credential and activate the client.
    pub fn set_credential(&self, key: &str) -> Result<(), SessionError> {
        let key = key.trim();
        if key.is_empty() {
            return self.clear_credential();
        }
        self.credentials.save(key)?;
        *self.lock_client() = Some(Arc::new(GeminiClient::with_base_url(
            key,
            &self.api_base_url,
        )));
        info!("Credential set");
        Ok(())
    }

    /// Remove the credential and deactivate the client immediately.
    ///
    /// In-flight calls are not cancelled, but full-document results are
    /// discarded by the token check below.
    pub fn clear_credential(&self) -> Result<(), SessionError> {
        self.credentials.clear()?;
        *self.lock_client() = None;
        self.latest_generation.fetch_add(1, Ordering::SeqCst);
        info!("Credential cleared");
        Ok(())
    }

    pub fn language(&self) -> Language {
        self.lock_state().language
    }

    pub fn set_language(&self, language: Language) {
        self.lock_state().language = language;
    }

    pub fn variant(&self) -> ModelVariant {
        self.lock_state().variant
    }

    pub fn set_variant(&self, variant: ModelVariant) {
        self.lock_state().variant = variant;
    }

    pub fn description(&self) -> String {
        self.lock_state().description.clone()
    }

    /// Generate a full document from `description`, replacing the current one
    /// on success.
    ///
    /// On failure (or if a newer request or clear has been issued in the
    /// meantime) the store keeps its prior value, document or absence alike.
    pub async fn generate(&self, description: &str) -> Result<(), SessionError> {
        if description.trim().is_empty() {
            return Err(SessionError::EmptyDescription);
        }

        let (language, variant) = {
            let mut state = self.lock_state();
            state.description = description.to_string();
            (state.language, state.variant)
        };
        let client = self.active_client()?;
        let token = self.latest_generation.fetch_add(1, Ordering::SeqCst) + 1;

        info!(model = variant.as_str(), "Generating prompt document");
        match client.generate_document(description, language, variant).await {
            Ok(document) => {
                if self.latest_generation.load(Ordering::SeqCst) == token {
                    self.store.replace(document);
                    self.refresh_raw();
                } else {
                    debug!("Discarding stale generation result");
                }
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Prompt generation failed");
                Err(e.into())
            }
        }
    }

    /// Request replacement text for one field and merge it at that path.
    ///
    /// A blank overall description skips the request entirely. If the merge
    /// target vanished while the request was outstanding (document cleared,
    /// entry removed), the result is dropped silently; last write wins
    /// otherwise.
    pub async fn suggest(&self, path: FieldPath) -> Result<(), SessionError> {
        let (language, variant, context) = {
            let state = self.lock_state();
            (state.language, state.variant, state.description.clone())
        };
        if context.trim().is_empty() {
            return Ok(());
        }

        let document = self.store.snapshot().ok_or(StoreError::DocumentAbsent)?;
        let current = document.get_field(path).unwrap_or("").to_string();
        let label = field_label(path, language);
        let client = self.active_client()?;

        if !self.lock_state().suggesting.insert(path) {
            // A request for this field is already outstanding
            return Ok(());
        }

        let result = client
            .suggest_field(label, &current, &context, language, variant)
            .await;
        self.lock_state().suggesting.remove(&path);

        match result {
            Ok(suggestion) => {
                match self.store.update(path, suggestion) {
                    Ok(()) => self.refresh_raw(),
                    Err(e) => debug!(%path, error = %e, "Dropping suggestion, target is gone"),
                }
                Ok(())
            }
            Err(e) => {
                warn!(%path, error = %e, "Field suggestion failed");
                Err(e.into())
            }
        }
    }

    /// Whether a suggestion request for this exact field is outstanding.
    pub fn is_suggesting(&self, path: FieldPath) -> bool {
        self.lock_state().suggesting.contains(&path)
    }

    /// Apply a manual edit of the raw JSON text.
    ///
    /// Returns `true` when the text parsed and replaced the document. On
    /// failure the store is untouched and the typed text stays visible.
    pub fn edit_raw_text(&self, text: impl Into<String>) -> bool {
        let mut raw = self.lock_raw();
        match raw.edit(text) {
            EditOutcome::Applied(document) => {
                self.store.replace(document.clone());
                raw.refresh(Some(&document));
                true
            }
            EditOutcome::Rejected => false,
        }
    }

    /// Current raw JSON text.
    pub fn document_text(&self) -> String {
        self.lock_raw().text().to_string()
    }

    /// Destroy the current document.
    pub fn clear_document(&self) {
        self.latest_generation.fetch_add(1, Ordering::SeqCst);
        self.store.clear();
        self.refresh_raw();
    }

    /// Single-leaf edit from a field editor.
    pub fn update_field(
        &self,
        path: FieldPath,
        value: impl Into<String>,
    ) -> Result<(), StoreError> {
        self.store.update(path, value)?;
        self.refresh_raw();
        Ok(())
    }

    pub fn add_character(&self) -> Result<(), StoreError> {
        self.store.add_character()?;
        self.refresh_raw();
        Ok(())
    }

    pub fn remove_character(&self, index: usize) -> Result<(), StoreError> {
        self.store.remove_character(index)?;
        self.refresh_raw();
        Ok(())
    }

    pub fn add_element(&self) -> Result<(), StoreError> {
        self.store.add_element()?;
        self.refresh_raw();
        Ok(())
    }

    pub fn remove_element(&self, index: usize) -> Result<(), StoreError> {
        self.store.remove_element(index)?;
        self.refresh_raw();
        Ok(())
    }

    pub fn add_sfx(&self) -> Result<(), StoreError> {
        self.store.add_sfx()?;
        self.refresh_raw();
        Ok(())
    }

    pub fn remove_sfx(&self, index: usize) -> Result<(), StoreError> {
        self.store.remove_sfx(index)?;
        self.refresh_raw();
        Ok(())
    }

    pub fn store(&self) -> &PromptStore {
        &self.store
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<PromptDocument>> {
        self.store.subscribe()
    }

    fn active_client(&self) -> Result<Arc<GeminiClient>, SessionError> {
        self.lock_client()
            .as_ref()
            .cloned()
            .ok_or(SessionError::NotInitialized)
    }

    fn refresh_raw(&self) {
        let snapshot = self.store.snapshot();
        self.lock_raw().refresh(snapshot.as_ref());
    }

    fn lock_client(&self) -> MutexGuard<'_, Option<Arc<GeminiClient>>> {
        self.client.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn lock_state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn lock_raw(&self) -> MutexGuard<'_, RawTextView> {
        self.raw.lock().unwrap_or_else(|e| e.into_inner())
    }
}
