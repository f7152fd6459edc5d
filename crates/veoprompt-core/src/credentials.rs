//! Single-key credential persistence.
//!
//! The only persisted state in the system: one API key string in one file.
//! An absent or empty file means "uninitialized".

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::CredentialError;

/// Default file name, relative to the working directory.
pub const DEFAULT_CREDENTIALS_PATH: &str = ".veoprompt-credentials";

/// File-backed store for the Gemini API key.
#[derive(Debug, Clone)]
pub struct CredentialFile {
    path: PathBuf,
}

impl CredentialFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path from `VEOPROMPT_CREDENTIALS_PATH`, falling back to
    /// [`DEFAULT_CREDENTIALS_PATH`].
    pub fn from_env() -> Self {
        let path = std::env::var("VEOPROMPT_CREDENTIALS_PATH")
            .unwrap_or_else(|_| DEFAULT_CREDENTIALS_PATH.to_string());
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored key, if any. A missing file or blank content is
    /// reported as `None`, not an error.
    pub fn load(&self) -> Result<Option<String>, CredentialError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => {
                let key = content.trim();
                if key.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(key.to_string()))
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Persist the key, replacing any prior value.
    pub fn save(&self, key: &str) -> Result<(), CredentialError> {
        std::fs::write(&self.path, key.trim())?;
        debug!(path = %self.path.display(), "Credential saved");
        Ok(())
    }

    /// Remove the stored key. Removing an absent key is not an error.
    pub fn clear(&self) -> Result<(), CredentialError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "Credential cleared");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, CredentialFile) {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialFile::new(dir.path().join("credentials"));
        (dir, store)
    }

    #[test]
    fn test_absent_file_is_uninitialized() {
        let (_dir, store) = temp_store();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_save_load_clear() {
        let (_dir, store) = temp_store();
        store.save("  my-api-key \n").unwrap();
        assert_eq!(store.load().unwrap(), Some("my-api-key".to_string()));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        // Clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_blank_content_is_uninitialized() {
        let (_dir, store) = temp_store();
        store.save("   ").unwrap();
        assert_eq!(store.load().unwrap(), None);
    }
}
