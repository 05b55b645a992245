//! Persisted UI language preference.

use crate::domain::error::Result;
use crate::domain::Language;
use crate::storage::{StoreHandle, LANGUAGE_KEY};

/// The UI language, persisted under the `language` key.
///
/// A missing or unrecognized stored code reads as [`Language::En`].
#[derive(Debug, Clone)]
pub struct LanguagePreference {
    storage: StoreHandle,
    language: Language,
}

impl LanguagePreference {
    #[must_use]
    pub fn load(storage: StoreHandle) -> Self {
        let language = storage
            .get(LANGUAGE_KEY)
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "failed to read stored language");
                None
            })
            .and_then(|code| code.parse().ok())
            .unwrap_or_default();

        Self { storage, language }
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// # Errors
    ///
    /// Returns the storage error if persisting fails; the language is unchanged.
    pub fn set(&mut self, language: Language) -> Result<()> {
        self.storage.set(LANGUAGE_KEY, language.code())?;
        self.language = language;
        Ok(())
    }
}
