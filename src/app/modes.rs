//! Display mode controller.
//!
//! [`ModeController`] owns the current light/dark [`Mode`] and persists it under
//! the `theme` key. It only tracks the mode; the owner forwards changes to the
//! theme store so the active configuration follows.
//!
//! # Initial Mode
//!
//! 1. The stored value, if it parses
//! 2. The configured fallback
//!
//! ```rust
//! use showcase::app::ModeController;
//! use showcase::domain::Mode;
//! use showcase::storage::{MemoryStore, StoreHandle};
//!
//! let mut modes = ModeController::new(StoreHandle::new(MemoryStore::new()), Mode::Light);
//! assert_eq!(modes.toggle()?, Mode::Dark);
//! # Ok::<(), showcase::ShowcaseError>(())
//! ```

use crate::domain::error::Result;
use crate::domain::Mode;
use crate::storage::{StoreHandle, MODE_KEY};

#[derive(Debug, Clone)]
pub struct ModeController {
    storage: StoreHandle,
    mode: Mode,
}

impl ModeController {
    /// Restores the persisted mode, or uses `fallback` when none is stored.
    #[must_use]
    pub fn new(storage: StoreHandle, fallback: Mode) -> Self {
        let mode = match storage.get(MODE_KEY) {
            Ok(Some(stored)) => stored.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %stored, "ignoring unknown stored mode");
                fallback
            }),
            Ok(None) => fallback,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read stored mode");
                fallback
            }
        };

        Self { storage, mode }
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Persists and switches to `mode`.
    ///
    /// # Errors
    ///
    /// Returns the storage error if persisting fails; the mode is unchanged.
    pub fn set(&mut self, mode: Mode) -> Result<()> {
        self.storage.set(MODE_KEY, mode.as_str())?;
        tracing::debug!(from = %self.mode, to = %mode, "display mode set");
        self.mode = mode;
        Ok(())
    }

    /// Switches to the other mode and returns it.
    ///
    /// # Errors
    ///
    /// See [`Self::set`].
    pub fn toggle(&mut self) -> Result<Mode> {
        let next = self.mode.toggled();
        self.set(next)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn restores_stored_mode() {
        let handle = StoreHandle::new(MemoryStore::with_entries([("theme", "dark")]));
        assert_eq!(ModeController::new(handle, Mode::Light).mode(), Mode::Dark);
    }

    #[test]
    fn unknown_stored_value_uses_fallback() {
        let handle = StoreHandle::new(MemoryStore::with_entries([("theme", "sepia")]));
        assert_eq!(ModeController::new(handle, Mode::Dark).mode(), Mode::Dark);
    }

    #[test]
    fn toggle_persists() {
        let handle = StoreHandle::new(MemoryStore::new());
        let mut modes = ModeController::new(handle.clone(), Mode::Light);

        assert_eq!(modes.toggle().unwrap(), Mode::Dark);
        assert_eq!(handle.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(ModeController::new(handle, Mode::Light).mode(), Mode::Dark);
    }
}
