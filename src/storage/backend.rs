//! Key-value storage abstraction.
//!
//! This module defines the [`KeyValueStore`] trait that every persistence
//! backend implements, and [`StoreHandle`], the shared single-threaded handle
//! through which the theme store, mode controller and preferences all reach
//! the same backend.
//!
//! # Keys
//!
//! | key | value |
//! |---|---|
//! | `themeConfig_light` / `themeConfig_dark` | JSON theme config for that mode |
//! | `theme` | current display mode (`light` / `dark`) |
//! | `language` | UI language code |

use crate::domain::error::Result;
use crate::domain::Mode;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Storage key for the persisted display mode.
pub const MODE_KEY: &str = "theme";

/// Storage key for the persisted UI language.
pub const LANGUAGE_KEY: &str = "language";

/// Returns the storage key of the theme configuration for `mode`.
///
/// ```
/// use showcase::domain::Mode;
/// use showcase::storage::theme_config_key;
///
/// assert_eq!(theme_config_key(Mode::Dark), "themeConfig_dark");
/// ```
#[must_use]
pub fn theme_config_key(mode: Mode) -> String {
    format!("themeConfig_{mode}")
}

/// Abstraction over string key-value persistence.
///
/// The contract is deliberately the one of browser local storage: values are
/// opaque strings, `set` overwrites, and a missing key reads as `None`.
///
/// # Implementations
///
/// - [`MemoryStore`](super::MemoryStore): `HashMap`-backed, for tests and ephemeral sessions
/// - [`JsonFileStore`](super::JsonFileStore): JSON file with atomic writes
pub trait KeyValueStore {
    /// Reads the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails. The previous value is kept.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Cloneable handle to a shared [`KeyValueStore`].
///
/// All state transitions run on one thread, so the handle is an
/// `Rc<RefCell<..>>` and borrows are held only for the duration of a single
/// `get` or `set`.
#[derive(Clone)]
pub struct StoreHandle {
    inner: Rc<RefCell<dyn KeyValueStore>>,
}

impl StoreHandle {
    /// Wraps a backend in a shared handle.
    pub fn new<S: KeyValueStore + 'static>(store: S) -> Self {
        Self {
            inner: Rc::new(RefCell::new(store)),
        }
    }

    /// Reads `key` from the shared backend.
    ///
    /// # Errors
    ///
    /// Propagates backend read errors.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner.borrow().get(key)
    }

    /// Writes `key` to the shared backend.
    ///
    /// # Errors
    ///
    /// Propagates backend write errors.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.inner.borrow_mut().set(key, value)
    }
}

impl fmt::Debug for StoreHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreHandle")
            .field("handles", &Rc::strong_count(&self.inner))
            .finish()
    }
}
