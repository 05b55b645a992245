//! Per-mode theme configuration store.
//!
//! [`ThemeConfigStore`] is the single writer of the active theme configuration.
//! It keeps one active config for the current mode, persists the full config
//! under `themeConfig_<mode>` on every successful write, re-projects the CSS
//! variables, and notifies subscribers.
//!
//! # Write Ordering
//!
//! Every write computes the next config, persists it, and only then commits it
//! in memory. A storage failure therefore leaves the active config, the
//! projected variables and the subscribers untouched.
//!
//! # Recovery
//!
//! Persisted values are merged over the defaults of their mode, so a stored
//! object missing keys still yields a complete config. A stored value that does
//! not parse is logged and ignored (defaults are used); it is overwritten by
//! the next successful write.
//!
//! # Example
//!
//! ```rust
//! use showcase::domain::Mode;
//! use showcase::storage::{MemoryStore, StoreHandle};
//! use showcase::theme::{ThemeConfigPatch, ThemeConfigStore};
//!
//! let mut store = ThemeConfigStore::new(StoreHandle::new(MemoryStore::new()), Mode::Light);
//! store.update(&ThemeConfigPatch::new().border_radius("1rem"))?;
//! assert_eq!(store.style_variables().get("--radius"), Some("1rem"));
//! # Ok::<(), showcase::ShowcaseError>(())
//! ```

use crate::domain::error::{Result, ShowcaseError};
use crate::domain::Mode;
use crate::storage::{theme_config_key, StoreHandle};
use crate::theme::css::StyleVariables;
use crate::theme::presets::{PresetFile, PresetTable};
use crate::theme::values::{ThemeConfigPatch, ThemeConfigValues};
use std::fmt;

/// Identifies a listener registered with [`ThemeConfigStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// What triggered a [`ThemeChange`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeCause {
    Update,
    Reset,
    Preset(String),
    ModeChange,
}

/// Notification passed to subscribers after the active config changed.
#[derive(Debug)]
pub struct ThemeChange<'a> {
    pub mode: Mode,
    pub config: &'a ThemeConfigValues,
    pub cause: ChangeCause,
}

type Listener = Box<dyn FnMut(&ThemeChange<'_>)>;

/// Store of the active theme configuration for the current mode.
pub struct ThemeConfigStore {
    storage: StoreHandle,
    mode: Mode,
    active: ThemeConfigValues,
    style: StyleVariables,
    light_presets: PresetTable,
    dark_presets: PresetTable,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl ThemeConfigStore {
    /// Creates a store with the built-in presets, loading the active config
    /// for `mode` from `storage`.
    #[must_use]
    pub fn new(storage: StoreHandle, mode: Mode) -> Self {
        Self::with_presets(storage, mode, &PresetFile::default())
    }

    /// Creates a store whose preset tables include the overrides in `custom`.
    #[must_use]
    pub fn with_presets(storage: StoreHandle, mode: Mode, custom: &PresetFile) -> Self {
        let active = load_config(&storage, mode);
        let style = StyleVariables::project(&active, mode);

        tracing::debug!(%mode, "theme store initialized");

        Self {
            storage,
            mode,
            active,
            style,
            light_presets: PresetTable::with_custom(Mode::Light, custom),
            dark_presets: PresetTable::with_custom(Mode::Dark, custom),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// The mode whose config is currently active.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// The active config of the current mode.
    #[must_use]
    pub const fn active(&self) -> &ThemeConfigValues {
        &self.active
    }

    /// CSS variables projected from the active config.
    #[must_use]
    pub const fn style_variables(&self) -> &StyleVariables {
        &self.style
    }

    /// Returns the config of `mode`: the persisted override merged over the
    /// defaults of that mode.
    #[must_use]
    pub fn config(&self, mode: Mode) -> ThemeConfigValues {
        if mode == self.mode {
            return self.active.clone();
        }
        load_config(&self.storage, mode)
    }

    /// Merges `patch` into the active config and persists the result.
    ///
    /// Keys absent from `patch` are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ShowcaseError::InvalidValue`] if a patched value is out of
    /// range, or a storage error if persisting fails. State is unchanged in
    /// both cases.
    pub fn update(&mut self, patch: &ThemeConfigPatch) -> Result<()> {
        let _span = tracing::debug_span!("theme_update",
            mode = %self.mode,
            keys = ?patch.keys()
        ).entered();

        patch.validate()?;
        let next = self.active.merged(patch);
        self.commit(next, ChangeCause::Update)
    }

    /// Restores the built-in defaults of the current mode and persists them.
    ///
    /// # Errors
    ///
    /// Returns a storage error if persisting fails.
    pub fn reset(&mut self) -> Result<()> {
        let _span = tracing::debug_span!("theme_reset", mode = %self.mode).entered();

        self.commit(ThemeConfigValues::default_for(self.mode), ChangeCause::Reset)
    }

    /// Replaces the active config with the preset `name` of the current mode.
    ///
    /// # Errors
    ///
    /// Returns [`ShowcaseError::PresetNotFound`] (after logging it) if the
    /// current mode has no such preset; state is unchanged. Returns a storage
    /// error if persisting fails.
    pub fn apply_preset(&mut self, name: &str) -> Result<()> {
        let _span = tracing::debug_span!("theme_apply_preset", mode = %self.mode, preset = %name)
            .entered();

        let Some(values) = self.presets(self.mode).get(name).cloned() else {
            tracing::warn!(preset = %name, mode = %self.mode, "theme preset not found");
            return Err(ShowcaseError::PresetNotFound(name.to_string()));
        };

        self.commit(values, ChangeCause::Preset(name.to_string()))
    }

    /// Switches to `mode`, re-deriving the active config from storage.
    ///
    /// Unsaved in-memory state of the previous mode does not exist (every
    /// write persists), and nothing from it is carried over. Switching to the
    /// current mode is a no-op and notifies no one.
    pub fn on_mode_change(&mut self, mode: Mode) {
        if mode == self.mode {
            tracing::trace!(%mode, "theme mode unchanged");
            return;
        }

        let _span = tracing::debug_span!("theme_mode_change", from = %self.mode, to = %mode)
            .entered();

        self.mode = mode;
        self.active = load_config(&self.storage, mode);
        self.style = StyleVariables::project(&self.active, mode);
        self.notify(ChangeCause::ModeChange);
    }

    /// Preset table of `mode`.
    #[must_use]
    pub const fn presets(&self, mode: Mode) -> &PresetTable {
        match mode {
            Mode::Light => &self.light_presets,
            Mode::Dark => &self.dark_presets,
        }
    }

    /// Names of the presets available in the current mode.
    #[must_use]
    pub fn preset_names(&self) -> Vec<&str> {
        self.presets(self.mode).names()
    }

    /// Registers `listener`, called after every successful write and every
    /// switch to a different mode.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&ThemeChange<'_>) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn commit(&mut self, next: ThemeConfigValues, cause: ChangeCause) -> Result<()> {
        let key = theme_config_key(self.mode);
        let json = serde_json::to_string(&next)
            .map_err(|e| ShowcaseError::Storage(format!("failed to serialize theme config: {e}")))?;

        self.storage.set(&key, &json)?;

        tracing::debug!(changed = ?next.changed_keys(&self.active), "theme config persisted");

        self.active = next;
        self.style = StyleVariables::project(&self.active, self.mode);
        self.notify(cause);
        Ok(())
    }

    fn notify(&mut self, cause: ChangeCause) {
        let change = ThemeChange {
            mode: self.mode,
            config: &self.active,
            cause,
        };
        for (_, listener) in &mut self.listeners {
            listener(&change);
        }
    }
}

impl fmt::Debug for ThemeConfigStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeConfigStore")
            .field("mode", &self.mode)
            .field("active", &self.active)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

/// Loads the config of `mode`, falling back to defaults when nothing usable
/// is stored.
fn load_config(storage: &StoreHandle, mode: Mode) -> ThemeConfigValues {
    let key = theme_config_key(mode);

    let stored = match storage.get(&key) {
        Ok(stored) => stored,
        Err(e) => {
            tracing::warn!(%key, error = %e, "failed to read theme config, using defaults");
            None
        }
    };

    stored.map_or_else(
        || ThemeConfigValues::default_for(mode),
        |json| {
            ThemeConfigValues::from_persisted(mode, &key, &json).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "ignoring malformed theme config");
                ThemeConfigValues::default_for(mode)
            })
        },
    )
}
