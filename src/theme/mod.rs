//! Theme configuration: values, presets, CSS projection and the store.
//!
//! # Modules
//!
//! - [`values`]: Full and partial theme records, defaults per mode
//! - [`presets`]: Built-in and TOML-defined presets
//! - [`css`]: Projection onto CSS custom properties
//! - [`store`]: The persisted, observable per-mode store

pub mod css;
pub mod presets;
pub mod store;
pub mod values;

pub use css::StyleVariables;
pub use presets::{base_preset, Preset, PresetFile, PresetTable, BUILTIN_PRESETS};
pub use store::{ChangeCause, SubscriptionId, ThemeChange, ThemeConfigStore};
pub use values::{ThemeConfigPatch, ThemeConfigValues};
