//! Showcase: state and query core of a UI component catalog.
//!
//! The crate provides everything behind a component showcase page except the
//! rendering:
//! - Category, search, sort and pagination over the component catalog
//! - Per-mode (light/dark) theme configuration with presets and CSS projection
//! - Persistence of theme, mode and language in a key-value store
//! - An event → state → action layer a presentation layer can drive

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Presentation layer (not in this crate)             │
//! └─────────────────────────────────────────────────────┘
//!                        │ Event ↓   ↑ Action, CatalogView
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling, mode, language                   │
//! │  - View model computation (ui/)                     │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Catalog       │   │ Theme         │   │ Storage       │
//! │ (catalog/)    │   │ (theme/)      │   │ (storage/)    │
//! │ - Entries     │   │ - Values      │   │ - Backend API │
//! │ - Query       │   │ - Presets     │   │ - JSON file   │
//! │               │   │ - CSS vars    │   │ - Memory      │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Entries, colors, modes, errors (domain/)         │
//! │  - Data directory resolution (infrastructure/)      │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry spans exported to a JSON file      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state with event/action model
//! - [`catalog`]: Built-in entries and the query pipeline
//! - [`domain`]: Core types (entries, colors, modes, errors)
//! - [`infrastructure`]: Data directory resolution
//! - [`storage`]: Key-value persistence backends
//! - [`theme`]: Theme values, presets, CSS variables and the theme store
//! - [`ui`]: View models
//! - [`observability`]: OpenTelemetry tracing
//!
//! # Configuration
//!
//! Configuration comes either from a string map (every value optional and
//! leniently parsed) or from a TOML file:
//!
//! ```toml
//! data_dir = "/var/lib/showcase"
//! page_size = 8
//! default_mode = "dark"
//! preset_file = "/etc/showcase/presets.toml"
//! install_prefix = "pnpm dlx shadcn@latest add"
//! metrics_seed = 42
//! trace_level = "debug"
//! ```
//!
//! # Example
//!
//! ```rust
//! use showcase::{handle_event, initialize, Config, Event};
//! use showcase::catalog::SortOrder;
//!
//! let dir = tempfile::tempdir()?;
//! let config = Config {
//!     data_dir: Some(dir.path().to_path_buf()),
//!     metrics_seed: Some(7),
//!     ..Config::default()
//! };
//!
//! let mut state = initialize(&config)?;
//! handle_event(&mut state, &Event::Sort(SortOrder::Popular))?;
//! let view = state.compute_view(chrono::Utc::now());
//! assert_eq!(view.total_items, 10);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod storage;
pub mod theme;
pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, Event, Showcase};
pub use domain::{Result, ShowcaseError};

use crate::domain::Mode;
use crate::storage::{JsonFileStore, StoreHandle};
use crate::theme::PresetFile;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Cards per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(8) {
    Some(size) => size,
    None => unreachable!(),
};

/// Install command prefix unless configured otherwise.
pub const DEFAULT_INSTALL_PREFIX: &str = "npx shadcn-ui@latest add";

/// Name of the key-value state file inside the data directory.
pub const STATE_FILE_NAME: &str = "state.json";

/// Showcase configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory for the state file and traces.
    ///
    /// Resolved by [`infrastructure::resolve_data_dir`] when unset.
    pub data_dir: Option<PathBuf>,

    /// Cards per catalog page. Default: 8
    pub page_size: NonZeroUsize,

    /// Mode used when none is persisted yet. Default: light
    pub default_mode: Mode,

    /// TOML file with custom theme presets.
    pub preset_file: Option<PathBuf>,

    /// Command prefix the component id is appended to.
    pub install_prefix: String,

    /// Seed for the generated catalog metrics. Random when unset.
    pub metrics_seed: Option<u64>,

    /// Tracing filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any `EnvFilter`
    /// directive. Tracing stays off when unset.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            page_size: DEFAULT_PAGE_SIZE,
            default_mode: Mode::Light,
            preset_file: None,
            install_prefix: DEFAULT_INSTALL_PREFIX.to_string(),
            metrics_seed: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from a string map.
    ///
    /// # Parsing Rules
    ///
    /// - `data_dir`, `preset_file`: String → `PathBuf` (`~` expanded)
    /// - `page_size`: String → non-zero integer (falls back to 8)
    /// - `default_mode`: `light` / `dark` (falls back to light)
    /// - `install_prefix`: String (falls back to the npx command when blank)
    /// - `metrics_seed`: String → `u64` (unset on parse error)
    /// - `trace_level`: String
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use showcase::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_size".to_string(), "12".to_string());
    /// map.insert("default_mode".to_string(), "dark".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.page_size.get(), 12);
    /// assert_eq!(config.default_mode, showcase::domain::Mode::Dark);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let value = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
        };

        Self {
            data_dir: value("data_dir").map(infrastructure::expand_tilde),
            page_size: value("page_size")
                .and_then(|s| s.parse::<NonZeroUsize>().ok())
                .unwrap_or(defaults.page_size),
            default_mode: value("default_mode")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.default_mode),
            preset_file: value("preset_file").map(infrastructure::expand_tilde),
            install_prefix: value("install_prefix")
                .map_or(defaults.install_prefix, String::from),
            metrics_seed: value("metrics_seed").and_then(|s| s.parse().ok()),
            trace_level: value("trace_level").map(String::from),
        }
    }

    /// Reads configuration from a TOML file. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ShowcaseError::Io`] if the file cannot be read and
    /// [`ShowcaseError::Config`] if it is not valid configuration TOML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| ShowcaseError::Config(format!("failed to parse config TOML: {e}")))
    }
}

/// Initializes the showcase from configuration.
///
/// - Installs tracing when `trace_level` is set
/// - Opens (or creates) the JSON state file in the data directory
/// - Loads custom presets (falling back to built-ins if the file is unusable)
/// - Builds the catalog and restores mode, theme and language
///
/// # Errors
///
/// Returns an error if the state file cannot be opened.
pub fn initialize(config: &Config) -> Result<Showcase> {
    let data_dir = infrastructure::resolve_data_dir(config.data_dir.as_deref());

    if config.trace_level.is_some() {
        observability::init_tracing(config, &data_dir);
    }

    tracing::debug!(data_dir = %data_dir.display(), "initializing showcase");

    let store = JsonFileStore::open(data_dir.join(STATE_FILE_NAME))?;

    let presets = config.preset_file.as_ref().map_or_else(PresetFile::default, |path| {
        PresetFile::from_file(path).unwrap_or_else(|e| {
            tracing::warn!(preset_file = %path.display(), error = %e, "failed to load presets, using built-ins");
            PresetFile::default()
        })
    });

    let catalog = catalog::builtin_catalog(config.metrics_seed, chrono::Utc::now());

    Ok(Showcase::new(catalog, StoreHandle::new(store), config, &presets))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_map_is_lenient() {
        let map: BTreeMap<String, String> = [
            ("page_size", "0"),
            ("default_mode", "sepia"),
            ("metrics_seed", "abc"),
            ("install_prefix", "   "),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        assert_eq!(Config::from_map(&map), Config::default());
    }

    #[test]
    fn from_map_reads_every_key() {
        let map: BTreeMap<String, String> = [
            ("data_dir", "/tmp/showcase"),
            ("page_size", "12"),
            ("default_mode", "dark"),
            ("preset_file", "/etc/presets.toml"),
            ("install_prefix", "pnpm dlx shadcn@latest add"),
            ("metrics_seed", "42"),
            ("trace_level", "debug"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let config = Config::from_map(&map);
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/showcase")));
        assert_eq!(config.page_size.get(), 12);
        assert_eq!(config.default_mode, Mode::Dark);
        assert_eq!(config.preset_file, Some(PathBuf::from("/etc/presets.toml")));
        assert_eq!(config.install_prefix, "pnpm dlx shadcn@latest add");
        assert_eq!(config.metrics_seed, Some(42));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn from_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("showcase.toml");
        std::fs::write(&path, "page_size = 4\ndefault_mode = \"dark\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.page_size.get(), 4);
        assert_eq!(config.default_mode, Mode::Dark);
        assert_eq!(config.install_prefix, DEFAULT_INSTALL_PREFIX);

        std::fs::write(&path, "page_size = 0\n").unwrap();
        assert!(matches!(Config::from_file(&path), Err(ShowcaseError::Config(_))));
    }
}
