//! Storage layer for persisted preferences.
//!
//! Everything the showcase persists is a string under a string key: the theme
//! configuration per mode, the display mode and the UI language. This module
//! provides the injected [`KeyValueStore`] capability and its backends.
//!
//! # Modules
//!
//! - `backend`: The `KeyValueStore` trait, shared handle and key names
//! - `memory`: In-memory backend
//! - `json`: JSON file backend with atomic writes

pub mod backend;
pub mod json;
pub mod memory;

pub use backend::{theme_config_key, KeyValueStore, StoreHandle, LANGUAGE_KEY, MODE_KEY};
pub use json::JsonFileStore;
pub use memory::MemoryStore;
