//! Application layer coordinating state, events, and actions.
//!
//! This module sits between a presentation layer (not part of this crate) and
//! the catalog, theme and storage layers.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                                             ↓
//!                                  compute_view → CatalogView
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Persisted light/dark mode controller
//! - [`preferences`]: Persisted UI language
//! - [`state`]: Central state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod preferences;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::ModeController;
pub use preferences::LanguagePreference;
pub use state::Showcase;
