//! Presentation-facing view models.
//!
//! Rendering happens outside this crate. [`Showcase::compute_view`] and
//! [`Showcase::usage_view`] produce plain structs a front end can draw
//! directly: pre-computed pages, formatted install commands, and an empty
//! state message when nothing matches.
//!
//! ```text
//! Showcase → compute_view → CatalogView → front end
//! ```
//!
//! [`Showcase::compute_view`]: crate::app::Showcase::compute_view
//! [`Showcase::usage_view`]: crate::app::Showcase::usage_view

pub mod viewmodel;

pub use viewmodel::{CardView, CatalogView, EmptyState, UsageView};
