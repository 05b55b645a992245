//! Domain layer for the showcase core.
//!
//! Plain data types shared by the catalog, theme and app layers, independent
//! of how state is persisted or rendered.
//!
//! # Organization
//!
//! - [`error`]: Error type and result alias
//! - [`component`]: Catalog entry model and categories
//! - [`color`]: HSL color triples used by theme values
//! - [`mode`]: Display mode and UI language
//!
//! # Examples
//!
//! ```
//! use showcase::domain::{Category, ComponentEntry, Result};
//!
//! fn make_entry() -> Result<ComponentEntry> {
//!     Ok(ComponentEntry::new("badge", "Badge", Category::Display, "A badge.", "<Badge />"))
//! }
//! ```

pub mod color;
pub mod component;
pub mod error;
pub mod mode;

pub use color::Hsl;
pub use component::{Category, ComponentEntry, PropSpec};
pub use error::{Result, ShowcaseError};
pub use mode::{Language, Mode};
