//! Infrastructure layer for filesystem and environment interactions.
//!
//! Resolves where the showcase keeps its state file and trace output.

pub mod paths;

pub use paths::{expand_tilde, resolve_data_dir, DATA_DIR_ENV};
