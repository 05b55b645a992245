//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place user input mutates [`Showcase`]. Each
//! event maps to a state change, a list of [`Action`]s, or both.
//!
//! # Event Types
//!
//! - **Query**: `SelectCategory`, `Search`, `Sort` (each resets to page 1)
//! - **Paging**: `GoToPage`, `NextPage`, `PreviousPage` (clamped)
//! - **Preferences**: `ToggleMode`, `SetMode`, `SetLanguage`
//! - **Theme**: `UpdateTheme`, `ResetTheme`, `ApplyPreset`
//! - **Usage drawer**: `OpenUsage`, `CloseUsage`
//! - **Clipboard**: `Install`, `CopyInstallCommand`, `CopyUsage`
//!
//! # Example
//!
//! ```rust
//! use showcase::app::{handle_event, Event, Showcase};
//! use showcase::catalog::{builtin_catalog, SortOrder};
//! use showcase::storage::{MemoryStore, StoreHandle};
//! use showcase::theme::PresetFile;
//! use showcase::Config;
//!
//! let catalog = builtin_catalog(Some(3), chrono::Utc::now());
//! let storage = StoreHandle::new(MemoryStore::new());
//! let mut state = Showcase::new(catalog, storage, &Config::default(), &PresetFile::default());
//!
//! let (changed, actions) = handle_event(&mut state, &Event::Sort(SortOrder::Hot))?;
//! assert!(changed);
//! assert!(actions.is_empty());
//! # Ok::<(), showcase::ShowcaseError>(())
//! ```

use crate::app::{Action, Showcase};
use crate::catalog::{CategoryFilter, SortOrder};
use crate::domain::error::{Result, ShowcaseError};
use crate::domain::{Language, Mode};
use crate::theme::ThemeConfigPatch;

/// User input the showcase reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    SelectCategory(CategoryFilter),
    /// Replaces the search text.
    Search(String),
    Sort(SortOrder),

    /// Jumps to a page; out-of-range values are clamped.
    GoToPage(usize),
    NextPage,
    PreviousPage,

    ToggleMode,
    SetMode(Mode),
    SetLanguage(Language),

    /// Merges a partial theme config into the active mode.
    UpdateTheme(ThemeConfigPatch),
    ResetTheme,
    ApplyPreset(String),

    /// Opens the usage drawer for a component id.
    OpenUsage(String),
    CloseUsage,

    /// Shows the install command of a component.
    Install(String),
    /// Copies the install command of a component.
    CopyInstallCommand(String),
    /// Copies the usage snippet of a component.
    CopyUsage(String),
}

/// Processes an event, mutates state, and returns the actions to execute.
///
/// The returned flag is `true` when the view model may have changed and
/// should be recomputed.
///
/// # Errors
///
/// - [`ShowcaseError::UnknownComponent`] for events naming an id not in the catalog
/// - [`ShowcaseError::InvalidValue`] for out-of-range theme updates
/// - Storage errors when persisting mode, language or theme fails
///
/// An unknown preset name is logged and otherwise ignored.
pub fn handle_event(state: &mut Showcase, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SelectCategory(filter) => {
            state.category = *filter;
            state.page = 1;
            Ok((true, vec![]))
        }
        Event::Search(text) => {
            state.search.clone_from(text);
            state.page = 1;
            tracing::trace!(query = %state.search, "search query updated");
            Ok((true, vec![]))
        }
        Event::Sort(order) => {
            state.sort = *order;
            state.page = 1;
            Ok((true, vec![]))
        }
        Event::GoToPage(page) => Ok((set_page(state, *page), vec![])),
        Event::NextPage => {
            let next = state.page.saturating_add(1);
            Ok((set_page(state, next), vec![]))
        }
        Event::PreviousPage => {
            let previous = state.page.saturating_sub(1);
            Ok((set_page(state, previous), vec![]))
        }
        Event::ToggleMode => {
            let next = state.mode().toggled();
            state.set_mode(next)?;
            Ok((true, vec![]))
        }
        Event::SetMode(mode) => {
            if *mode == state.mode() {
                return Ok((false, vec![]));
            }
            state.set_mode(*mode)?;
            Ok((true, vec![]))
        }
        Event::SetLanguage(language) => {
            state.set_language(*language)?;
            Ok((true, vec![]))
        }
        Event::UpdateTheme(patch) => {
            state.theme_mut().update(patch)?;
            Ok((true, vec![]))
        }
        Event::ResetTheme => {
            state.theme_mut().reset()?;
            Ok((true, vec![]))
        }
        Event::ApplyPreset(name) => match state.theme_mut().apply_preset(name) {
            Ok(()) => Ok((true, vec![])),
            Err(ShowcaseError::PresetNotFound(_)) => Ok((false, vec![])),
            Err(e) => Err(e),
        },
        Event::OpenUsage(id) => {
            state.find(id)?;
            state.selected = Some(id.clone());
            Ok((true, vec![]))
        }
        Event::CloseUsage => {
            let was_open = state.selected.take().is_some();
            Ok((was_open, vec![]))
        }
        Event::Install(id) => {
            let entry = state.find(id)?;
            let command = state.install_command(entry);
            tracing::debug!(component = %id, "install requested");

            Ok((false, vec![Action::toast(format!("Install {}", entry.name), Some(command))]))
        }
        Event::CopyInstallCommand(id) => {
            let entry = state.find(id)?;
            let command = state.install_command(entry);

            Ok((false, vec![
                Action::CopyToClipboard(command),
                Action::toast("Command copied to clipboard", None),
            ]))
        }
        Event::CopyUsage(id) => {
            let usage = state.find(id)?.usage.clone();

            Ok((false, vec![
                Action::CopyToClipboard(usage),
                Action::toast("Usage copied to clipboard", None),
            ]))
        }
    }
}

/// Moves to `page` clamped into the valid range. Returns `true` if it moved.
fn set_page(state: &mut Showcase, page: usize) -> bool {
    let clamped = state.clamp_page(page);
    if clamped == state.page {
        return false;
    }
    state.page = clamped;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_catalog;
    use crate::domain::Category;
    use crate::storage::{MemoryStore, StoreHandle};
    use crate::theme::PresetFile;
    use crate::Config;
    use chrono::Utc;
    use std::num::NonZeroUsize;

    fn state_with_page_size(page_size: usize) -> Showcase {
        let config = Config {
            page_size: NonZeroUsize::new(page_size).unwrap(),
            ..Config::default()
        };
        Showcase::new(
            builtin_catalog(Some(9), Utc::now()),
            StoreHandle::new(MemoryStore::new()),
            &config,
            &PresetFile::default(),
        )
    }

    #[test]
    fn query_events_reset_page() {
        let mut state = state_with_page_size(2);
        handle_event(&mut state, &Event::GoToPage(4)).unwrap();
        assert_eq!(state.page, 4);

        handle_event(&mut state, &Event::Sort(SortOrder::Popular)).unwrap();
        assert_eq!(state.page, 1);

        handle_event(&mut state, &Event::GoToPage(3)).unwrap();
        handle_event(&mut state, &Event::Search("button".to_string())).unwrap();
        assert_eq!(state.page, 1);

        handle_event(&mut state, &Event::GoToPage(2)).unwrap();
        handle_event(&mut state, &Event::SelectCategory(Category::Inputs.into())).unwrap();
        assert_eq!(state.page, 1);
    }

    #[test]
    fn paging_is_clamped() {
        let mut state = state_with_page_size(4);

        let (changed, _) = handle_event(&mut state, &Event::PreviousPage).unwrap();
        assert!(!changed);
        assert_eq!(state.page, 1);

        handle_event(&mut state, &Event::GoToPage(50)).unwrap();
        assert_eq!(state.page, 3);

        let (changed, _) = handle_event(&mut state, &Event::NextPage).unwrap();
        assert!(!changed);
        assert_eq!(state.page, 3);

        handle_event(&mut state, &Event::GoToPage(0)).unwrap();
        assert_eq!(state.page, 1);
    }

    #[test]
    fn install_shows_command_without_copying() {
        let mut state = state_with_page_size(4);
        let (_, actions) = handle_event(&mut state, &Event::Install("button".to_string())).unwrap();

        assert_eq!(actions, vec![Action::ShowToast {
            title: "Install Button".to_string(),
            message: Some("npx shadcn-ui@latest add button".to_string()),
        }]);
    }

    #[test]
    fn copy_events_emit_clipboard_then_toast() {
        let mut state = state_with_page_size(4);

        let (_, actions) =
            handle_event(&mut state, &Event::CopyInstallCommand("tabs".to_string())).unwrap();
        assert_eq!(actions[0], Action::CopyToClipboard("npx shadcn-ui@latest add tabs".to_string()));
        assert!(matches!(&actions[1], Action::ShowToast { title, .. } if title == "Command copied to clipboard"));

        let (_, actions) = handle_event(&mut state, &Event::CopyUsage("switch".to_string())).unwrap();
        assert!(matches!(&actions[0], Action::CopyToClipboard(text) if text.contains("<Switch />")));
    }

    #[test]
    fn unknown_components_are_errors() {
        let mut state = state_with_page_size(4);
        for event in [
            Event::Install("carousel".to_string()),
            Event::CopyUsage("carousel".to_string()),
            Event::OpenUsage("carousel".to_string()),
        ] {
            assert!(matches!(
                handle_event(&mut state, &event),
                Err(ShowcaseError::UnknownComponent(_))
            ));
        }
        assert!(state.selected.is_none());
    }

    #[test]
    fn usage_drawer_open_close() {
        let mut state = state_with_page_size(4);
        handle_event(&mut state, &Event::OpenUsage("dialog".to_string())).unwrap();
        assert_eq!(state.usage_view().unwrap().name, "Dialog");

        let (changed, _) = handle_event(&mut state, &Event::CloseUsage).unwrap();
        assert!(changed);
        let (changed, _) = handle_event(&mut state, &Event::CloseUsage).unwrap();
        assert!(!changed);
    }

    #[test]
    fn unknown_preset_is_swallowed() {
        let mut state = state_with_page_size(4);
        let before = state.theme().active().clone();

        let (changed, actions) =
            handle_event(&mut state, &Event::ApplyPreset("neon".to_string())).unwrap();
        assert!(!changed);
        assert!(actions.is_empty());
        assert_eq!(state.theme().active(), &before);
    }

    #[test]
    fn invalid_theme_update_propagates() {
        let mut state = state_with_page_size(4);
        let patch = ThemeConfigPatch::new().line_height(9.0);
        assert!(matches!(
            handle_event(&mut state, &Event::UpdateTheme(patch)),
            Err(ShowcaseError::InvalidValue(_))
        ));
    }

    #[test]
    fn toggle_mode_round_trips() {
        let mut state = state_with_page_size(4);
        handle_event(&mut state, &Event::ApplyPreset("purple".to_string())).unwrap();
        let light_primary = state.theme().active().primary_color;

        handle_event(&mut state, &Event::ToggleMode).unwrap();
        assert_eq!(state.mode(), Mode::Dark);
        assert_ne!(state.theme().active().primary_color, light_primary);

        handle_event(&mut state, &Event::ToggleMode).unwrap();
        assert_eq!(state.theme().active().primary_color, light_primary);

        let (changed, _) = handle_event(&mut state, &Event::SetMode(Mode::Light)).unwrap();
        assert!(!changed);
    }
}
