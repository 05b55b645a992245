//! Application state and view model computation.
//!
//! [`Showcase`] is the single source of truth for everything the catalog page
//! shows: the component list, the query inputs, the display mode, the theme
//! store, the UI language and the component open in the usage drawer.
//!
//! # Architecture
//!
//! Query inputs are plain fields mutated by the event handler. Derived data
//! (the current page, the total page count) is recomputed from them on demand
//! by [`Showcase::compute_view`], so it can never go stale.
//!
//! Mode changes go through [`Showcase::set_mode`], which persists the mode and
//! re-derives the theme config for it in one step.

use crate::app::modes::ModeController;
use crate::app::preferences::LanguagePreference;
use crate::catalog::{count_matching, query, CatalogQuery, CategoryFilter, SortOrder};
use crate::domain::error::{Result, ShowcaseError};
use crate::domain::{ComponentEntry, Language, Mode};
use crate::storage::StoreHandle;
use crate::theme::{PresetFile, ThemeConfigStore};
use crate::ui::viewmodel::{CardView, CatalogView, EmptyState, UsageView};
use crate::Config;
use chrono::{DateTime, Utc};
use std::num::NonZeroUsize;

/// Central application state container.
#[derive(Debug)]
pub struct Showcase {
    /// All catalog entries, in catalog order.
    pub catalog: Vec<ComponentEntry>,

    pub category: CategoryFilter,

    /// Raw search text as typed; normalized by the query pipeline.
    pub search: String,

    pub sort: SortOrder,

    /// Current 1-based page. Kept within `1..=max(total_pages, 1)` by the
    /// handler.
    pub page: usize,

    pub page_size: NonZeroUsize,

    /// Id of the component shown in the usage drawer, if open.
    pub selected: Option<String>,

    install_prefix: String,
    modes: ModeController,
    theme: ThemeConfigStore,
    language: LanguagePreference,
}

impl Showcase {
    /// Creates the state over `catalog`, restoring mode, theme and language
    /// from `storage`.
    #[must_use]
    pub fn new(
        catalog: Vec<ComponentEntry>,
        storage: StoreHandle,
        config: &Config,
        presets: &PresetFile,
    ) -> Self {
        let modes = ModeController::new(storage.clone(), config.default_mode);
        let theme = ThemeConfigStore::with_presets(storage.clone(), modes.mode(), presets);
        let language = LanguagePreference::load(storage);

        tracing::debug!(
            entries = catalog.len(),
            mode = %modes.mode(),
            language = %language.language(),
            "showcase state created"
        );

        Self {
            catalog,
            category: CategoryFilter::All,
            search: String::new(),
            sort: SortOrder::Latest,
            page: 1,
            page_size: config.page_size,
            selected: None,
            install_prefix: config.install_prefix.clone(),
            modes,
            theme,
            language,
        }
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.modes.mode()
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language.language()
    }

    #[must_use]
    pub const fn theme(&self) -> &ThemeConfigStore {
        &self.theme
    }

    /// Mutable access to the theme store, e.g. to subscribe to changes.
    pub fn theme_mut(&mut self) -> &mut ThemeConfigStore {
        &mut self.theme
    }

    /// Persists `mode` and switches the theme store to it.
    ///
    /// # Errors
    ///
    /// Returns the storage error if the mode cannot be persisted; nothing
    /// changes in that case.
    pub fn set_mode(&mut self, mode: Mode) -> Result<()> {
        self.modes.set(mode)?;
        self.theme.on_mode_change(mode);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns the storage error if the language cannot be persisted.
    pub fn set_language(&mut self, language: Language) -> Result<()> {
        self.language.set(language)
    }

    /// The query described by the current inputs.
    #[must_use]
    pub fn catalog_query(&self) -> CatalogQuery {
        CatalogQuery {
            category: self.category,
            search: self.search.clone(),
            sort: self.sort,
            page: self.page,
            page_size: self.page_size,
        }
    }

    /// Page count for the current filters.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        count_matching(&self.catalog, self.category, &self.search).div_ceil(self.page_size.get())
    }

    /// Clamps `page` into `1..=max(total_pages, 1)`.
    #[must_use]
    pub fn clamp_page(&self, page: usize) -> usize {
        page.clamp(1, self.total_pages().max(1))
    }

    /// Looks up a catalog entry by id.
    ///
    /// # Errors
    ///
    /// Returns [`ShowcaseError::UnknownComponent`] if no entry has that id.
    pub fn find(&self, id: &str) -> Result<&ComponentEntry> {
        self.catalog
            .iter()
            .find(|entry| entry.id == id)
            .ok_or_else(|| ShowcaseError::UnknownComponent(id.to_string()))
    }

    /// Install command of `entry` with the configured prefix.
    #[must_use]
    pub fn install_command(&self, entry: &ComponentEntry) -> String {
        entry.install_command(&self.install_prefix)
    }

    /// Computes the catalog page view model at `now`.
    #[must_use]
    pub fn compute_view(&self, now: DateTime<Utc>) -> CatalogView {
        let result = query(&self.catalog, &self.catalog_query(), now);

        let cards = result
            .items
            .iter()
            .map(|entry| CardView {
                id: entry.id.clone(),
                name: entry.name.clone(),
                category: entry.category,
                description: entry.description.clone(),
                added: entry.added_ago(now),
                downloads: entry.downloads,
                stars: entry.stars,
                trending_score: entry.trending_score(now),
                install_command: self.install_command(entry),
            })
            .collect();

        let empty_state = (result.total_items == 0).then(|| self.empty_state());

        CatalogView {
            cards,
            page: result.page,
            total_pages: result.total_pages,
            total_items: result.total_items,
            category: self.category,
            search: self.search.clone(),
            sort: self.sort,
            mode: self.mode(),
            language: self.language(),
            empty_state,
        }
    }

    /// Usage drawer contents for the selected component, if the drawer is open.
    #[must_use]
    pub fn usage_view(&self) -> Option<UsageView> {
        let id = self.selected.as_deref()?;
        let entry = self.find(id).ok()?;

        Some(UsageView {
            id: entry.id.clone(),
            name: entry.name.clone(),
            usage: entry.usage.clone(),
            props: entry.props.clone(),
            install_command: self.install_command(entry),
        })
    }

    fn empty_state(&self) -> EmptyState {
        if self.search.trim().is_empty() {
            EmptyState {
                message: "No components found in this category.".to_string(),
                subtitle: "Pick another category to see more components.".to_string(),
            }
        } else {
            EmptyState {
                message: format!("No components match \"{}\".", self.search.trim()),
                subtitle: "Try a different search term or category.".to_string(),
            }
        }
    }
}
