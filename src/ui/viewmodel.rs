//! View models representing renderable showcase state.
//!
//! View models are computed from [`Showcase`](crate::app::Showcase) on demand
//! and consumed by whatever presentation layer renders the catalog. They carry
//! display-ready data only: formatted ages, install commands, page counters.

use crate::catalog::{CategoryFilter, SortOrder};
use crate::domain::{Category, Language, Mode, PropSpec};

/// Everything the catalog page shows.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView {
    /// Cards of the current page, in sort order.
    pub cards: Vec<CardView>,

    /// Current 1-based page.
    pub page: usize,

    pub total_pages: usize,

    /// Number of entries matching the filters, across all pages.
    pub total_items: usize,

    pub category: CategoryFilter,
    pub search: String,
    pub sort: SortOrder,
    pub mode: Mode,
    pub language: Language,

    /// Set when no entry matches; the page then has no cards.
    pub empty_state: Option<EmptyState>,
}

/// One component card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub description: String,

    /// Relative age, e.g. `"3d ago"`.
    pub added: String,

    pub downloads: Option<u64>,
    pub stars: Option<u64>,

    /// Downloads per day of age; see
    /// [`ComponentEntry::trending_score`](crate::domain::ComponentEntry::trending_score).
    pub trending_score: f64,

    pub install_command: String,
}

/// Contents of the usage drawer for the selected component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageView {
    pub id: String,
    pub name: String,
    pub usage: String,
    pub props: Vec<PropSpec>,
    pub install_command: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No components found in this category.").
    pub message: String,

    /// Secondary hint.
    pub subtitle: String,
}
