//! Catalog query pipeline: filter, sort, paginate.
//!
//! [`query`] is a pure function of its inputs. Nothing here mutates a
//! [`ComponentEntry`]; results borrow from the slice they were computed from.
//!
//! # Pipeline
//!
//! 1. **Category**: exact match, or everything for [`CategoryFilter::All`]
//! 2. **Search**: trimmed, lowercased substring over name or description
//! 3. **Sort**: descending and stable on the key of the [`SortOrder`]
//! 4. **Paginate**: 1-based page of `page_size` items
//!
//! Both filters are plain predicates combined with `&&`, so applying them in
//! either order selects the same set.

use crate::domain::error::ShowcaseError;
use crate::domain::{Category, ComponentEntry};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

/// Category selection of the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    #[must_use]
    pub fn matches(self, entry: &ComponentEntry) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => entry.category == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(category) => write!(f, "{category}"),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ShowcaseError;

    /// Parses `all` or a category label, ignoring case. Unknown labels are an
    /// error rather than a wildcard.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

/// Ordering of the result set. Every order is descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Newest `created_at` first; a missing date counts as `now`.
    #[default]
    Latest,
    /// Most downloads first; missing counts as 0.
    Popular,
    /// Most stars first; missing counts as 0.
    Hot,
}

impl SortOrder {
    pub const ALL: [Self; 3] = [Self::Latest, Self::Popular, Self::Hot];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::Popular => "popular",
            Self::Hot => "hot",
        }
    }

    /// Compares `a` and `b` so that the preferred entry sorts first.
    fn compare(self, a: &ComponentEntry, b: &ComponentEntry, now: DateTime<Utc>) -> Ordering {
        match self {
            Self::Latest => {
                let created = |e: &ComponentEntry| e.created_at.unwrap_or(now);
                created(b).cmp(&created(a))
            }
            Self::Popular => b.downloads.unwrap_or(0).cmp(&a.downloads.unwrap_or(0)),
            Self::Hot => b.stars.unwrap_or(0).cmp(&a.stars.unwrap_or(0)),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ShowcaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|order| order.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ShowcaseError::Config(format!("unknown sort order: {s:?}")))
    }
}

/// Inputs of one catalog query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    pub category: CategoryFilter,
    pub search: String,
    pub sort: SortOrder,
    /// 1-based page number. 0 and pages past the end select nothing.
    pub page: usize,
    pub page_size: NonZeroUsize,
}

impl CatalogQuery {
    /// First page of everything, newest first.
    #[must_use]
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            category: CategoryFilter::All,
            search: String::new(),
            sort: SortOrder::Latest,
            page: 1,
            page_size,
        }
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    #[must_use]
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    #[must_use]
    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    #[must_use]
    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }
}

/// One page of query results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPage<'a> {
    pub items: Vec<&'a ComponentEntry>,
    /// `ceil(total_items / page_size)`; 0 when nothing matched.
    pub total_pages: usize,
    /// The requested page, echoed back unclamped.
    pub page: usize,
    pub total_items: usize,
}

impl QueryPage<'_> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// `true` if `entry` name or description contains `needle`.
///
/// `needle` must already be trimmed and lowercased; empty matches everything.
fn matches_search(entry: &ComponentEntry, needle: &str) -> bool {
    needle.is_empty()
        || entry.name.to_lowercase().contains(needle)
        || entry.description.to_lowercase().contains(needle)
}

/// Normalizes free-text search input for [`matches_search`].
fn search_needle(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Number of entries passing the category and search filters.
#[must_use]
pub fn count_matching(all: &[ComponentEntry], category: CategoryFilter, search: &str) -> usize {
    let needle = search_needle(search);
    all.iter()
        .filter(|entry| category.matches(entry) && matches_search(entry, &needle))
        .count()
}

/// Applies the category and search filters and sorts, without paginating.
#[must_use]
pub fn filter_sorted<'a>(
    all: &'a [ComponentEntry],
    category: CategoryFilter,
    search: &str,
    sort: SortOrder,
    now: DateTime<Utc>,
) -> Vec<&'a ComponentEntry> {
    let needle = search_needle(search);

    let mut matched: Vec<&ComponentEntry> = all
        .iter()
        .filter(|entry| category.matches(entry) && matches_search(entry, &needle))
        .collect();

    // `sort_by` is stable, so ties keep their catalog order.
    matched.sort_by(|a, b| sort.compare(a, b, now));
    matched
}

/// Runs `q` over `all`.
///
/// Never fails: an empty result or an out-of-range page yields an empty
/// `items` list.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use showcase::catalog::{builtin_catalog, query, CatalogQuery, SortOrder};
/// use std::num::NonZeroUsize;
///
/// let now = Utc::now();
/// let all = builtin_catalog(Some(7), now);
/// let q = CatalogQuery::new(NonZeroUsize::new(4).unwrap()).sort(SortOrder::Popular);
///
/// let page = query(&all, &q, now);
/// assert_eq!(page.items.len(), 4);
/// assert_eq!(page.total_pages, 3);
/// ```
#[must_use]
pub fn query<'a>(all: &'a [ComponentEntry], q: &CatalogQuery, now: DateTime<Utc>) -> QueryPage<'a> {
    let _span = tracing::debug_span!("catalog_query",
        total = all.len(),
        category = %q.category,
        sort = %q.sort,
        page = q.page,
        query_len = q.search.len()
    ).entered();

    let matched = filter_sorted(all, q.category, &q.search, q.sort, now);
    let total_items = matched.len();
    let page_size = q.page_size.get();
    let total_pages = total_items.div_ceil(page_size);

    let items = if q.page == 0 || q.page > total_pages {
        Vec::new()
    } else {
        let start = (q.page - 1) * page_size;
        matched.into_iter().skip(start).take(page_size).collect()
    };

    tracing::debug!(total_items, total_pages, returned = items.len(), "catalog query done");

    QueryPage {
        items,
        total_pages,
        page: q.page,
        total_items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn entry(id: &str, category: Category, downloads: Option<u64>) -> ComponentEntry {
        let mut e = ComponentEntry::new(id, id.to_uppercase(), category, format!("{id} widget"), "");
        e.downloads = downloads;
        e
    }

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn popular_orders_by_downloads() {
        let now = Utc::now();
        let all = vec![
            entry("a", Category::Inputs, Some(10)),
            entry("b", Category::Inputs, Some(50)),
            entry("c", Category::Inputs, Some(30)),
        ];
        let page = query(&all, &CatalogQuery::new(size(10)).sort(SortOrder::Popular), now);
        let ids: Vec<&str> = page.items.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn missing_metrics_sort_as_defaults() {
        let now = Utc::now();
        let mut older = entry("older", Category::Display, None);
        older.created_at = Some(now - Duration::days(2));
        let undated = entry("undated", Category::Display, None);
        let popular = entry("popular", Category::Display, Some(1));

        let all = vec![older, undated, popular];
        let latest = filter_sorted(&all, CategoryFilter::All, "", SortOrder::Latest, now);
        assert_eq!(latest[2].id, "older");

        let by_downloads = filter_sorted(&all, CategoryFilter::All, "", SortOrder::Popular, now);
        assert_eq!(by_downloads[0].id, "popular");
        assert_eq!(by_downloads[1].id, "older");
        assert_eq!(by_downloads[2].id, "undated");
    }

    #[test]
    fn ties_keep_catalog_order() {
        let now = Utc::now();
        let all: Vec<ComponentEntry> = ["x", "y", "z"]
            .iter()
            .map(|id| entry(id, Category::Layout, Some(5)))
            .collect();

        for order in SortOrder::ALL {
            let ids: Vec<&str> = filter_sorted(&all, CategoryFilter::All, "", order, now)
                .iter()
                .map(|e| e.id.as_str())
                .collect();
            assert_eq!(ids, vec!["x", "y", "z"], "{order}");
        }
    }

    #[test]
    fn search_is_trimmed_and_case_insensitive() {
        let now = Utc::now();
        let all = vec![
            entry("dialog", Category::Overlays, None),
            entry("tabs", Category::Navigation, None),
        ];

        assert_eq!(filter_sorted(&all, CategoryFilter::All, "  DIALOG ", SortOrder::Latest, now).len(), 1);
        assert_eq!(filter_sorted(&all, CategoryFilter::All, "widget", SortOrder::Latest, now).len(), 2);
        assert_eq!(filter_sorted(&all, CategoryFilter::All, "   ", SortOrder::Latest, now).len(), 2);
        assert!(filter_sorted(&all, CategoryFilter::All, "carousel", SortOrder::Latest, now).is_empty());
        assert_eq!(count_matching(&all, CategoryFilter::Only(Category::Overlays), "WIDGET"), 1);
    }

    #[test]
    fn category_filter_is_exact() {
        let now = Utc::now();
        let all = vec![
            entry("button", Category::Inputs, None),
            entry("badge", Category::Display, None),
        ];
        let q = CatalogQuery::new(size(10)).category(Category::Display);
        let page = query(&all, &q, now);
        assert_eq!(page.total_items, 1);
        assert_eq!(page.items[0].id, "badge");
    }

    #[test]
    fn pagination_bounds() {
        let now = Utc::now();
        let all: Vec<ComponentEntry> = (0..5)
            .map(|i| entry(&format!("e{i}"), Category::Inputs, Some(i)))
            .collect();

        let q = CatalogQuery::new(size(2));
        assert_eq!(query(&all, &q, now).total_pages, 3);
        assert_eq!(query(&all, &q.clone().page(3), now).items.len(), 1);
        assert!(query(&all, &q.clone().page(4), now).is_empty());
        assert!(query(&all, &q.clone().page(0), now).is_empty());
        assert_eq!(query(&all, &q.page(0), now).page, 0);
    }

    #[test]
    fn empty_result_has_zero_pages() {
        let page = query(&[], &CatalogQuery::new(size(3)), Utc::now());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.total_items, 0);
        assert!(page.is_empty());
    }

    #[test]
    fn parses_filters_and_orders() {
        assert_eq!("ALL".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "navigation".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Navigation)
        );
        assert!("widgets".parse::<CategoryFilter>().is_err());

        assert_eq!("Hot".parse::<SortOrder>().unwrap(), SortOrder::Hot);
        assert!("oldest".parse::<SortOrder>().is_err());
        assert_eq!(CategoryFilter::Only(Category::Inputs).to_string(), "Inputs");
    }
}
