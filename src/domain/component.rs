//! Catalog entry model.
//!
//! A [`ComponentEntry`] describes one showcased UI component: what it is, how
//! to use it, and the optional popularity metrics the catalog sorts by. Entries
//! are built once at startup and never mutated afterwards.

use crate::domain::error::ShowcaseError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// The fixed set of catalog categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Inputs,
    Display,
    Layout,
    Navigation,
    Overlays,
}

impl Category {
    /// All categories in the order the filter bar lists them.
    pub const ALL: [Self; 5] = [
        Self::Inputs,
        Self::Display,
        Self::Layout,
        Self::Navigation,
        Self::Overlays,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Inputs => "Inputs",
            Self::Display => "Display",
            Self::Layout => "Layout",
            Self::Navigation => "Navigation",
            Self::Overlays => "Overlays",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ShowcaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ShowcaseError::Config(format!("unknown category: {s:?}")))
    }
}

/// One documented prop of a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub default: Option<String>,
}

impl PropSpec {
    pub fn new(name: impl Into<String>, kind: impl Into<String>, default: Option<&str>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            default: default.map(String::from),
        }
    }
}

/// A showcased UI component.
///
/// # Fields
///
/// - `id`: Stable unique identifier, also the argument of the install command
/// - `usage`: Copyable usage snippet
/// - `created_at`, `downloads`, `stars`: Optional sort metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentEntry {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub description: String,
    pub usage: String,
    #[serde(default)]
    pub props: Vec<PropSpec>,
    pub created_at: Option<DateTime<Utc>>,
    pub downloads: Option<u64>,
    pub stars: Option<u64>,
}

impl ComponentEntry {
    /// Creates an entry without props or metrics.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        description: impl Into<String>,
        usage: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            description: description.into(),
            usage: usage.into(),
            props: Vec::new(),
            created_at: None,
            downloads: None,
            stars: None,
        }
    }

    #[must_use]
    pub fn with_props(mut self, props: Vec<PropSpec>) -> Self {
        self.props = props;
        self
    }

    #[must_use]
    pub fn with_metrics(mut self, created_at: DateTime<Utc>, downloads: u64, stars: u64) -> Self {
        self.created_at = Some(created_at);
        self.downloads = Some(downloads);
        self.stars = Some(stars);
        self
    }

    /// Formats the copyable install command for this entry.
    ///
    /// ```
    /// use showcase::domain::{Category, ComponentEntry};
    ///
    /// let entry = ComponentEntry::new("button", "Button", Category::Inputs, "", "");
    /// assert_eq!(
    ///     entry.install_command("npx shadcn-ui@latest add"),
    ///     "npx shadcn-ui@latest add button"
    /// );
    /// ```
    #[must_use]
    pub fn install_command(&self, prefix: &str) -> String {
        format!("{} {}", prefix.trim_end(), self.id)
    }

    /// Popularity-over-recency score: downloads damped by age in days.
    ///
    /// ```text
    /// score = downloads / (days_since_created + 1)
    /// ```
    ///
    /// Entries without a creation date count as created `now`.
    #[must_use]
    pub fn trending_score(&self, now: DateTime<Utc>) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let downloads = self.downloads.unwrap_or(0) as f64;

        let age_seconds = self
            .created_at
            .map_or(0, |created| (now - created).num_seconds().max(0));

        #[allow(clippy::cast_precision_loss)]
        let age_days = age_seconds as f64 / SECONDS_PER_DAY as f64;

        downloads / (age_days + 1.0)
    }

    /// Human-readable age of the entry, e.g. `"3d ago"`.
    ///
    /// - Less than 1 minute (or no date): "just now"
    /// - Less than 1 hour: "Xm ago"
    /// - Less than 1 day: "Xh ago"
    /// - Otherwise: "Xd ago"
    #[must_use]
    pub fn added_ago(&self, now: DateTime<Utc>) -> String {
        let diff = self
            .created_at
            .map_or(0, |created| (now - created).num_seconds());

        if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            let mins = diff / SECONDS_PER_MINUTE;
            format!("{mins}m ago")
        } else if diff < SECONDS_PER_DAY {
            let hours = diff / SECONDS_PER_HOUR;
            format!("{hours}h ago")
        } else {
            let days = diff / SECONDS_PER_DAY;
            format!("{days}d ago")
        }
    }
}
