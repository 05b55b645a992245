//! Display mode and UI language.

use crate::domain::error::ShowcaseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Light or dark display variant. Each mode owns its own theme bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    /// Returns the other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ShowcaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ShowcaseError::Config(format!("unknown mode: {other:?}"))),
        }
    }
}

/// UI language. Only the code is handled here; translated strings live in
/// the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
    Vi,
}

impl Language {
    pub const ALL: [Self; 3] = [Self::En, Self::Fr, Self::Vi];

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
            Self::Vi => "vi",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ShowcaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.code() == s.trim())
            .ok_or_else(|| ShowcaseError::Config(format!("unsupported language: {s:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_round_trips_through_str() {
        for mode in [Mode::Light, Mode::Dark] {
            assert_eq!(mode.as_str().parse::<Mode>().unwrap(), mode);
        }
        assert_eq!(Mode::Light.toggled(), Mode::Dark);
        assert!("system".parse::<Mode>().is_err());
    }

    #[test]
    fn language_codes() {
        assert_eq!("vi".parse::<Language>().unwrap(), Language::Vi);
        assert!("de".parse::<Language>().is_err());
        assert_eq!(Language::default().code(), "en");
    }
}
