//! HSL color triples.
//!
//! Theme colors are stored and projected as bare `"<h> <s>% <l>%"` triples so
//! stylesheet consumers can wrap them as `hsl(var(--primary))`.

use crate::domain::error::{Result, ShowcaseError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A color as hue (degrees) and saturation/lightness (percent).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Hsl {
    /// Creates a color, rejecting components outside `0..=360` / `0..=100`.
    ///
    /// # Errors
    ///
    /// Returns [`ShowcaseError::InvalidValue`] if any component is out of range
    /// or not finite.
    pub fn new(hue: f32, saturation: f32, lightness: f32) -> Result<Self> {
        let in_range = |v: f32, max: f32| v.is_finite() && (0.0..=max).contains(&v);

        if !in_range(hue, 360.0) || !in_range(saturation, 100.0) || !in_range(lightness, 100.0) {
            return Err(ShowcaseError::InvalidValue(format!(
                "hsl({hue}, {saturation}%, {lightness}%) is out of range"
            )));
        }

        Ok(Self {
            hue,
            saturation,
            lightness,
        })
    }

    /// `const` constructor for the built-in palettes. Values are not checked.
    #[must_use]
    pub(crate) const fn raw(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Formats the color as a CSS function, e.g. `hsl(221 83% 53%)`.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!("hsl({self})")
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}% {}%", self.hue, self.saturation, self.lightness)
    }
}

impl FromStr for Hsl {
    type Err = ShowcaseError;

    /// Parses `"222.2 47.4% 11.2%"`. The `%` signs are optional.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ShowcaseError::InvalidValue(format!("not an HSL triple: {s:?}"));

        let parts: Vec<f32> = s
            .split_whitespace()
            .map(|part| part.trim_end_matches('%').parse::<f32>())
            .collect::<std::result::Result<_, _>>()
            .map_err(|_| invalid())?;

        match parts.as_slice() {
            [h, s, l] => Self::new(*h, *s, *l),
            _ => Err(invalid()),
        }
    }
}

impl Serialize for Hsl {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Hsl {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_displays_triples() {
        let color: Hsl = "222.2 47.4% 11.2%".parse().unwrap();
        assert_eq!(color, Hsl::raw(222.2, 47.4, 11.2));
        assert_eq!(color.to_string(), "222.2 47.4% 11.2%");
        assert_eq!(Hsl::raw(0.0, 0.0, 100.0).to_string(), "0 0% 100%");
    }

    #[test]
    fn percent_signs_are_optional() {
        let color: Hsl = "221 83 53".parse().unwrap();
        assert_eq!(color.to_css(), "hsl(221 83% 53%)");
    }

    #[test]
    fn rejects_malformed_and_out_of_range() {
        assert!("".parse::<Hsl>().is_err());
        assert!("12 34%".parse::<Hsl>().is_err());
        assert!("red".parse::<Hsl>().is_err());
        assert!("400 50% 50%".parse::<Hsl>().is_err());
        assert!("200 120% 50%".parse::<Hsl>().is_err());
    }

    #[test]
    fn serializes_as_string() {
        let json = serde_json::to_string(&Hsl::raw(36.0, 100.0, 50.0)).unwrap();
        assert_eq!(json, "\"36 100% 50%\"");
        let back: Hsl = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Hsl::raw(36.0, 100.0, 50.0));
    }
}
