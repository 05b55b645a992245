//! Theme configuration values and partial overrides.
//!
//! [`ThemeConfigValues`] is the complete set of style attributes for one mode;
//! [`ThemeConfigPatch`] is the same record with every field optional. Patches
//! are what callers send to `update`, what presets override, and what gets
//! parsed back from storage before merging over the mode defaults, so a stored
//! value that lacks a key still yields a complete config.
//!
//! Both structs serialize with camelCase keys (`primaryColor`, `fontScale`,
//! ...) and colors as HSL strings.

use crate::domain::error::{Result, ShowcaseError};
use crate::domain::{Hsl, Mode};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Accepted `fontScale` range.
pub const FONT_SCALE_RANGE: RangeInclusive<f32> = 0.8..=1.4;

/// Accepted `letterSpacing` range, in px.
pub const LETTER_SPACING_RANGE: RangeInclusive<f32> = -2.0..=2.0;

/// Accepted `lineHeight` range.
pub const LINE_HEIGHT_RANGE: RangeInclusive<f32> = 1.0..=2.0;

/// Generates the full and partial theme records from one field list.
///
/// For each field the patch gets a chainable setter of the same name taking
/// the type after `=>`, so overrides read as
/// `ThemeConfigPatch::new().border_radius("1rem").font_scale(0.9)`.
macro_rules! theme_values {
    (
        $(
            $(#[$meta:meta])*
            $field:ident: $ty:ty => $arg:ty
        ),* $(,)?
    ) => {
        /// Complete theme configuration for one mode.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct ThemeConfigValues {
            $(
                $(#[$meta])*
                pub $field: $ty,
            )*
        }

        /// Partial theme configuration. `None` means "leave as is".
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct ThemeConfigPatch {
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl ThemeConfigValues {
            /// Returns a copy with every key set in `patch` overwritten.
            #[must_use]
            pub fn merged(&self, patch: &ThemeConfigPatch) -> Self {
                Self {
                    $(
                        $field: patch.$field.clone().unwrap_or_else(|| self.$field.clone()),
                    )*
                }
            }

            /// Names (camelCase) of the keys whose value differs from `other`.
            #[must_use]
            pub fn changed_keys(&self, other: &Self) -> Vec<&'static str> {
                let mut keys = Vec::new();
                $(
                    if self.$field != other.$field {
                        keys.push(camel_key(stringify!($field)));
                    }
                )*
                keys
            }
        }

        impl ThemeConfigPatch {
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }

            /// `true` if no key is set.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                true $(&& self.$field.is_none())*
            }

            /// Names (camelCase) of the keys this patch sets.
            #[must_use]
            pub fn keys(&self) -> Vec<&'static str> {
                let mut keys = Vec::new();
                $(
                    if self.$field.is_some() {
                        keys.push(camel_key(stringify!($field)));
                    }
                )*
                keys
            }

            $(
                #[must_use]
                pub fn $field(mut self, value: $arg) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*
        }

        impl From<ThemeConfigValues> for ThemeConfigPatch {
            fn from(values: ThemeConfigValues) -> Self {
                Self {
                    $( $field: Some(values.$field), )*
                }
            }
        }
    };
}

theme_values! {
    primary_color: Hsl => Hsl,
    secondary_color: Hsl => Hsl,
    accent_color: Hsl => Hsl,
    background_color: Hsl => Hsl,
    card_color: Hsl => Hsl,
    text_color: Hsl => Hsl,
    muted_color: Hsl => Hsl,
    border_color: Hsl => Hsl,
    /// CSS length, e.g. `0.5rem`.
    border_radius: String => impl Into<String>,
    font_scale: f32 => f32,
    /// CSS font stack for body text.
    font_family: String => impl Into<String>,
    /// CSS font stack for headings.
    heading_font_family: String => impl Into<String>,
    /// Letter spacing in px.
    letter_spacing: f32 => f32,
    line_height: f32 => f32,
}

/// Converts a snake_case field name to its persisted camelCase key.
fn camel_key(field: &'static str) -> &'static str {
    match field {
        "primary_color" => "primaryColor",
        "secondary_color" => "secondaryColor",
        "accent_color" => "accentColor",
        "background_color" => "backgroundColor",
        "card_color" => "cardColor",
        "text_color" => "textColor",
        "muted_color" => "mutedColor",
        "border_color" => "borderColor",
        "border_radius" => "borderRadius",
        "font_scale" => "fontScale",
        "font_family" => "fontFamily",
        "heading_font_family" => "headingFontFamily",
        "letter_spacing" => "letterSpacing",
        "line_height" => "lineHeight",
        other => other,
    }
}

const SYSTEM_FONT_STACK: &str = "system-ui, sans-serif";

impl ThemeConfigValues {
    /// Built-in defaults for `mode`.
    #[must_use]
    pub fn default_for(mode: Mode) -> Self {
        match mode {
            Mode::Light => Self {
                primary_color: Hsl::raw(222.2, 47.4, 11.2),
                secondary_color: Hsl::raw(210.0, 40.0, 96.1),
                accent_color: Hsl::raw(210.0, 40.0, 96.1),
                background_color: Hsl::raw(0.0, 0.0, 100.0),
                card_color: Hsl::raw(0.0, 0.0, 100.0),
                text_color: Hsl::raw(222.2, 84.0, 4.9),
                muted_color: Hsl::raw(210.0, 40.0, 96.1),
                border_color: Hsl::raw(214.3, 31.8, 91.4),
                border_radius: "0.5rem".to_string(),
                font_scale: 1.0,
                font_family: SYSTEM_FONT_STACK.to_string(),
                heading_font_family: SYSTEM_FONT_STACK.to_string(),
                letter_spacing: 0.0,
                line_height: 1.5,
            },
            Mode::Dark => Self {
                primary_color: Hsl::raw(210.0, 40.0, 98.0),
                secondary_color: Hsl::raw(217.2, 32.6, 17.5),
                accent_color: Hsl::raw(217.2, 32.6, 17.5),
                background_color: Hsl::raw(222.2, 84.0, 4.9),
                card_color: Hsl::raw(222.2, 84.0, 4.9),
                text_color: Hsl::raw(210.0, 40.0, 98.0),
                muted_color: Hsl::raw(217.2, 32.6, 17.5),
                border_color: Hsl::raw(217.2, 32.6, 17.5),
                border_radius: "0.5rem".to_string(),
                font_scale: 1.0,
                font_family: SYSTEM_FONT_STACK.to_string(),
                heading_font_family: SYSTEM_FONT_STACK.to_string(),
                letter_spacing: 0.0,
                line_height: 1.5,
            },
        }
    }

    /// Parses a persisted JSON value and merges it over the defaults of `mode`.
    ///
    /// Keys missing from `json` keep their default; unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ShowcaseError::MalformedPersistedState`] if `json` is not a
    /// JSON object of correctly typed theme keys, or if a stored value fails
    /// [`ThemeConfigPatch::validate`].
    pub fn from_persisted(mode: Mode, key: &str, json: &str) -> Result<Self> {
        let malformed = |reason: String| ShowcaseError::MalformedPersistedState {
            key: key.to_string(),
            reason,
        };

        let patch: ThemeConfigPatch =
            serde_json::from_str(json).map_err(|e| malformed(e.to_string()))?;
        patch.validate().map_err(|e| malformed(e.to_string()))?;

        Ok(Self::default_for(mode).merged(&patch))
    }
}

impl ThemeConfigPatch {
    /// Checks every set value against its accepted range.
    ///
    /// # Errors
    ///
    /// Returns [`ShowcaseError::InvalidValue`] naming the first offending key.
    pub fn validate(&self) -> Result<()> {
        let colors = [
            &self.primary_color,
            &self.secondary_color,
            &self.accent_color,
            &self.background_color,
            &self.card_color,
            &self.text_color,
            &self.muted_color,
            &self.border_color,
        ];
        for color in colors.into_iter().flatten() {
            Hsl::new(color.hue, color.saturation, color.lightness)?;
        }

        check_range("fontScale", self.font_scale, &FONT_SCALE_RANGE)?;
        check_range("letterSpacing", self.letter_spacing, &LETTER_SPACING_RANGE)?;
        check_range("lineHeight", self.line_height, &LINE_HEIGHT_RANGE)?;

        let texts = [
            ("borderRadius", &self.border_radius),
            ("fontFamily", &self.font_family),
            ("headingFontFamily", &self.heading_font_family),
        ];
        for (key, value) in texts {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                return Err(ShowcaseError::InvalidValue(format!("{key} must not be empty")));
            }
        }

        Ok(())
    }
}

fn check_range(key: &str, value: Option<f32>, range: &RangeInclusive<f32>) -> Result<()> {
    match value {
        Some(v) if !range.contains(&v) => Err(ShowcaseError::InvalidValue(format!(
            "{key} = {v} is outside {}..={}",
            range.start(),
            range.end()
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merged_only_touches_patched_keys() {
        let base = ThemeConfigValues::default_for(Mode::Light);
        let patch = ThemeConfigPatch::new()
            .border_radius("1rem")
            .primary_color(Hsl::raw(221.0, 83.0, 53.0));

        let next = base.merged(&patch);
        assert_eq!(next.border_radius, "1rem");
        assert_eq!(next.primary_color, Hsl::raw(221.0, 83.0, 53.0));
        assert_eq!(next.changed_keys(&base), vec!["primaryColor", "borderRadius"]);
        assert_eq!(patch.keys(), vec!["primaryColor", "borderRadius"]);
    }

    #[test]
    fn serializes_camel_case_with_string_colors() {
        let json = serde_json::to_value(ThemeConfigValues::default_for(Mode::Dark)).unwrap();
        assert_eq!(json["primaryColor"], "210 40% 98%");
        assert_eq!(json["borderRadius"], "0.5rem");
        assert_eq!(json["headingFontFamily"], "system-ui, sans-serif");
        assert!(json.get("primary_color").is_none());
    }

    #[test]
    fn partial_persisted_json_is_filled_from_defaults() {
        let loaded = ThemeConfigValues::from_persisted(
            Mode::Dark,
            "themeConfig_dark",
            r#"{"borderRadius":"1rem","fontScale":1.2}"#,
        )
        .unwrap();

        let defaults = ThemeConfigValues::default_for(Mode::Dark);
        assert_eq!(loaded.border_radius, "1rem");
        assert!((loaded.font_scale - 1.2).abs() < f32::EPSILON);
        assert_eq!(loaded.primary_color, defaults.primary_color);
        assert_eq!(loaded.line_height, defaults.line_height);
    }

    #[test]
    fn malformed_persisted_json_is_an_error() {
        let err = ThemeConfigValues::from_persisted(Mode::Light, "themeConfig_light", "{oops")
            .unwrap_err();
        assert!(matches!(err, ShowcaseError::MalformedPersistedState { .. }));

        let wrong_type =
            ThemeConfigValues::from_persisted(Mode::Light, "themeConfig_light", r#"{"fontScale":"big"}"#);
        assert!(wrong_type.is_err());
    }

    #[test]
    fn out_of_range_persisted_values_are_malformed() {
        let err = ThemeConfigValues::from_persisted(
            Mode::Light,
            "themeConfig_light",
            r#"{"fontScale":99.0,"lineHeight":-5}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ShowcaseError::MalformedPersistedState { ref key, .. } if key == "themeConfig_light"));
    }

    #[test]
    fn validate_rejects_out_of_range_values() {
        assert!(ThemeConfigPatch::new().font_scale(1.4).validate().is_ok());
        assert!(ThemeConfigPatch::new().font_scale(2.0).validate().is_err());
        assert!(ThemeConfigPatch::new().letter_spacing(-3.0).validate().is_err());
        assert!(ThemeConfigPatch::new().line_height(0.5).validate().is_err());
        assert!(ThemeConfigPatch::new().border_radius("  ").validate().is_err());
        assert!(ThemeConfigPatch::new()
            .accent_color(Hsl::raw(500.0, 10.0, 10.0))
            .validate()
            .is_err());
    }

    #[test]
    fn empty_patch() {
        assert!(ThemeConfigPatch::new().is_empty());
        assert!(!ThemeConfigPatch::new().line_height(1.2).is_empty());
    }
}
