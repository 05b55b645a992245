//! Named theme presets.
//!
//! A preset is always a complete [`ThemeConfigValues`]: it starts from
//! [`base_preset`] for its mode and layers an explicit override record on top.
//! Built-in presets are defined below; additional ones can be loaded from a
//! TOML file.
//!
//! # Built-in Presets
//!
//! - `default`: The mode defaults, unchanged
//! - `blue`, `green`, `purple`, `orange`: Primary/accent color pairs
//! - `compact`, `spacious`: Border radius and font scale
//! - `serif`, `modern`: Typography
//!
//! # TOML Format
//!
//! ```toml
//! [light.ocean]
//! primaryColor = "199 89% 48%"
//! borderRadius = "0.75rem"
//!
//! [dark.ocean]
//! primaryColor = "199 89% 80%"
//! ```

use crate::domain::error::{Result, ShowcaseError};
use crate::domain::{Hsl, Mode};
use crate::theme::values::{ThemeConfigPatch, ThemeConfigValues};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Names of the built-in presets, in picker order.
pub const BUILTIN_PRESETS: [&str; 9] = [
    "default", "blue", "green", "purple", "orange", "compact", "spacious", "serif", "modern",
];

/// The starting point every preset of `mode` inherits from.
#[must_use]
pub fn base_preset(mode: Mode) -> ThemeConfigValues {
    ThemeConfigValues::default_for(mode)
}

/// Override record of a built-in preset, or `None` for unknown names.
///
/// Color presets pair a saturated and a pale shade of one hue: saturated
/// primary with pale accent in light mode, the other way round in dark mode.
#[must_use]
pub fn builtin_override(name: &str, mode: Mode) -> Option<ThemeConfigPatch> {
    let hue_pair = |saturated: Hsl, pale: Hsl| {
        let (primary, accent) = match mode {
            Mode::Light => (saturated, pale),
            Mode::Dark => (pale, saturated),
        };
        ThemeConfigPatch::new().primary_color(primary).accent_color(accent)
    };

    let patch = match name {
        "default" => ThemeConfigPatch::new(),
        "blue" => hue_pair(Hsl::raw(221.0, 83.0, 53.0), Hsl::raw(221.0, 83.0, 84.0)),
        "green" => hue_pair(Hsl::raw(142.0, 71.0, 45.0), Hsl::raw(142.0, 71.0, 84.0)),
        "purple" => hue_pair(Hsl::raw(262.0, 83.3, 57.8), Hsl::raw(262.0, 83.0, 84.0)),
        "orange" => hue_pair(Hsl::raw(36.0, 100.0, 50.0), Hsl::raw(36.0, 100.0, 84.0)),
        "compact" => ThemeConfigPatch::new().border_radius("0.25rem").font_scale(0.9),
        "spacious" => ThemeConfigPatch::new().border_radius("1rem").font_scale(1.1),
        "serif" => ThemeConfigPatch::new()
            .font_family("Georgia, serif")
            .heading_font_family("Garamond, serif")
            .line_height(1.7),
        "modern" => ThemeConfigPatch::new()
            .font_family("Helvetica, sans-serif")
            .heading_font_family("Arial, sans-serif")
            .letter_spacing(-0.2)
            .border_radius("0.75rem"),
        _ => return None,
    };

    Some(patch)
}

/// One named preset, fully resolved for a mode.
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    pub name: String,
    pub values: ThemeConfigValues,
}

/// The presets available in one mode, in picker order.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetTable {
    mode: Mode,
    presets: Vec<Preset>,
}

impl PresetTable {
    /// Builds the built-in table for `mode`.
    #[must_use]
    pub fn builtin(mode: Mode) -> Self {
        let base = base_preset(mode);
        let presets = BUILTIN_PRESETS
            .iter()
            .filter_map(|name| {
                builtin_override(name, mode).map(|patch| Preset {
                    name: (*name).to_string(),
                    values: base.merged(&patch),
                })
            })
            .collect();

        Self { mode, presets }
    }

    /// Builds the built-in table for `mode` extended with the custom presets
    /// `file` defines for that mode. A custom preset with a built-in name
    /// replaces the built-in one in place.
    #[must_use]
    pub fn with_custom(mode: Mode, file: &PresetFile) -> Self {
        let mut table = Self::builtin(mode);
        for (name, patch) in file.for_mode(mode) {
            table.insert(name, patch);
        }
        table
    }

    /// Adds or replaces `name`, resolving `patch` over the mode base.
    pub fn insert(&mut self, name: &str, patch: &ThemeConfigPatch) {
        let values = base_preset(self.mode).merged(patch);

        if let Some(existing) = self.presets.iter_mut().find(|p| p.name == name) {
            existing.values = values;
        } else {
            self.presets.push(Preset {
                name: name.to_string(),
                values,
            });
        }
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Looks up a preset by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ThemeConfigValues> {
        self.presets.iter().find(|p| p.name == name).map(|p| &p.values)
    }

    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.presets.iter().map(|p| p.name.as_str()).collect()
    }
}

/// Custom presets as read from TOML: one table of overrides per mode.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PresetFile {
    #[serde(default)]
    pub light: BTreeMap<String, ThemeConfigPatch>,
    #[serde(default)]
    pub dark: BTreeMap<String, ThemeConfigPatch>,
}

impl PresetFile {
    /// Parses and validates preset overrides from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ShowcaseError::Config`] if the TOML does not parse and
    /// [`ShowcaseError::InvalidValue`] if an override is out of range.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: Self = toml::from_str(contents)
            .map_err(|e| ShowcaseError::Config(format!("failed to parse preset TOML: {e}")))?;

        for (name, patch) in file.light.iter().chain(file.dark.iter()) {
            patch.validate().map_err(|e| {
                ShowcaseError::InvalidValue(format!("preset {name:?}: {e}"))
            })?;
        }

        tracing::debug!(
            light = file.light.len(),
            dark = file.dark.len(),
            "custom presets parsed"
        );

        Ok(file)
    }

    /// Reads preset overrides from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails [`Self::from_toml_str`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Overrides defined for `mode`, ordered by name.
    pub fn for_mode(&self, mode: Mode) -> impl Iterator<Item = (&str, &ThemeConfigPatch)> {
        let table = match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        };
        table.iter().map(|(name, patch)| (name.as_str(), patch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_resolves_in_both_modes() {
        for mode in [Mode::Light, Mode::Dark] {
            let table = PresetTable::builtin(mode);
            assert_eq!(table.names(), BUILTIN_PRESETS.to_vec());
            for name in BUILTIN_PRESETS {
                let patch = builtin_override(name, mode).unwrap();
                assert!(patch.validate().is_ok(), "{name} in {mode}");
            }
        }
    }

    #[test]
    fn compact_spreads_defaults() {
        let table = PresetTable::builtin(Mode::Light);
        let compact = table.get("compact").unwrap();
        let defaults = ThemeConfigValues::default_for(Mode::Light);

        assert_eq!(compact.border_radius, "0.25rem");
        assert!((compact.font_scale - 0.9).abs() < f32::EPSILON);
        assert_eq!(compact.primary_color, defaults.primary_color);
        assert_eq!(compact.changed_keys(&defaults), vec!["borderRadius", "fontScale"]);
    }

    #[test]
    fn color_presets_swap_shades_between_modes() {
        let light = PresetTable::builtin(Mode::Light);
        let dark = PresetTable::builtin(Mode::Dark);

        let light_blue = light.get("blue").unwrap();
        let dark_blue = dark.get("blue").unwrap();
        assert_eq!(light_blue.primary_color, dark_blue.accent_color);
        assert_eq!(light_blue.accent_color, dark_blue.primary_color);
        assert_eq!(dark_blue.background_color, base_preset(Mode::Dark).background_color);
    }

    #[test]
    fn unknown_names_are_absent() {
        assert!(builtin_override("neon", Mode::Light).is_none());
        assert!(PresetTable::builtin(Mode::Dark).get("neon").is_none());
    }

    #[test]
    fn custom_presets_extend_and_replace() {
        let file = PresetFile::from_toml_str(
            r#"
            [light.ocean]
            primaryColor = "199 89% 48%"
            borderRadius = "0.75rem"

            [light.compact]
            borderRadius = "0.125rem"

            [dark.ocean]
            primaryColor = "199 89% 80%"
            "#,
        )
        .unwrap();

        let light = PresetTable::with_custom(Mode::Light, &file);
        assert_eq!(light.names().last(), Some(&"ocean"));
        assert_eq!(light.get("ocean").unwrap().border_radius, "0.75rem");
        assert_eq!(light.get("compact").unwrap().border_radius, "0.125rem");
        assert_eq!(light.names().len(), BUILTIN_PRESETS.len() + 1);

        let dark = PresetTable::with_custom(Mode::Dark, &file);
        assert_eq!(dark.get("ocean").unwrap().primary_color.to_string(), "199 89% 80%");
        assert_eq!(dark.get("ocean").unwrap().border_radius, "0.5rem");
    }

    #[test]
    fn invalid_custom_presets_are_rejected() {
        assert!(PresetFile::from_toml_str("[light.big]\nfontScale = 3.0\n").is_err());
        assert!(PresetFile::from_toml_str("[light.bad]\nprimaryColor = \"blue\"\n").is_err());
        assert!(PresetFile::from_toml_str("not toml at all [").is_err());
    }
}
