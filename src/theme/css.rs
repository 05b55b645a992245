//! Projection of theme values onto CSS custom properties.
//!
//! The presentation layer reads a fixed set of variables. Colors are written
//! as raw HSL triples and consumed as `hsl(var(--primary))`; the `*-foreground`
//! variables that the configuration does not cover are fixed per mode.

use crate::domain::{Hsl, Mode};
use crate::theme::values::ThemeConfigValues;
use std::fmt::Write as _;

/// Ordered list of `(--name, value)` pairs derived from a theme config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleVariables {
    vars: Vec<(&'static str, String)>,
}

/// Foreground colors that are not configurable: `(primary, secondary/accent, muted)`.
const fn fixed_foregrounds(mode: Mode) -> (Hsl, Hsl, Hsl) {
    match mode {
        Mode::Light => (
            Hsl::raw(210.0, 40.0, 98.0),
            Hsl::raw(222.2, 47.4, 11.2),
            Hsl::raw(215.4, 16.3, 46.9),
        ),
        Mode::Dark => (
            Hsl::raw(222.2, 47.4, 11.2),
            Hsl::raw(210.0, 40.0, 98.0),
            Hsl::raw(215.0, 20.2, 65.1),
        ),
    }
}

impl StyleVariables {
    /// Projects every key of `config` for `mode`.
    #[must_use]
    pub fn project(config: &ThemeConfigValues, mode: Mode) -> Self {
        let (primary_fg, secondary_fg, muted_fg) = fixed_foregrounds(mode);
        let color = |c: &Hsl| c.to_string();

        let vars = vec![
            ("--primary", color(&config.primary_color)),
            ("--primary-foreground", color(&primary_fg)),
            ("--secondary", color(&config.secondary_color)),
            ("--secondary-foreground", color(&secondary_fg)),
            ("--accent", color(&config.accent_color)),
            ("--accent-foreground", color(&secondary_fg)),
            ("--muted", color(&config.muted_color)),
            ("--muted-foreground", color(&muted_fg)),
            ("--background", color(&config.background_color)),
            ("--foreground", color(&config.text_color)),
            ("--card", color(&config.card_color)),
            ("--card-foreground", color(&config.text_color)),
            ("--border", color(&config.border_color)),
            ("--input", color(&config.border_color)),
            ("--radius", config.border_radius.clone()),
            ("--font-scale", config.font_scale.to_string()),
            ("--font-family", config.font_family.clone()),
            ("--heading-font-family", config.heading_font_family.clone()),
            ("--letter-spacing", format!("{}px", config.letter_spacing)),
            ("--line-height", config.line_height.to_string()),
        ];

        Self { vars }
    }

    /// Value of one variable, e.g. `get("--radius")`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.vars.iter().map(|(n, v)| (*n, v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Renders the variables as a `:root { ... }` rule.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in &self.vars {
            let _ = writeln!(css, "  {name}: {value};");
        }
        css.push('}');
        css.push('\n');
        css
    }
}
