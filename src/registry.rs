use std::path::Path;

use crate::error::IndacoResult;
use crate::raw::RawTheme;
use crate::style::Style;
use crate::theme::Theme;

// We ship the two themes of the docs site inside the crate
const BUILTIN_LIGHT: &str = include_str!("../themes/light.json");
const BUILTIN_DARK: &str = include_str!("../themes/dark.json");

/// Which of the two theme variants to resolve against.
///
/// Picking one is up to the surrounding page: the registry only answers
/// lookups, it doesn't know which variant is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    Light,
    #[default]
    Dark,
}

impl Variant {
    pub fn from_str(s: &str) -> Variant {
        if s.eq_ignore_ascii_case("light") {
            Variant::Light
        } else {
            Variant::Dark
        }
    }
}

/// The main struct in indaco.
///
/// Holds the light and dark themes and resolves token styles against either.
/// It is built once at startup and only read afterwards, so it can be shared
/// freely between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    light: Theme,
    dark: Theme,
}

impl Registry {
    pub fn new(light: Theme, dark: Theme) -> Self {
        Self { light, dark }
    }

    /// Compiles the light and dark themes shipped with the crate.
    pub fn builtin() -> IndacoResult<Self> {
        Ok(Self::new(
            RawTheme::from_json(BUILTIN_LIGHT)?.compile()?,
            RawTheme::from_json(BUILTIN_DARK)?.compile()?,
        ))
    }

    /// Reads and compiles both themes from JSON files.
    pub fn from_paths(light: impl AsRef<Path>, dark: impl AsRef<Path>) -> IndacoResult<Self> {
        Ok(Self::new(
            RawTheme::load_from_file(light)?.compile()?,
            RawTheme::load_from_file(dark)?.compile()?,
        ))
    }

    /// The theme for the given variant
    pub fn theme(&self, variant: Variant) -> &Theme {
        match variant {
            Variant::Light => &self.light,
            Variant::Dark => &self.dark,
        }
    }

    /// Resolves the style for a token type under the given variant.
    ///
    /// This is the whole point of the registry: any token type string is a
    /// valid input and gets a concrete style back, falling back to the
    /// variant's plain style when no rule covers it.
    pub fn resolve_style(&self, variant: Variant, token_type: &str) -> Style {
        self.theme(variant).resolve(token_type)
    }

    /// Generates CSS stylesheet content for one variant.
    /// All classes will have the given prefix.
    ///
    /// Emitting one stylesheet per variant lets the page switch themes by
    /// swapping stylesheets, which is how the surrounding site does it.
    pub fn generate_css(&self, variant: Variant, prefix: &str) -> String {
        crate::css::generate_css(self.theme(variant), prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::font_style::FontStyle;
    use crate::style::Opacity;

    fn color(s: &str) -> Color {
        Color::parse(s).unwrap()
    }

    #[test]
    fn builtin_themes_compile() {
        let registry = Registry::builtin().unwrap();
        assert_eq!(registry.theme(Variant::Light).name, "light");
        assert_eq!(registry.theme(Variant::Dark).name, "dark");
        assert_eq!(
            registry.theme(Variant::Dark).plain.background,
            color("#0A0E33")
        );
    }

    #[test]
    fn dark_variant_known_types() {
        let registry = Registry::builtin().unwrap();

        let style = registry.resolve_style(Variant::Dark, "function");
        assert_eq!(style.foreground, color("rgb(80, 250, 123)"));
        assert!(style.font_style.is_empty());

        let style = registry.resolve_style(Variant::Dark, "keyword");
        assert_eq!(style.foreground, color("#FFD957"));
        assert_eq!(style.font_style, FontStyle::ITALIC);
    }

    #[test]
    fn dark_variant_unknown_type_falls_back_to_plain() {
        let registry = Registry::builtin().unwrap();
        let style = registry.resolve_style(Variant::Dark, "unknown-category");
        assert_eq!(style.foreground, color("#E6DEC3"));
        assert!(style.font_style.is_empty());
        assert_eq!(style.opacity, None);
    }

    #[test]
    fn later_rules_override_earlier_ones() {
        let registry = Registry::builtin().unwrap();

        // "tag", "selector" and "keyword" all appear twice in the light theme
        // and the second rule must win
        for ty in ["tag", "selector", "keyword"] {
            let style = registry.resolve_style(Variant::Light, ty);
            assert_eq!(style.foreground, color("#7A360C"), "for type '{}'", ty);
        }

        // Same for "punctuation" in the dark theme
        let style = registry.resolve_style(Variant::Dark, "punctuation");
        assert_eq!(style.foreground, color("#972C99"));
    }

    #[test]
    fn light_namespace_only_sets_opacity() {
        let registry = Registry::builtin().unwrap();
        let style = registry.resolve_style(Variant::Light, "namespace");
        assert_eq!(style.foreground, color("#393A34"));
        assert_eq!(style.opacity, Some(Opacity::from_f64(0.7).unwrap()));
    }

    #[test]
    fn resolution_is_idempotent() {
        let registry = Registry::builtin().unwrap();
        assert_eq!(
            registry.resolve_style(Variant::Dark, "string"),
            registry.resolve_style(Variant::Dark, "string")
        );
    }

    #[test]
    fn variant_from_str() {
        assert_eq!(Variant::from_str("light"), Variant::Light);
        assert_eq!(Variant::from_str("LIGHT"), Variant::Light);
        assert_eq!(Variant::from_str("dark"), Variant::Dark);
        // Anything unrecognized gets the default
        assert_eq!(Variant::from_str("solarized"), Variant::Dark);
    }
}
