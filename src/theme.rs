use crate::color::Color;
use crate::error::{Error, IndacoResult};
use crate::font_style::FontStyle;
use crate::raw::{RawStyle, RawTheme};
use crate::style::{Opacity, Style, StyleModifier};

/// The base style a theme applies to untokenized text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlainStyle {
    /// Default text color, also the fallback for unmatched token types
    pub foreground: Color,
    /// Background color of the whole code block
    pub background: Color,
}

/// A single compiled rule: the token types it covers and the style it applies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeRule {
    pub types: Vec<String>,
    pub style: StyleModifier,
}

impl ThemeRule {
    fn matches(&self, token_type: &str) -> bool {
        self.types.iter().any(|t| t == token_type)
    }
}

impl TryFrom<RawStyle> for StyleModifier {
    type Error = Error;

    fn try_from(raw: RawStyle) -> Result<Self, Error> {
        let foreground = match &raw.color {
            Some(s) => Some(Color::parse(s)?),
            None => None,
        };
        let font_style = raw.font_style.as_deref().map(FontStyle::from_str);
        let opacity = match raw.opacity {
            Some(value) => Some(Opacity::from_f64(value)?),
            None => None,
        };

        Ok(Self {
            foreground,
            font_style,
            opacity,
        })
    }
}

/// An immutable theme variant, compiled from a [`RawTheme`] and ready for lookups.
///
/// Rule order is significant: when a token type appears in several rules, the
/// last one in declaration order wins. Themes deliberately rely on this to
/// redefine types further down the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    /// Default style for tokens with no matching rule
    pub plain: PlainStyle,
    rules: Vec<ThemeRule>,
}

impl Theme {
    pub fn from_raw_theme(raw: RawTheme) -> IndacoResult<Self> {
        let plain = PlainStyle {
            foreground: Color::parse(&raw.plain.color)?,
            background: Color::parse(&raw.plain.background_color)?,
        };

        let mut rules = Vec::with_capacity(raw.styles.len());
        for raw_rule in raw.styles {
            // A rule with no types can never match, it's inert rather than an error
            if raw_rule.types.is_empty() {
                #[cfg(feature = "debug")]
                log::debug!("theme {}: dropping a style rule with no token types", raw.name);
                continue;
            }

            rules.push(ThemeRule {
                types: raw_rule.types,
                style: StyleModifier::try_from(raw_rule.style)?,
            });
        }

        Ok(Theme {
            name: raw.name,
            plain,
            rules,
        })
    }

    /// Resolves the style for the given token type.
    ///
    /// Scans the rules back to front so the last matching rule wins, and
    /// merges its style over the plain defaults. Token types with no matching
    /// rule get the plain foreground with no extra attributes. Total over all
    /// strings, never fails.
    pub fn resolve(&self, token_type: &str) -> Style {
        let base = Style {
            foreground: self.plain.foreground,
            font_style: FontStyle::empty(),
            opacity: None,
        };

        match self.rules.iter().rev().find(|rule| rule.matches(token_type)) {
            Some(rule) => rule.style.apply_to(&base),
            None => base,
        }
    }

    /// The compiled rules, in declaration order
    pub fn rules(&self) -> &[ThemeRule] {
        &self.rules
    }

    /// Every token type named by a rule, in declaration order, with duplicates
    pub(crate) fn token_types(&self) -> impl Iterator<Item = &str> {
        self.rules
            .iter()
            .flat_map(|rule| rule.types.iter().map(String::as_str))
    }
}
