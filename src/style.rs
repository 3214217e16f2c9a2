use crate::color::Color;
use crate::error::{Error, IndacoResult};
use crate::font_style::FontStyle;

/// Opacity stored in hundredths (70 is the CSS value `0.7`).
///
/// Kept integral so styles stay `Copy + Eq + Hash`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Opacity(u8);

impl Opacity {
    /// Creates an opacity from a CSS-style fraction.
    ///
    /// Errors if the value is outside of `[0.0, 1.0]`.
    pub fn from_f64(value: f64) -> IndacoResult<Self> {
        if !(0.0..=1.0).contains(&value) {
            return Err(Error::InvalidOpacity(value));
        }
        Ok(Self((value * 100.0).round() as u8))
    }

    /// The opacity as the fraction CSS expects
    pub fn as_f32(self) -> f32 {
        f32::from(self.0) / 100.0
    }

    pub(crate) fn as_css_property(self) -> String {
        format!("opacity: {};", self.as_f32())
    }
}

/// A concrete style for a single token span, after rule resolution.
///
/// The foreground always has a value: unmatched token types inherit the
/// theme's plain foreground.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Style {
    /// Foreground (text) color
    pub foreground: Color,
    /// Font styling flags
    pub font_style: FontStyle,
    /// Span opacity, when a rule sets one
    pub opacity: Option<Opacity>,
}

impl Style {
    /// The CSS declarations for this style, one string per declaration.
    pub fn css_declarations(&self) -> Vec<String> {
        let mut declarations = vec![self.foreground.as_css_color_property()];
        declarations.extend(self.font_style.css_attributes().map(str::to_string));
        if let Some(opacity) = self.opacity {
            declarations.push(opacity.as_css_property());
        }
        declarations
    }

    /// Renders this style as an inline CSS string.
    pub fn as_css(&self) -> String {
        self.css_declarations().concat()
    }
}

/// A style with optional values, as theme rules declare them.
///
/// Unset fields inherit from the base style the modifier is applied to.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct StyleModifier {
    /// Optional foreground color
    pub foreground: Option<Color>,
    /// Optional font style
    pub font_style: Option<FontStyle>,
    /// Optional span opacity
    pub opacity: Option<Opacity>,
}

impl StyleModifier {
    /// Apply this modifier to a base style, explicit fields winning.
    pub fn apply_to(&self, base: &Style) -> Style {
        Style {
            foreground: self.foreground.unwrap_or(base.foreground),
            font_style: self.font_style.unwrap_or(base.font_style),
            opacity: self.opacity.or(base.opacity),
        }
    }
}
