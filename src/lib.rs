mod color;
mod css;
mod error;
mod font_style;
mod raw;
mod registry;
mod style;
mod theme;

pub use color::Color;
pub use error::Error;
pub use font_style::FontStyle;
pub use raw::{RawPlain, RawRule, RawStyle, RawTheme};
pub use registry::{Registry, Variant};
pub use style::{Opacity, Style, StyleModifier};
pub use theme::{PlainStyle, Theme, ThemeRule};
