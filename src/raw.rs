use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::error::IndacoResult;
use crate::theme::Theme;

/// Style attributes of a raw rule, as authored in theme JSON
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawStyle {
    pub color: Option<String>,
    #[serde(rename = "fontStyle")]
    pub font_style: Option<String>,
    pub opacity: Option<f64>,
}

/// The base colors applied to untokenized text
#[derive(Debug, Clone, Deserialize)]
pub struct RawPlain {
    pub color: String,
    #[serde(rename = "backgroundColor")]
    pub background_color: String,
}

/// Custom deserializer for the types field that can be a string or an array
fn deserialize_string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct TypesVisitor;

    impl<'de> Visitor<'de> for TypesVisitor {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("string or array of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_owned()])
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: de::SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }
    }

    deserializer.deserialize_any(TypesVisitor)
}

/// One rule of a raw theme: the token types it covers and their style
#[derive(Debug, Clone, Deserialize)]
pub struct RawRule {
    #[serde(deserialize_with = "deserialize_string_or_vec", default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub style: RawStyle,
}

/// Raw theme loaded from a JSON theme file
#[derive(Debug, Clone, Deserialize)]
pub struct RawTheme {
    pub name: String,
    pub plain: RawPlain,
    /// Token style rules, in declaration order
    pub styles: Vec<RawRule>,
}

impl RawTheme {
    /// Reads a raw theme from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> IndacoResult<Self> {
        let file = File::open(path)?;
        let theme = serde_json::from_reader(file)?;
        Ok(theme)
    }

    /// Reads a raw theme from a JSON string.
    pub fn from_json(json: &str) -> IndacoResult<Self> {
        let theme = serde_json::from_str(json)?;
        Ok(theme)
    }

    /// Compile this raw theme into an immutable lookup table
    pub fn compile(self) -> IndacoResult<Theme> {
        Theme::from_raw_theme(self)
    }
}
