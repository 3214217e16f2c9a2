use crate::theme::Theme;

/// Generates a stylesheet for a theme: a `plain` class for the code block
/// itself and one class per token type, all with the given prefix.
///
/// Token types are emitted in first-seen order. Since each class gets the
/// fully resolved style, the last-rule-wins semantics of the theme carry over
/// into the stylesheet even for types declared twice.
pub(crate) fn generate_css(theme: &Theme, prefix: &str) -> String {
    let mut out = String::new();

    push_block(
        &mut out,
        prefix,
        "plain",
        &[
            theme.plain.foreground.as_css_color_property(),
            theme.plain.background.as_css_bg_color_property(),
        ],
    );

    let mut seen: Vec<&str> = Vec::new();
    for token_type in theme.token_types() {
        if seen.contains(&token_type) {
            continue;
        }
        seen.push(token_type);

        let declarations = theme.resolve(token_type).css_declarations();
        push_block(&mut out, prefix, token_type, &declarations);
    }

    out
}

fn push_block(out: &mut String, prefix: &str, class: &str, declarations: &[String]) {
    out.push_str(&format!(".{}{} {{\n", prefix, class));
    for declaration in declarations {
        out.push_str(&format!("  {}\n", declaration));
    }
    out.push_str("}\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::RawTheme;
    use crate::registry::{Registry, Variant};

    #[test]
    fn test_generate_css() {
        let json = r##"{
            "name": "test",
            "plain": {"color": "#393A34", "backgroundColor": "#F6F8FA"},
            "styles": [
                {"types": ["comment"], "style": {"color": "#999988", "fontStyle": "italic"}},
                {"types": ["namespace"], "style": {"opacity": 0.7}},
                {"types": ["keyword"], "style": {"color": "#00A4DB"}},
                {"types": ["keyword"], "style": {"color": "#7A360C"}}
            ]
        }"##;
        let theme = RawTheme::from_json(json).unwrap().compile().unwrap();

        let expected = concat!(
            ".tok-plain {\n",
            "  color: #393A34;\n",
            "  background-color: #F6F8FA;\n",
            "}\n",
            ".tok-comment {\n",
            "  color: #999988;\n",
            "  font-style: italic;\n",
            "}\n",
            ".tok-namespace {\n",
            "  color: #393A34;\n",
            "  opacity: 0.7;\n",
            "}\n",
            ".tok-keyword {\n",
            "  color: #7A360C;\n",
            "}\n",
        );
        assert_eq!(generate_css(&theme, "tok-"), expected);
    }

    #[test]
    fn test_builtin_css_applies_overrides() {
        let registry = Registry::builtin().unwrap();

        let light = registry.generate_css(Variant::Light, "tok-");
        // The later rule's color wins, the earlier "#0E6A6E" never shows up
        // under the tag class
        assert!(light.contains(".tok-tag {\n  color: #7A360C;\n}\n"));
        assert!(light.contains(".tok-function {\n  color: #0E6A6E;\n}\n"));

        let dark = registry.generate_css(Variant::Dark, "tok-");
        assert!(dark.contains(".tok-punctuation {\n  color: #972C99;\n}\n"));
        assert!(dark.contains(".tok-keyword {\n  color: #FFD957;\n  font-style: italic;\n}\n"));
        assert!(dark.contains(".tok-plain {\n  color: #E6DEC3;\n  background-color: #0A0E33;\n}\n"));
    }
}
