//! CSS custom property generator.
//!
//! Emits a single `tokens.css`: a `:root` block of custom properties followed
//! by one `.typo-<device>-<locale>-<style>` utility class per text style.

use tokenshift_parser::keys::to_kebab_case;
use tokenshift_parser::TokenSet;

use crate::emit::{
    banner, css_declarations, css_gradient, escape_single, font_families, walk_colors,
};
use crate::{CodegenError, GeneratorResult};

pub fn generate(set: &TokenSet) -> Result<Vec<GeneratorResult>, CodegenError> {
    let mut css = banner("Design Token CSS Variables");
    css.push('\n');
    css.push_str(":root {\n");

    css.push_str("  /* ========== COLORS ========== */\n");
    walk_colors(&set.colors, &mut |path, hex| {
        css.push_str(&format!(
            "  --color-{}: {hex};\n",
            to_kebab_case(&path.join("-"))
        ));
    });

    let families = font_families(set);
    if !families.is_empty() {
        css.push_str("\n  /* ========== FONT FAMILIES ========== */\n");
        for family in families {
            css.push_str(&format!(
                "  --font-family-{}: '{}', sans-serif;\n",
                to_kebab_case(family),
                escape_single(family)
            ));
        }
    }

    if let Some(gradients) = set.gradients.as_ref().filter(|g| !g.is_empty()) {
        css.push_str("\n  /* ========== GRADIENTS ========== */\n");
        for (category, names) in gradients {
            for (name, token) in names {
                css.push_str(&format!(
                    "  --gradient-{}: {};\n",
                    to_kebab_case(&format!("{category}-{name}")),
                    css_gradient(token)
                ));
            }
        }
    }

    css.push_str("}\n");

    if !set.typography.is_empty() {
        css.push_str("\n/* ========== TYPOGRAPHY CLASSES ========== */\n");
        for (device, locales) in &set.typography {
            css.push_str(&format!("\n/* {} */\n", device.to_uppercase()));
            for (locale, styles) in locales {
                for (style, token) in styles {
                    css.push_str(&format!(".typo-{device}-{locale}-{style} {{\n"));
                    css.push_str(&css_declarations(token, "  "));
                    css.push_str("}\n\n");
                }
            }
        }
    }

    Ok(vec![GeneratorResult::new("tokens.css", "css", css)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tokenshift_parser::parse;

    fn content(raw: serde_json::Value) -> String {
        let results = generate(&parse(&raw)).unwrap();
        assert_eq!(results.len(), 1);
        results.into_iter().next().map(|r| r.content).unwrap_or_default()
    }

    #[test]
    fn test_color_variables_flattened() {
        let css = content(json!({
            "color": {
                "brand": {"primary": {"type": "color", "value": "#3366FFff"}},
                "gray": {"100": {"type": "color", "value": "#f5f5f5"}}
            }
        }));
        assert!(css.contains(
            ":root {\n  /* ========== COLORS ========== */\n  --color-brand-primary: #3366FF;\n  --color-gray-100: #f5f5f5;\n}\n"
        ));
        assert!(!css.contains("TYPOGRAPHY CLASSES"));
    }

    #[test]
    fn test_font_family_variables() {
        let css = content(json!({
            "font": {"pc": {"en": {
                "h1": {"type": "custom-fontStyle", "value": {"fontFamily": "Noto Sans KR", "fontSize": 32, "fontWeight": 700, "lineHeight": 40}},
                "h2": {"type": "custom-fontStyle", "value": {"fontFamily": "Noto Sans KR", "fontSize": 28, "fontWeight": 700, "lineHeight": 36}}
            }}}
        }));
        assert_eq!(
            css.matches("--font-family-noto-sans-kr: 'Noto Sans KR', sans-serif;").count(),
            1
        );
    }

    #[test]
    fn test_typography_classes() {
        let css = content(json!({
            "font": {"mobile": {
                "display6": {"type": "custom-fontStyle", "value": {"fontFamily": "Inter", "fontSize": 40, "fontWeight": 800, "lineHeight": 48, "letterSpacing": -0.5}},
                "kr": {"body": {"type": "custom-fontStyle", "value": {"fontFamily": "Inter", "fontSize": 14, "fontWeight": 400, "lineHeight": 20}}}
            }}
        }));
        assert!(css.contains("\n/* MOBILE */\n"));
        assert!(css.contains(
            ".typo-mobile-default-display6 {\n  font-family: 'Inter', sans-serif;\n  font-size: 40px;\n  font-weight: 800;\n  line-height: 48px;\n  letter-spacing: -0.5px;\n}\n"
        ));
        assert!(css.contains(
            ".typo-mobile-kr-body {\n  font-family: 'Inter', sans-serif;\n  font-size: 14px;\n  font-weight: 400;\n  line-height: 20px;\n}\n"
        ));
    }

    #[test]
    fn test_gradient_variables() {
        let css = content(json!({
            "gradient": {"brand": {"hero": {
                "type": "custom-gradient",
                "value": {"gradientType": "linear", "rotation": 45, "stops": [
                    {"position": 0, "color": "#ff0000"},
                    {"position": 1, "color": "#0000ff"}
                ]}
            }}}
        }));
        assert!(css.contains(
            "  --gradient-brand-hero: linear-gradient(45deg, #ff0000 0%, #0000ff 100%);\n"
        ));
    }

    #[test]
    fn test_gradient_without_stops_not_emitted() {
        let css = content(json!({
            "gradient": {"hero": {
                "type": "custom-gradient",
                "value": {"gradientType": "linear", "rotation": 90}
            }}
        }));
        assert!(!css.contains("--gradient-"));
        assert!(!css.contains("GRADIENTS"));
    }

    #[test]
    fn test_font_family_quotes_escaped() {
        let css = content(json!({
            "font": {"pc": {"en": {
                "h1": {"type": "custom-fontStyle", "value": {"fontFamily": "O'Neil Sans", "fontSize": 32, "fontWeight": 700, "lineHeight": 40}}
            }}}
        }));
        assert!(css.contains("--font-family-o-neil-sans: 'O\\'Neil Sans', sans-serif;"));
        assert!(css.contains("  font-family: 'O\\'Neil Sans', sans-serif;\n"));
    }

    #[test]
    fn test_empty_set_still_has_root() {
        let css = content(json!({}));
        assert!(css.contains(":root {\n  /* ========== COLORS ========== */\n}\n"));
    }
}
