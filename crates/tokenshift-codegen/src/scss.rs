//! SCSS generator.
//!
//! Produces `_colors.scss` (flat variables plus a nested `$colors` map),
//! `_typography.scss` (variables and one mixin per text style) and an
//! `_index.scss` that forwards whichever partials were emitted.

use tokenshift_parser::keys::to_kebab_case;
use tokenshift_parser::TokenSet;

use crate::emit::{
    css_declarations, css_gradient, emit_nested, escape_single, font_families, font_sizes,
    line_banner, walk_colors, NestedStyle,
};
use crate::{format_number, px, CodegenError, GeneratorResult};

/// Font weights every typography partial declares.
const FONT_WEIGHTS: [(&str, u32); 3] = [("regular", 400), ("medium", 500), ("bold", 700)];

pub fn generate(set: &TokenSet) -> Result<Vec<GeneratorResult>, CodegenError> {
    let mut results = vec![GeneratorResult::new("_colors.scss", "scss", colors_partial(set))];

    let has_typography = !set.typography.is_empty();
    if has_typography {
        results.push(GeneratorResult::new(
            "_typography.scss",
            "scss",
            typography_partial(set),
        ));
    }

    let mut index = line_banner("Design Tokens");
    index.push('\n');
    index.push_str("@forward 'colors';\n");
    if has_typography {
        index.push_str("@forward 'typography';\n");
    }
    results.push(GeneratorResult::new("_index.scss", "scss", index));

    Ok(results)
}

/// `'key': value` entries inside a Sass map.
struct SassMap;

impl NestedStyle for SassMap {
    fn leaf(&self, out: &mut String, indent: &str, key: &str, value: &str, last: bool) {
        let comma = if last { "" } else { "," };
        out.push_str(&format!("{indent}'{key}': {value}{comma}\n"));
    }

    fn open(&self, out: &mut String, indent: &str, key: &str) {
        out.push_str(&format!("{indent}'{key}': (\n"));
    }

    fn close(&self, out: &mut String, indent: &str, last: bool) {
        let comma = if last { "" } else { "," };
        out.push_str(&format!("{indent}){comma}\n"));
    }
}

fn colors_partial(set: &TokenSet) -> String {
    let mut out = line_banner("Design Token Colors");
    out.push('\n');

    walk_colors(&set.colors, &mut |path, hex| {
        out.push_str(&format!(
            "$color-{}: {hex};\n",
            to_kebab_case(&path.join("-"))
        ));
    });

    if let Some(gradients) = set.gradients.as_ref().filter(|g| !g.is_empty()) {
        out.push_str("\n// Gradients\n");
        for (category, names) in gradients {
            for (name, token) in names {
                out.push_str(&format!(
                    "$gradient-{}: {};\n",
                    to_kebab_case(&format!("{category}-{name}")),
                    css_gradient(token)
                ));
            }
        }
    }

    out.push_str("\n// Color Map for programmatic access\n");
    out.push_str("$colors: (\n");
    emit_nested(&set.colors, &SassMap, 1, &mut out);
    out.push_str(");\n");
    out
}

fn typography_partial(set: &TokenSet) -> String {
    let mut out = line_banner("Design Token Typography");
    out.push('\n');

    out.push_str("// Font Families\n");
    for family in font_families(set) {
        out.push_str(&format!(
            "$font-family-{}: '{}', sans-serif;\n",
            to_kebab_case(family),
            escape_single(family)
        ));
    }

    out.push_str("\n// Font Sizes\n");
    for size in font_sizes(set) {
        out.push_str(&format!(
            "$font-size-{}: {};\n",
            to_kebab_case(&format_number(size)),
            px(size)
        ));
    }

    out.push_str("\n// Font Weights\n");
    for (name, weight) in FONT_WEIGHTS {
        out.push_str(&format!("$font-weight-{name}: {weight};\n"));
    }

    out.push_str("\n// Typography Mixins\n");
    for (device, locale, style, token) in set.typography_styles() {
        out.push_str(&format!("@mixin typo-{device}-{locale}-{style} {{\n"));
        out.push_str(&css_declarations(token, "  "));
        out.push_str("}\n\n");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tokenshift_parser::parse;

    fn style(family: &str, size: u32) -> serde_json::Value {
        json!({"type": "custom-fontStyle", "value": {"fontFamily": family, "fontSize": size, "fontWeight": 400, "lineHeight": 20}})
    }

    #[test]
    fn test_color_variables_and_map() {
        let set = parse(&json!({
            "color": {
                "brand": {
                    "primary": {"type": "color", "value": "#3366FF"},
                    "dark": {"900": {"type": "color", "value": "#000033"}}
                },
                "white": {"type": "color", "value": "#ffffff"}
            }
        }));
        let out = colors_partial(&set);
        assert!(out.contains("$color-brand-primary: #3366FF;\n$color-brand-dark-900: #000033;\n$color-white: #ffffff;\n"));
        assert!(out.contains(
            "$colors: (\n  'brand': (\n    'primary': #3366FF,\n    'dark': (\n      '900': #000033\n    )\n  ),\n  'white': #ffffff\n);\n"
        ));
    }

    #[test]
    fn test_empty_color_map() {
        let out = colors_partial(&TokenSet::default());
        assert!(out.ends_with("$colors: (\n);\n"));
    }

    #[test]
    fn test_typography_variables_and_mixins() {
        let set = parse(&json!({
            "font": {"mobile": {"kr": {
                "title": style("Pretendard", 24),
                "body": style("Pretendard", 14),
                "caption": style("Inter", 12)
            }}}
        }));
        let out = typography_partial(&set);
        assert!(out.contains(
            "$font-family-pretendard: 'Pretendard', sans-serif;\n$font-family-inter: 'Inter', sans-serif;\n"
        ));
        assert!(out.contains("$font-size-12: 12px;\n$font-size-14: 14px;\n$font-size-24: 24px;\n"));
        assert!(out.contains("$font-weight-bold: 700;\n"));
        assert!(out.contains("@mixin typo-mobile-kr-title {\n  font-family: 'Pretendard', sans-serif;\n"));
    }

    #[test]
    fn test_index_forwards_only_emitted_partials() {
        let colors_only = parse(&json!({"color": {"white": {"type": "color", "value": "#fff"}}}));
        let results = generate(&colors_only).unwrap();
        let names: Vec<&str> = results.iter().map(|r| r.filename.as_str()).collect();
        assert_eq!(names, vec!["_colors.scss", "_index.scss"]);
        assert!(!results[1].content.contains("typography"));

        let full = parse(&json!({"font": {"pc": {"en": {"h1": style("Inter", 32)}}}}));
        let results = generate(&full).unwrap();
        assert!(results[2].content.contains("@forward 'colors';\n@forward 'typography';\n"));
    }

    #[test]
    fn test_fractional_font_size_variable() {
        let set = parse(&json!({"font": {"pc": {"en": {"h1": style("Inter", 0)}}}}));
        assert!(typography_partial(&set).contains("$font-size-0: 0px;"));

        let set = parse(&json!({"font": {"pc": {"en": {"h1": {
            "type": "custom-fontStyle",
            "value": {"fontFamily": "Inter", "fontSize": 13.5, "fontWeight": 400, "lineHeight": 18}
        }}}}}));
        assert!(typography_partial(&set).contains("$font-size-13-5: 13.5px;"));
    }
}
