//! Vanilla Extract generator.
//!
//! Emits a global theme contract (`tokens.css.ts`), one `style()` per text
//! style (`typography.css.ts`), a sprinkles setup and a usage example.

use indexmap::IndexMap;
use tokenshift_parser::keys::{family_slug, to_camel_case};
use tokenshift_parser::TokenSet;

use crate::emit::{
    banner, escape_single, font_families, font_sizes, js_key, js_literal, line_heights,
    walk_colors,
};
use crate::{format_number, px, CodegenError, GeneratorResult};

/// Labels assigned to font sizes in ascending order; sizes past the end are
/// keyed by their own value.
const SIZE_LABELS: [&str; 10] = ["xs", "sm", "md", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl"];

const SPRINKLES: &str = r#"
import { defineProperties, createSprinkles } from '@vanilla-extract/sprinkles';
import { vars } from './tokens.css';

const responsiveProperties = defineProperties({
  conditions: {
    mobile: {},
    tablet: { '@media': 'screen and (min-width: 768px)' },
    desktop: { '@media': 'screen and (min-width: 1024px)' },
  },
  defaultCondition: 'mobile',
  properties: {
    color: vars.color,
    backgroundColor: vars.color,
    fontSize: vars.fontSize,
    fontFamily: vars.font.family,
    fontWeight: vars.fontWeight,
    lineHeight: vars.lineHeight,
  },
});

export const sprinkles = createSprinkles(responsiveProperties);

export type Sprinkles = Parameters<typeof sprinkles>[0];
"#;

pub fn generate(set: &TokenSet) -> Result<Vec<GeneratorResult>, CodegenError> {
    let mut results = vec![GeneratorResult::new(
        "tokens.css.ts",
        "typescript",
        tokens_file(set)?,
    )];

    if !set.typography.is_empty() {
        results.push(GeneratorResult::new(
            "typography.css.ts",
            "typescript",
            typography_file(set),
        ));
    }

    let mut sprinkles = banner("Vanilla Extract Sprinkles");
    sprinkles.push_str(SPRINKLES);
    results.push(GeneratorResult::new("sprinkles.css.ts", "typescript", sprinkles));

    results.push(GeneratorResult::new("example.ts", "typescript", example_file(set)));

    Ok(results)
}

/// Colors flattened to dot-joined paths: `brand.primary` → hex.
fn flat_colors(set: &TokenSet) -> IndexMap<String, String> {
    let mut flat = IndexMap::new();
    walk_colors(&set.colors, &mut |path, hex| {
        flat.insert(path.join("."), hex.to_string());
    });
    flat
}

/// Font sizes keyed by their label in ascending order.
pub fn labelled_font_sizes(set: &TokenSet) -> IndexMap<String, String> {
    font_sizes(set)
        .into_iter()
        .enumerate()
        .map(|(i, size)| {
            let label = SIZE_LABELS
                .get(i)
                .map(|l| l.to_string())
                .unwrap_or_else(|| format_number(size));
            (label, px(size))
        })
        .collect()
}

fn tokens_file(set: &TokenSet) -> Result<String, CodegenError> {
    let families: IndexMap<String, String> = font_families(set)
        .into_iter()
        .map(|family| {
            (
                family_slug(family),
                format!("'{}', sans-serif", escape_single(family)),
            )
        })
        .collect();
    let line_heights: IndexMap<String, String> = line_heights(set)
        .into_iter()
        .map(|height| (format_number(height), px(height)))
        .collect();

    let mut out = banner("Vanilla Extract Design Tokens");
    out.push_str("\nimport { createGlobalTheme } from '@vanilla-extract/css';\n\n");
    out.push_str("export const vars = createGlobalTheme(':root', {\n");
    out.push_str(&format!("  color: {},\n\n", js_literal(&flat_colors(set), 1)?));
    out.push_str("  font: {\n");
    out.push_str(&format!("    family: {},\n", js_literal(&families, 2)?));
    out.push_str("  },\n\n");
    out.push_str(&format!(
        "  fontSize: {},\n\n",
        js_literal(&labelled_font_sizes(set), 1)?
    ));
    out.push_str(&format!("  lineHeight: {},\n\n", js_literal(&line_heights, 1)?));
    out.push_str("  fontWeight: {\n");
    out.push_str("    regular: '400',\n");
    out.push_str("    medium: '500',\n");
    out.push_str("    bold: '700',\n");
    out.push_str("  },\n");
    out.push_str("});\n");
    Ok(out)
}

/// Exported identifier for a text style: `mobileKrTitle1700`.
pub fn style_ident(device: &str, locale: &str, style: &str) -> String {
    to_camel_case(&format!("{device}-{locale}-{}", style.replace('-', "")))
}

fn typography_file(set: &TokenSet) -> String {
    let mut out = banner("Typography Recipes for Vanilla Extract");
    out.push_str("\nimport { style } from '@vanilla-extract/css';\n\n");

    for (device, locale, style, token) in set.typography_styles() {
        out.push_str(&format!(
            "export const {} = style({{\n",
            style_ident(device, locale, style)
        ));
        out.push_str(&format!(
            "  fontFamily: '{}, sans-serif',\n",
            escape_single(&token.font_family)
        ));
        out.push_str(&format!("  fontSize: '{}',\n", px(token.font_size)));
        out.push_str(&format!("  fontWeight: {},\n", format_number(token.font_weight)));
        out.push_str(&format!("  lineHeight: '{}',\n", px(token.line_height)));
        if let Some(spacing) = token.letter_spacing() {
            out.push_str(&format!("  letterSpacing: '{}',\n", px(spacing)));
        }
        out.push_str("});\n\n");
    }

    out.push_str("// Typography object for convenient access\n");
    out.push_str("export const typography = {\n");
    for (device, locales) in &set.typography {
        out.push_str(&format!("  {}: {{\n", js_key(device)));
        for (locale, styles) in locales {
            out.push_str(&format!("    {}: {{\n", js_key(locale)));
            for style in styles.keys() {
                out.push_str(&format!(
                    "      {}: {},\n",
                    js_key(&style.replace('-', "")),
                    style_ident(device, locale, style)
                ));
            }
            out.push_str("    },\n");
        }
        out.push_str("  },\n");
    }
    out.push_str("};\n");

    out
}

fn example_file(set: &TokenSet) -> String {
    let color = flat_colors(set)
        .keys()
        .next()
        .map(|path| format!("vars.color['{}']", escape_single(path)))
        .unwrap_or_else(|| "'inherit'".to_string());
    let first_style = set
        .typography_styles()
        .next()
        .map(|(device, locale, style, _)| style_ident(device, locale, style));

    let mut out = banner("Vanilla Extract Usage Example");
    out.push_str("\nimport { style } from '@vanilla-extract/css';\n");
    out.push_str("import { vars } from './tokens.css';\n");
    if let Some(ident) = &first_style {
        out.push_str(&format!("import {{ {ident} }} from './typography.css';\n"));
    }
    out.push_str("import { sprinkles } from './sprinkles.css';\n\n");

    out.push_str("export const container = style({\n");
    out.push_str(&format!("  color: {color},\n"));
    out.push_str("  padding: '16px',\n");
    out.push_str("});\n\n");

    if let Some(ident) = &first_style {
        out.push_str(&format!("export const title = style([{ident}, {{ color: {color} }}]);\n\n"));
    }

    out.push_str("export const box = style([\n");
    out.push_str("  sprinkles({\n");
    out.push_str("    fontWeight: { mobile: 'regular', desktop: 'bold' },\n");
    out.push_str("  }),\n");
    out.push_str("]);\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tokenshift_parser::parse;

    fn style(size: f64, line_height: f64) -> serde_json::Value {
        json!({"type": "custom-fontStyle", "value": {"fontFamily": "Pretendard", "fontSize": size, "fontWeight": 700, "lineHeight": line_height}})
    }

    fn set() -> TokenSet {
        parse(&json!({
            "color": {"brand": {"primary": {"type": "color", "value": "#3366FF"}}},
            "font": {"mobile": {"kr": {
                "title1-700": style(14.0, 20.0),
                "caption": style(12.0, 16.0),
                "headline": style(16.0, 24.0)
            }}}
        }))
    }

    #[test]
    fn test_font_sizes_labelled_in_ascending_order() {
        let sizes = labelled_font_sizes(&set());
        let pairs: Vec<(&str, &str)> = sizes.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(pairs, vec![("xs", "12px"), ("sm", "14px"), ("md", "16px")]);
    }

    #[test]
    fn test_font_sizes_past_labels_use_value() {
        let mut font = serde_json::Map::new();
        for size in 10..=21 {
            font.insert(format!("s{size}"), style(size as f64, 20.0));
        }
        let set = parse(&json!({"font": {"pc": {"en": font}}}));
        let sizes = labelled_font_sizes(&set);
        assert_eq!(sizes.len(), 12);
        assert_eq!(sizes["5xl"], "19px");
        assert_eq!(sizes["20"], "20px");
        assert_eq!(sizes["21"], "21px");
    }

    #[test]
    fn test_tokens_file() {
        let out = tokens_file(&set()).unwrap();
        assert!(out.contains("  color: {\n    \"brand.primary\": \"#3366FF\"\n  },\n"));
        assert!(out.contains("    family: {\n      \"pretendard\": \"'Pretendard', sans-serif\"\n    },\n"));
        assert!(out.contains("  lineHeight: {\n    \"16\": \"16px\",\n    \"20\": \"20px\",\n    \"24\": \"24px\"\n  },\n"));
    }

    #[test]
    fn test_style_ident() {
        assert_eq!(style_ident("mobile", "kr", "title1-700"), "mobileKrTitle1700");
    }

    #[test]
    fn test_style_ident_keeps_hangul() {
        assert_eq!(style_ident("mobile", "kr", "제목"), "mobileKr제목");
        assert_ne!(style_ident("mobile", "kr", "제목"), style_ident("mobile", "kr", "본문"));
    }

    #[test]
    fn test_hangul_styles_export_once_each() {
        let korean = parse(&json!({"font": {"mobile": {"kr": {
            "제목": style(24.0, 32.0),
            "본문": style(14.0, 20.0)
        }}}}));
        let out = typography_file(&korean);
        assert_eq!(out.matches("export const mobileKr제목 = style({").count(), 1);
        assert_eq!(out.matches("export const mobileKr본문 = style({").count(), 1);
        assert!(out.contains("      '제목': mobileKr제목,\n"));
    }

    #[test]
    fn test_family_quotes_escaped() {
        let set = parse(&json!({"font": {"pc": {"en": {"h1": {
            "type": "custom-fontStyle",
            "value": {"fontFamily": "O'Neil", "fontSize": 16, "fontWeight": 400, "lineHeight": 24}
        }}}}}));
        let out = tokens_file(&set).unwrap();
        assert!(out.contains("\"oneil\": \"'O\\\\'Neil', sans-serif\""));
    }

    #[test]
    fn test_typography_file() {
        let out = typography_file(&set());
        assert!(out.contains(
            "export const mobileKrTitle1700 = style({\n  fontFamily: 'Pretendard, sans-serif',\n  fontSize: '14px',\n  fontWeight: 700,\n  lineHeight: '20px',\n});\n"
        ));
        assert!(out.contains("      title1700: mobileKrTitle1700,\n"));
        assert!(!out.contains("letterSpacing"));
    }

    #[test]
    fn test_example_references_real_tokens() {
        let out = example_file(&set());
        assert!(out.contains("import { mobileKrTitle1700 } from './typography.css';"));
        assert!(out.contains("color: vars.color['brand.primary'],"));

        let empty = example_file(&TokenSet::default());
        assert!(!empty.contains("typography.css"));
        assert!(empty.contains("color: 'inherit',"));
    }
}
