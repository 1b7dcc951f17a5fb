//! Panda CSS generator.

use tokenshift_parser::keys::family_slug;
use tokenshift_parser::TokenSet;

use crate::emit::{
    banner, emit_nested, escape_single, font_families, font_sizes, js_key, line_heights,
    NestedStyle,
};
use crate::{format_number, px, CodegenError, GeneratorResult};

const POSTCSS_CONFIG: &str = "module.exports = {\n  plugins: {\n    '@pandacss/dev/postcss': {},\n  },\n};\n";

pub fn generate(set: &TokenSet) -> Result<Vec<GeneratorResult>, CodegenError> {
    Ok(vec![
        GeneratorResult::new("panda.config.ts", "typescript", config_file(set)),
        GeneratorResult::new("example.tsx", "typescript", example_file(set)),
        GeneratorResult::new("postcss.config.cjs", "javascript", POSTCSS_CONFIG.to_string()),
    ])
}

/// Color leaves as `{ value: '#hex' }` token objects.
struct PandaTokens;

impl NestedStyle for PandaTokens {
    fn leaf(&self, out: &mut String, indent: &str, key: &str, value: &str, _last: bool) {
        out.push_str(&format!("{indent}{}: {{ value: '{}' }},\n", js_key(key), escape_single(value)));
    }

    fn open(&self, out: &mut String, indent: &str, key: &str) {
        out.push_str(&format!("{indent}{}: {{\n", js_key(key)));
    }

    fn close(&self, out: &mut String, indent: &str, _last: bool) {
        out.push_str(&format!("{indent}}},\n"));
    }
}

fn token_line(out: &mut String, key: &str, value: &str) {
    out.push_str(&format!(
        "          {}: {{ value: '{}' }},\n",
        js_key(key),
        escape_single(value)
    ));
}

fn config_file(set: &TokenSet) -> String {
    let mut out = banner("Panda CSS Configuration");
    out.push_str("\nimport { defineConfig } from '@pandacss/dev';\n\n");
    out.push_str("export default defineConfig({\n");
    out.push_str("  preflight: true,\n");
    out.push_str("  include: ['./src/**/*.{js,jsx,ts,tsx}'],\n");
    out.push_str("  exclude: [],\n\n");
    out.push_str("  theme: {\n");
    out.push_str("    extend: {\n");
    out.push_str("      tokens: {\n");

    out.push_str("        colors: {\n");
    emit_nested(&set.colors, &PandaTokens, 5, &mut out);
    out.push_str("        },\n");

    out.push_str("        fonts: {\n");
    for family in font_families(set) {
        token_line(&mut out, &family_slug(family), &format!("{family}, sans-serif"));
    }
    out.push_str("        },\n");

    out.push_str("        fontSizes: {\n");
    for size in font_sizes(set) {
        token_line(&mut out, &format_number(size), &px(size));
    }
    out.push_str("        },\n");

    out.push_str("        fontWeights: {\n");
    token_line(&mut out, "regular", "400");
    token_line(&mut out, "medium", "500");
    token_line(&mut out, "bold", "700");
    out.push_str("        },\n");

    out.push_str("        lineHeights: {\n");
    for height in line_heights(set) {
        token_line(&mut out, &format_number(height), &px(height));
    }
    out.push_str("        },\n");
    out.push_str("      },\n");

    out.push_str("      textStyles: {\n");
    for (device, locales) in &set.typography {
        out.push_str(&format!("        {}: {{\n", js_key(device)));
        for (locale, styles) in locales {
            out.push_str(&format!("          {}: {{\n", js_key(locale)));
            for (style, token) in styles {
                out.push_str(&format!("            {}: {{\n", js_key(style)));
                out.push_str("              value: {\n");
                out.push_str(&format!(
                    "                fontFamily: '{}, sans-serif',\n",
                    escape_single(&token.font_family)
                ));
                out.push_str(&format!("                fontSize: '{}',\n", px(token.font_size)));
                out.push_str(&format!(
                    "                fontWeight: {},\n",
                    format_number(token.font_weight)
                ));
                out.push_str(&format!(
                    "                lineHeight: '{}',\n",
                    px(token.line_height)
                ));
                if let Some(spacing) = token.letter_spacing() {
                    out.push_str(&format!("                letterSpacing: '{}',\n", px(spacing)));
                }
                out.push_str("              },\n");
                out.push_str("            },\n");
            }
            out.push_str("          },\n");
        }
        out.push_str("        },\n");
    }
    out.push_str("      },\n");

    out.push_str("    },\n");
    out.push_str("  },\n\n");
    out.push_str("  outdir: 'styled-system',\n");
    out.push_str("});\n");
    out
}

fn example_file(set: &TokenSet) -> String {
    let text_style = set
        .typography_styles()
        .next()
        .map(|(device, locale, style, _)| format!("{device}.{locale}.{style}"));

    let mut out = banner("Panda CSS Usage Example");
    out.push_str("\nimport { css } from '../styled-system/css';\n\n");
    out.push_str("export function Example() {\n");
    out.push_str("  return (\n");
    out.push_str("    <div className={css({ padding: '16px' })}>\n");
    if let Some(path) = text_style {
        out.push_str(&format!(
            "      <h1 className={{css({{ textStyle: '{}' }})}}>Hello, tokens</h1>\n",
            escape_single(&path)
        ));
    } else {
        out.push_str("      <h1>Hello, tokens</h1>\n");
    }
    out.push_str("    </div>\n");
    out.push_str("  );\n");
    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tokenshift_parser::parse;

    fn style(size: u32, line_height: u32) -> serde_json::Value {
        json!({"type": "custom-fontStyle", "value": {"fontFamily": "Noto Sans KR", "fontSize": size, "fontWeight": 700, "lineHeight": line_height}})
    }

    fn set() -> TokenSet {
        parse(&json!({
            "color": {
                "brand": {"primary": {"type": "color", "value": "#3366FF"}},
                "white": {"type": "color", "value": "#ffffff"}
            },
            "font": {"mobile": {"kr": {
                "title1-700": style(14, 20),
                "caption": style(12, 16),
                "headline": style(16, 24)
            }}}
        }))
    }

    #[test]
    fn test_color_tokens_nested() {
        let out = config_file(&set());
        assert!(out.contains(
            "        colors: {\n          brand: {\n            primary: { value: '#3366FF' },\n          },\n          white: { value: '#ffffff' },\n        },\n"
        ));
    }

    #[test]
    fn test_font_sizes_sorted() {
        let out = config_file(&set());
        assert!(out.contains(
            "        fontSizes: {\n          12: { value: '12px' },\n          14: { value: '14px' },\n          16: { value: '16px' },\n        },\n"
        ));
        assert!(out.contains(
            "        lineHeights: {\n          16: { value: '16px' },\n          20: { value: '20px' },\n          24: { value: '24px' },\n        },\n"
        ));
    }

    #[test]
    fn test_fonts_and_weights() {
        let out = config_file(&set());
        assert!(out.contains("          'noto-sans-kr': { value: 'Noto Sans KR, sans-serif' },\n"));
        assert!(out.contains("          bold: { value: '700' },\n"));
    }

    #[test]
    fn test_text_styles() {
        let out = config_file(&set());
        assert!(out.contains(
            "            'title1-700': {\n              value: {\n                fontFamily: 'Noto Sans KR, sans-serif',\n                fontSize: '14px',\n                fontWeight: 700,\n                lineHeight: '20px',\n              },\n            },\n"
        ));
        assert!(!out.contains("letterSpacing"));
    }

    #[test]
    fn test_config_envelope() {
        let out = config_file(&TokenSet::default());
        assert!(out.contains("import { defineConfig } from '@pandacss/dev';"));
        assert!(out.contains("  include: ['./src/**/*.{js,jsx,ts,tsx}'],\n"));
        assert!(out.contains("  outdir: 'styled-system',\n"));
        assert!(out.contains("      textStyles: {\n      },\n"));
    }

    #[test]
    fn test_artifacts() {
        let results = generate(&set()).unwrap();
        let names: Vec<&str> = results.iter().map(|r| r.filename.as_str()).collect();
        assert_eq!(names, vec!["panda.config.ts", "example.tsx", "postcss.config.cjs"]);
        assert_eq!(results[2].language, "javascript");
        assert!(results[2].content.contains("'@pandacss/dev/postcss': {}"));
        assert!(results[1].content.contains("textStyle: 'mobile.kr.title1-700'"));
    }
}
