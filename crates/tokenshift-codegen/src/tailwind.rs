//! Tailwind CSS generator.
//!
//! Re-exports the color and typography trees as typed constants and wires the
//! colors and font families into a `tailwind.config.ts`.

use indexmap::IndexMap;
use tokenshift_parser::keys::family_slug;
use tokenshift_parser::TokenSet;

use crate::emit::{banner, font_families, js_literal};
use crate::{CodegenError, GeneratorResult};

pub fn generate(set: &TokenSet) -> Result<Vec<GeneratorResult>, CodegenError> {
    let mut results = vec![GeneratorResult::new(
        "colors.ts",
        "typescript",
        colors_file(set)?,
    )];

    if !set.typography.is_empty() {
        results.push(GeneratorResult::new(
            "typography.ts",
            "typescript",
            typography_file(set)?,
        ));
    }

    results.push(GeneratorResult::new(
        "tailwind.config.ts",
        "typescript",
        config_file(set)?,
    ));

    Ok(results)
}

fn colors_file(set: &TokenSet) -> Result<String, CodegenError> {
    let mut out = banner("Design Token Colors");
    out.push('\n');
    out.push_str(&format!(
        "export const colors = {} as const;\n\n",
        js_literal(&set.colors, 0)?
    ));
    out.push_str("export type ColorToken = typeof colors;\n");
    Ok(out)
}

fn typography_file(set: &TokenSet) -> Result<String, CodegenError> {
    let mut out = banner("Design Token Typography");
    out.push('\n');
    out.push_str(&format!(
        "export const typography = {} as const;\n\n",
        js_literal(&set.typography, 0)?
    ));
    out.push_str("export type TypographyToken = typeof typography;\n\n");
    out.push_str("export type DeviceType = keyof typeof typography;\n");
    out.push_str(
        "export type LocaleType<D extends DeviceType> = keyof typeof typography[D];\n",
    );
    Ok(out)
}

fn config_file(set: &TokenSet) -> Result<String, CodegenError> {
    let families: IndexMap<String, [&str; 2]> = font_families(set)
        .into_iter()
        .map(|family| (family_slug(family), [family, "sans-serif"]))
        .collect();

    let mut out = banner("Tailwind CSS Configuration");
    out.push('\n');
    out.push_str("import type { Config } from 'tailwindcss';\n");
    out.push_str("import { colors } from './colors';\n\n");
    out.push_str("const config: Config = {\n");
    out.push_str("  content: [\n");
    out.push_str("    './src/**/*.{js,ts,jsx,tsx,mdx}',\n");
    out.push_str("    './app/**/*.{js,ts,jsx,tsx,mdx}',\n");
    out.push_str("  ],\n");
    out.push_str("  theme: {\n");
    out.push_str("    extend: {\n");
    out.push_str("      colors,\n");
    out.push_str(&format!("      fontFamily: {},\n", js_literal(&families, 3)?));
    out.push_str("    },\n");
    out.push_str("  },\n");
    out.push_str("  plugins: [],\n");
    out.push_str("};\n\n");
    out.push_str("export default config;\n");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tokenshift_parser::parse;

    fn set() -> TokenSet {
        parse(&json!({
            "color": {"brand": {"primary": {"type": "color", "value": "#3366FFff"}}},
            "font": {
                "mobile": {
                    "kr": {
                        "title": {
                            "type": "custom-fontStyle",
                            "value": {"fontFamily": "Noto Sans KR", "fontSize": 24, "fontWeight": 700, "lineHeight": 32}
                        },
                        "body": {
                            "type": "custom-fontStyle",
                            "value": {"fontFamily": "Noto Sans KR", "fontSize": 14, "fontWeight": 400, "lineHeight": 20}
                        }
                    }
                }
            }
        }))
    }

    #[test]
    fn test_colors_file_exports_tree() {
        let out = colors_file(&set()).unwrap();
        assert!(out.contains(
            "export const colors = {\n  \"brand\": {\n    \"primary\": \"#3366FF\"\n  }\n} as const;"
        ));
        assert!(out.contains("export type ColorToken = typeof colors;"));
    }

    #[test]
    fn test_typography_file_exports_tree() {
        let out = typography_file(&set()).unwrap();
        assert!(out.contains("export const typography = {"));
        assert!(out.contains("\"fontFamily\": \"Noto Sans KR\""));
        assert!(out.contains("\"fontSize\": 24"));
        assert!(!out.contains("letterSpacing"));
    }

    #[test]
    fn test_config_font_family_deduplicated() {
        let out = config_file(&set()).unwrap();
        assert_eq!(out.matches("\"noto-sans-kr\"").count(), 1);
        assert!(out.contains(
            "      fontFamily: {\n        \"noto-sans-kr\": [\n          \"Noto Sans KR\",\n          \"sans-serif\"\n        ]\n      },\n"
        ));
        assert!(out.contains("import { colors } from './colors';"));
    }

    #[test]
    fn test_config_without_typography() {
        let set = parse(&json!({"color": {"white": {"type": "color", "value": "#ffffff"}}}));
        let results = generate(&set).unwrap();
        assert_eq!(results.len(), 2);
        assert!(results[1].content.contains("fontFamily: {},"));
    }
}
