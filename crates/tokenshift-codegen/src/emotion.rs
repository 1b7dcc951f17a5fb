//! Emotion theme generator.

use indexmap::IndexMap;
use tokenshift_parser::keys::family_compact;
use tokenshift_parser::TokenSet;

use crate::emit::{banner, css_declarations, escape_single, font_families, js_key, js_literal};
use crate::{CodegenError, GeneratorResult};

pub fn generate(set: &TokenSet) -> Result<Vec<GeneratorResult>, CodegenError> {
    let mut results = vec![
        GeneratorResult::new("theme.ts", "typescript", theme_file(set, "Emotion Theme")?),
        GeneratorResult::new("emotion.d.ts", "typescript", declaration_file()),
    ];

    if !set.typography.is_empty() {
        results.push(GeneratorResult::new(
            "typography.ts",
            "typescript",
            typography_file(set),
        ));
    }

    results.push(GeneratorResult::new(
        "ThemeProvider.tsx",
        "typescript",
        provider_file(),
    ));

    Ok(results)
}

/// Font family map keyed by the compact family name.
fn theme_font_families(set: &TokenSet) -> IndexMap<String, String> {
    font_families(set)
        .into_iter()
        .map(|family| {
            (
                family_compact(family),
                format!("'{}', sans-serif", escape_single(family)),
            )
        })
        .collect()
}

/// The `theme` constant: the model verbatim plus a font family map.
fn theme_object(set: &TokenSet) -> Result<String, CodegenError> {
    let mut out = String::from("export const theme = {\n");
    out.push_str(&format!("  colors: {},\n\n", js_literal(&set.colors, 1)?));
    out.push_str(&format!(
        "  typography: {},\n\n",
        js_literal(&set.typography, 1)?
    ));
    out.push_str(&format!(
        "  fontFamily: {},\n",
        js_literal(&theme_font_families(set), 1)?
    ));
    out.push_str("} as const;\n\n");
    out.push_str("export type Theme = typeof theme;\n");
    Ok(out)
}

pub(crate) fn theme_file(set: &TokenSet, title: &str) -> Result<String, CodegenError> {
    let mut out = banner(title);
    out.push('\n');
    out.push_str(&theme_object(set)?);
    Ok(out)
}

fn declaration_file() -> String {
    let mut out = banner("Emotion Theme Type Declaration");
    out.push_str(
        r#"
import '@emotion/react';
import { theme } from './theme';

type ThemeType = typeof theme;

declare module '@emotion/react' {
  export interface Theme extends ThemeType {}
}
"#,
    );
    out
}

fn typography_file(set: &TokenSet) -> String {
    let mut out = banner("Typography Styles for Emotion");
    out.push_str("\nimport { css } from '@emotion/react';\n\n");
    out.push_str("export const typography = {\n");

    for (device, locales) in &set.typography {
        out.push_str(&format!("  {}: {{\n", js_key(device)));
        for (locale, styles) in locales {
            out.push_str(&format!("    {}: {{\n", js_key(locale)));
            for (style, token) in styles {
                out.push_str(&format!(
                    "      {}: css`\n",
                    js_key(&style.replace('-', ""))
                ));
                out.push_str(&css_declarations(token, "        "));
                out.push_str("      `,\n");
            }
            out.push_str("    },\n");
        }
        out.push_str("  },\n");
    }

    out.push_str("} as const;\n");
    out
}

fn provider_file() -> String {
    let mut out = banner("Theme Provider");
    out.push_str(
        r#"
import { ThemeProvider as EmotionThemeProvider } from '@emotion/react';
import { theme } from './theme';

interface Props {
  children: React.ReactNode;
}

export function ThemeProvider({ children }: Props) {
  return (
    <EmotionThemeProvider theme={theme}>
      {children}
    </EmotionThemeProvider>
  );
}
"#,
    );
    out
}
