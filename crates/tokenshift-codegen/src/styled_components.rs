//! styled-components theme generator.
//!
//! Shares the `theme` constant with the Emotion generator; text styles become
//! one exported `css` mixin per style instead of a nested lookup object.

use tokenshift_parser::keys::{family_compact, to_camel_case};
use tokenshift_parser::TokenSet;

use crate::emit::{banner, css_declarations, escape_single, font_families, js_key};
use crate::emotion::theme_file;
use crate::{CodegenError, GeneratorResult};

const GET_COLOR_HELPER: &str = r#"
export const getColor = (path: string) => {
  const keys = path.split('.');
  let result: unknown = theme.colors;

  for (const key of keys) {
    if (typeof result === 'object' && result !== null && key in result) {
      result = (result as Record<string, unknown>)[key];
    } else {
      return undefined;
    }
  }

  return result as string | undefined;
};
"#;

pub fn generate(set: &TokenSet) -> Result<Vec<GeneratorResult>, CodegenError> {
    let mut theme = theme_file(set, "Styled-Components Theme")?;
    theme.push_str(GET_COLOR_HELPER);

    let mut results = vec![
        GeneratorResult::new("theme.ts", "typescript", theme),
        GeneratorResult::new("styled.d.ts", "typescript", declaration_file()),
    ];

    if !set.typography.is_empty() {
        results.push(GeneratorResult::new("mixins.ts", "typescript", mixins_file(set)));
    }

    results.push(GeneratorResult::new(
        "GlobalStyle.tsx",
        "typescript",
        global_style_file(set),
    ));
    results.push(GeneratorResult::new(
        "ThemeProvider.tsx",
        "typescript",
        provider_file(),
    ));

    Ok(results)
}

/// Mixin name for a text style: `typoMobileKrTitle1700`.
pub fn mixin_name(device: &str, locale: &str, style: &str) -> String {
    to_camel_case(&format!("typo-{device}-{locale}-{style}"))
}

fn declaration_file() -> String {
    let mut out = banner("Styled-Components Theme Type Declaration");
    out.push_str(
        r#"
import 'styled-components';
import { theme } from './theme';

type ThemeType = typeof theme;

declare module 'styled-components' {
  export interface DefaultTheme extends ThemeType {}
}
"#,
    );
    out
}

fn mixins_file(set: &TokenSet) -> String {
    let mut out = banner("Typography Mixins for Styled-Components");
    out.push_str("\nimport { css } from 'styled-components';\n\n");

    for (device, locale, style, token) in set.typography_styles() {
        out.push_str(&format!(
            "export const {} = css`\n",
            mixin_name(device, locale, style)
        ));
        out.push_str(&css_declarations(token, "  "));
        out.push_str("`;\n\n");
    }

    out
}

fn global_style_file(set: &TokenSet) -> String {
    // The body font is the first family that appears in the tokens.
    let body_font = font_families(set)
        .first()
        .map(|family| family_compact(family))
        .filter(|key| !key.is_empty())
        .map(|key| {
            if js_key(&key) == key {
                format!("theme.fontFamily.{key}")
            } else {
                format!("theme.fontFamily['{}']", escape_single(&key))
            }
        })
        .unwrap_or_else(|| "'sans-serif'".to_string());

    let mut out = banner("Global Styles");
    out.push_str("\nimport { createGlobalStyle } from 'styled-components';\n\n");
    out.push_str("export const GlobalStyle = createGlobalStyle`\n");
    out.push_str("  * {\n    box-sizing: border-box;\n    margin: 0;\n    padding: 0;\n  }\n\n");
    out.push_str("  body {\n");
    out.push_str(&format!(
        "    font-family: ${{({{ theme }}) => {body_font}}};\n"
    ));
    out.push_str("    -webkit-font-smoothing: antialiased;\n");
    out.push_str("    -moz-osx-font-smoothing: grayscale;\n");
    out.push_str("  }\n`;\n");
    out
}

fn provider_file() -> String {
    let mut out = banner("Theme Provider");
    out.push_str(
        r#"
import { ThemeProvider as StyledThemeProvider } from 'styled-components';
import { theme } from './theme';
import { GlobalStyle } from './GlobalStyle';

interface Props {
  children: React.ReactNode;
}

export function ThemeProvider({ children }: Props) {
  return (
    <StyledThemeProvider theme={theme}>
      <GlobalStyle />
      {children}
    </StyledThemeProvider>
  );
}
"#,
    );
    out
}
