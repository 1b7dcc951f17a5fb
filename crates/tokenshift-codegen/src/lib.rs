//! tokenshift Code Generator
//!
//! Projects a normalized [`TokenSet`] into one of seven style-system formats.
//! Each format module walks the model and emits a fixed list of named text
//! artifacts; nothing is cached and nothing is shared between calls.
//!
//! ```text
//! TokenSet → generate(format) → Vec<GeneratorResult { filename, language, content }>
//! ```

pub mod css_variables;
pub mod emit;
pub mod emotion;
pub mod panda;
pub mod scss;
pub mod styled_components;
pub mod tailwind;
pub mod vanilla_extract;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tokenshift_parser::TokenSet;
use tracing::debug;

/// One generated file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratorResult {
    pub filename: String,
    pub content: String,
    /// Syntax-highlighting hint for the caller; not semantically load-bearing.
    pub language: String,
}

impl GeneratorResult {
    pub fn new(filename: &str, language: &str, content: String) -> Self {
        Self {
            filename: filename.to_string(),
            content,
            language: language.to_string(),
        }
    }
}

/// Code generation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Codegen error: {message}")]
pub struct CodegenError {
    pub message: String,
}

impl From<serde_json::Error> for CodegenError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// Raised when a format identifier does not name one of the seven formats.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown output format '{name}' (expected one of: {})", OutputFormat::ids().join(", "))]
pub struct UnknownFormatError {
    pub name: String,
}

/// The supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Tailwind,
    CssVariables,
    Scss,
    Emotion,
    StyledComponents,
    VanillaExtract,
    PandaCss,
}

impl OutputFormat {
    /// Every format, in catalogue order.
    pub const ALL: [OutputFormat; 7] = [
        OutputFormat::Tailwind,
        OutputFormat::CssVariables,
        OutputFormat::Scss,
        OutputFormat::Emotion,
        OutputFormat::StyledComponents,
        OutputFormat::VanillaExtract,
        OutputFormat::PandaCss,
    ];

    /// Stable identifier, as accepted by [`FromStr`].
    pub fn id(self) -> &'static str {
        match self {
            OutputFormat::Tailwind => "tailwind",
            OutputFormat::CssVariables => "css-variables",
            OutputFormat::Scss => "scss",
            OutputFormat::Emotion => "emotion",
            OutputFormat::StyledComponents => "styled-components",
            OutputFormat::VanillaExtract => "vanilla-extract",
            OutputFormat::PandaCss => "panda-css",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            OutputFormat::Tailwind => "Tailwind CSS",
            OutputFormat::CssVariables => "CSS Variables",
            OutputFormat::Scss => "SCSS",
            OutputFormat::Emotion => "Emotion",
            OutputFormat::StyledComponents => "styled-components",
            OutputFormat::VanillaExtract => "Vanilla Extract",
            OutputFormat::PandaCss => "Panda CSS",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            OutputFormat::Tailwind => "Utility-first CSS framework",
            OutputFormat::CssVariables => "Native CSS custom properties",
            OutputFormat::Scss => "Sass with variables & mixins",
            OutputFormat::Emotion => "CSS-in-JS library",
            OutputFormat::StyledComponents => "CSS-in-JS with tagged templates",
            OutputFormat::VanillaExtract => "Zero-runtime CSS-in-TypeScript",
            OutputFormat::PandaCss => "Zero-runtime CSS-in-JS",
        }
    }

    pub fn ids() -> Vec<&'static str> {
        Self::ALL.iter().map(|f| f.id()).collect()
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for OutputFormat {
    type Err = UnknownFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.id() == s)
            .ok_or_else(|| UnknownFormatError {
                name: s.to_string(),
            })
    }
}

/// Generate every artifact for `format` from the token set.
pub fn generate(
    set: &TokenSet,
    format: OutputFormat,
) -> Result<Vec<GeneratorResult>, CodegenError> {
    let results = match format {
        OutputFormat::Tailwind => tailwind::generate(set)?,
        OutputFormat::CssVariables => css_variables::generate(set)?,
        OutputFormat::Scss => scss::generate(set)?,
        OutputFormat::Emotion => emotion::generate(set)?,
        OutputFormat::StyledComponents => styled_components::generate(set)?,
        OutputFormat::VanillaExtract => vanilla_extract::generate(set)?,
        OutputFormat::PandaCss => panda::generate(set)?,
    };

    debug!(
        format = %format,
        artifacts = results.len(),
        "generated artifacts"
    );
    Ok(results)
}

/// Format a number, removing `.0` for integers.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// `16.0` → `16px`, `0.5` → `0.5px`.
pub fn px(n: f64) -> String {
    format!("{}px", format_number(n))
}
