//! tokenshift Parser
//!
//! Normalizes a design-tool token export into a [`TokenSet`]: a color tree,
//! a device → locale → style typography tree, and optional gradients.
//!
//! ```text
//! JSON text → parse_str() → serde_json::Value → parse() → TokenSet
//! ```
//!
//! [`parse`] itself is total: unexpected shapes are skipped, never reported.
//! Only [`parse_str`] can fail, and only on invalid JSON syntax.
//!
//! # Example
//!
//! ```
//! use tokenshift_parser::parse_str;
//!
//! let set = parse_str(r##"{"color":{"brand":{"primary":{"type":"color","value":"#3366FFff"}}}}"##).unwrap();
//! assert_eq!(set.color_count(), 1);
//! ```

pub mod keys;
pub mod model;
pub mod parser;
pub mod raw;

pub use model::{
    ColorNode, ColorTree, GradientStop, GradientToken, GradientTree, TokenSet, TypographyToken,
    TypographyTree,
};
pub use parser::parse;
pub use raw::RawNode;

/// Parse error with position information.
///
/// Raised only for invalid JSON; the token walk never fails.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Parse error at line {line}, column {column}: {message}")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        let message = err.to_string();
        // serde_json appends " at line X column Y"; keep only the description.
        let message = match message.rfind(" at line ") {
            Some(idx) => message[..idx].to_string(),
            None => message,
        };
        Self {
            message,
            line: err.line(),
            column: err.column(),
        }
    }
}

/// Parse JSON text and normalize it.
pub fn parse_str(source: &str) -> Result<TokenSet, ParseError> {
    let raw: serde_json::Value = serde_json::from_str(source)?;
    Ok(parse(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_str_valid() {
        let set = parse_str(r##"{"color":{"white":{"type":"color","value":"#ffffff"}}}"##).unwrap();
        assert_eq!(set.color_count(), 1);
    }

    #[test]
    fn test_parse_str_invalid_json() {
        let err = parse_str("{\n  \"color\": {,\n}").unwrap_err();
        assert_eq!(err.line, 2);
        assert!(err.column > 0);
        assert!(!err.message.contains(" at line "));
        assert!(err.to_string().starts_with("Parse error at line 2"));
    }

    #[test]
    fn test_parse_str_empty_input() {
        assert!(parse_str("").is_err());
    }

    #[test]
    fn test_parse_str_non_object_is_empty_set() {
        assert_eq!(parse_str("[]").unwrap(), TokenSet::default());
    }
}
