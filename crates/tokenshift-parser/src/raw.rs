//! Decoder for raw token export nodes.
//!
//! Export files carry no schema beyond a `type` tag on leaf objects, so every
//! node is decoded into a [`RawNode`] without ever failing. Shapes the parser
//! does not understand come out as [`RawNode::Skipped`].

use crate::model::{GradientStop, GradientToken, TypographyToken};
use serde_json::{Map, Value};

/// Tag carried by color leaves.
pub const COLOR_TYPE: &str = "color";
/// Tag carried by typography leaves.
pub const TYPOGRAPHY_TYPE: &str = "custom-fontStyle";
/// Tag carried by gradient leaves.
pub const GRADIENT_TYPE: &str = "custom-gradient";

/// A decoded raw node.
#[derive(Debug, Clone, PartialEq)]
pub enum RawNode<'a> {
    /// `{"type": "color", "value": "#rrggbb[aa]"}`, value already cleaned.
    Color(String),
    /// `{"type": "custom-fontStyle", "value": {...}}`
    Typography(TypographyToken),
    /// `{"type": "custom-gradient", "value": {...}}`
    Gradient(GradientToken),
    /// Any other object: children keyed by name.
    Group(&'a Map<String, Value>),
    /// A tagged leaf with an unknown tag or bad payload, or a non-object.
    Skipped(SkipReason),
}

/// Why a node was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    NotAnObject,
    UnknownType(String),
    InvalidPayload(&'static str),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::NotAnObject => write!(f, "not an object"),
            SkipReason::UnknownType(tag) => write!(f, "unknown token type '{tag}'"),
            SkipReason::InvalidPayload(kind) => write!(f, "invalid {kind} payload"),
        }
    }
}

impl<'a> RawNode<'a> {
    /// Decode a JSON value. Total: never panics, never errors.
    pub fn decode(value: &'a Value) -> Self {
        let Some(obj) = value.as_object() else {
            return RawNode::Skipped(SkipReason::NotAnObject);
        };

        let (Some(tag), Some(payload)) = (obj.get("type"), obj.get("value")) else {
            return RawNode::Group(obj);
        };

        match tag.as_str() {
            Some(COLOR_TYPE) => match payload.as_str() {
                Some(hex) => RawNode::Color(clean_hex_color(hex)),
                None => RawNode::Skipped(SkipReason::InvalidPayload("color")),
            },
            Some(TYPOGRAPHY_TYPE) => match decode_typography(payload) {
                Some(token) => RawNode::Typography(token),
                None => RawNode::Skipped(SkipReason::InvalidPayload("typography")),
            },
            Some(GRADIENT_TYPE) => match decode_gradient(payload) {
                Some(token) => RawNode::Gradient(token),
                None => RawNode::Skipped(SkipReason::InvalidPayload("gradient")),
            },
            Some(other) => RawNode::Skipped(SkipReason::UnknownType(other.to_string())),
            None => RawNode::Skipped(SkipReason::UnknownType(tag.to_string())),
        }
    }
}

/// Drop an opaque alpha channel: `#rrggbbff` → `#rrggbb`.
///
/// Only a `#` followed by exactly eight hex digits ending in `ff` (any case) is
/// touched; everything else comes back unchanged.
pub fn clean_hex_color(color: &str) -> String {
    let is_hex8 = color.len() == 9
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());

    if is_hex8 && color[7..].eq_ignore_ascii_case("ff") {
        color[..7].to_string()
    } else {
        color.to_string()
    }
}

fn decode_typography(payload: &Value) -> Option<TypographyToken> {
    let obj = payload.as_object()?;
    Some(TypographyToken {
        font_family: obj.get("fontFamily")?.as_str()?.to_string(),
        font_size: number(obj.get("fontSize")?)?,
        font_weight: number(obj.get("fontWeight")?)?,
        line_height: number(obj.get("lineHeight")?)?,
        letter_spacing: obj.get("letterSpacing").and_then(number).unwrap_or(0.0),
    })
}

fn decode_gradient(payload: &Value) -> Option<GradientToken> {
    let obj = payload.as_object()?;
    let kind = obj.get("gradientType")?.as_str()?.to_string();
    let rotation = obj.get("rotation").and_then(number).unwrap_or(0.0);
    let stops: Vec<GradientStop> = obj
        .get("stops")?
        .as_array()?
        .iter()
        .filter_map(decode_stop)
        .collect();
    if stops.is_empty() {
        return None;
    }

    Some(GradientToken {
        kind,
        rotation,
        stops,
    })
}

fn decode_stop(stop: &Value) -> Option<GradientStop> {
    let obj = stop.as_object()?;
    Some(GradientStop {
        position: number(obj.get("position")?)?,
        color: obj.get("color")?.as_str()?.to_string(),
    })
}

/// A JSON number, or a string holding one (`"16"`, `"1.5"`).
fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}
