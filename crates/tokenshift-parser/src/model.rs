//! Normalized token model.
//!
//! The parser's output and the only input the generators read. Every map is
//! an [`IndexMap`] so document order survives into generated code.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// A complete set of normalized design tokens.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TokenSet {
    pub colors: ColorTree,
    pub typography: TypographyTree,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradients: Option<GradientTree>,
}

impl TokenSet {
    /// Number of color leaves in the tree.
    pub fn color_count(&self) -> usize {
        fn count(tree: &ColorTree) -> usize {
            tree.values()
                .map(|node| match node {
                    ColorNode::Value(_) => 1,
                    ColorNode::Group(children) => count(children),
                })
                .sum()
        }
        count(&self.colors)
    }

    /// Number of (device, locale, style) typography entries.
    pub fn typography_count(&self) -> usize {
        self.typography
            .values()
            .flat_map(|locales| locales.values())
            .map(|styles| styles.len())
            .sum()
    }

    /// Number of gradient entries across all categories.
    pub fn gradient_count(&self) -> usize {
        self.gradients
            .as_ref()
            .map(|g| g.values().map(|names| names.len()).sum())
            .unwrap_or(0)
    }

    /// Iterate every typography style as `(device, locale, style, token)`.
    pub fn typography_styles(
        &self,
    ) -> impl Iterator<Item = (&str, &str, &str, &TypographyToken)> + '_ {
        self.typography.iter().flat_map(|(device, locales)| {
            locales.iter().flat_map(move |(locale, styles)| {
                styles.iter().map(move |(style, token)| {
                    (device.as_str(), locale.as_str(), style.as_str(), token)
                })
            })
        })
    }
}

/// Nested color map. Leaves are hex strings.
pub type ColorTree = IndexMap<String, ColorNode>;

/// A node in the color tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColorNode {
    Value(String),
    Group(ColorTree),
}

/// Insert `value` at `path`, merging with whatever is already there.
///
/// Intermediate leaves on the way are replaced by groups; an existing node at
/// the final segment is replaced by the new value.
pub fn insert_color(tree: &mut ColorTree, path: &[&str], value: String) {
    let Some((last, parents)) = path.split_last() else {
        return;
    };

    let mut current = tree;
    for segment in parents {
        let node = current
            .entry((*segment).to_string())
            .or_insert_with(|| ColorNode::Group(ColorTree::new()));
        if let ColorNode::Value(_) = node {
            *node = ColorNode::Group(ColorTree::new());
        }
        let ColorNode::Group(children) = node else {
            return;
        };
        current = children;
    }

    current.insert((*last).to_string(), ColorNode::Value(value));
}

/// Look up a color leaf by key path.
pub fn lookup_color<'a>(tree: &'a ColorTree, path: &[&str]) -> Option<&'a str> {
    let (last, parents) = path.split_last()?;
    let mut current = tree;
    for segment in parents {
        match current.get(*segment)? {
            ColorNode::Group(children) => current = children,
            ColorNode::Value(_) => return None,
        }
    }
    match current.get(*last)? {
        ColorNode::Value(hex) => Some(hex.as_str()),
        ColorNode::Group(_) => None,
    }
}

/// device → locale → style name → token.
pub type TypographyTree = IndexMap<String, IndexMap<String, IndexMap<String, TypographyToken>>>;

/// A single text style.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyToken {
    pub font_family: String,
    #[serde(serialize_with = "serialize_number")]
    pub font_size: f64,
    #[serde(serialize_with = "serialize_number")]
    pub font_weight: f64,
    #[serde(serialize_with = "serialize_number")]
    pub line_height: f64,
    #[serde(serialize_with = "serialize_number", skip_serializing_if = "is_zero")]
    pub letter_spacing: f64,
}

impl TypographyToken {
    /// Letter spacing, if it should be written out at all.
    pub fn letter_spacing(&self) -> Option<f64> {
        (self.letter_spacing != 0.0 && self.letter_spacing.is_finite())
            .then_some(self.letter_spacing)
    }
}

/// category → name → gradient.
pub type GradientTree = IndexMap<String, IndexMap<String, GradientToken>>;

/// A gradient fill.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientToken {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(serialize_with = "serialize_number")]
    pub rotation: f64,
    pub stops: Vec<GradientStop>,
}

/// One color stop, in source order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientStop {
    #[serde(serialize_with = "serialize_number")]
    pub position: f64,
    pub color: String,
}

fn is_zero(n: &f64) -> bool {
    *n == 0.0
}

/// Serialize integral floats as integers so `16.0` prints as `16`.
fn serialize_number<S: Serializer>(n: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if n.fract() == 0.0 && n.is_finite() && n.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*n as i64)
    } else {
        serializer.serialize_f64(*n)
    }
}
