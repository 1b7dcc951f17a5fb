//! Shared emission helpers.
//!
//! Every format walks the same model; the traversals live here and the format
//! modules only decide what a leaf or a scope looks like in their syntax.

use indexmap::IndexSet;
use serde::Serialize;
use tokenshift_parser::{ColorNode, ColorTree, GradientToken, TokenSet, TypographyToken};

use crate::{format_number, px, CodegenError};

/// Comment block opening every generated TypeScript/JavaScript/CSS file.
pub fn banner(title: &str) -> String {
    format!("/**\n * {title}\n *\n * Auto-generated by tokenshift. Do not edit by hand.\n */\n")
}

/// Line-comment variant of [`banner`] for Sass partials.
pub fn line_banner(title: &str) -> String {
    format!("// {title}\n// Auto-generated by tokenshift. Do not edit by hand.\n")
}

// =========================================================================
// Color traversal
// =========================================================================

/// Visit every color leaf depth-first, in document order, with its key path.
pub fn walk_colors<'a>(tree: &'a ColorTree, visit: &mut dyn FnMut(&[&'a str], &'a str)) {
    fn walk<'a>(
        tree: &'a ColorTree,
        path: &mut Vec<&'a str>,
        visit: &mut dyn FnMut(&[&'a str], &'a str),
    ) {
        for (key, node) in tree {
            path.push(key);
            match node {
                ColorNode::Value(hex) => visit(path, hex),
                ColorNode::Group(children) => walk(children, path, visit),
            }
            path.pop();
        }
    }

    walk(tree, &mut Vec::new(), visit);
}

/// How a nested scope is written in a target syntax.
pub trait NestedStyle {
    fn leaf(&self, out: &mut String, indent: &str, key: &str, value: &str, last: bool);
    fn open(&self, out: &mut String, indent: &str, key: &str);
    fn close(&self, out: &mut String, indent: &str, last: bool);
}

/// Emit the color tree as nested scopes, one level of indentation per depth.
pub fn emit_nested(tree: &ColorTree, style: &dyn NestedStyle, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    let count = tree.len();

    for (i, (key, node)) in tree.iter().enumerate() {
        let last = i + 1 == count;
        match node {
            ColorNode::Value(hex) => style.leaf(out, &indent, key, hex, last),
            ColorNode::Group(children) => {
                style.open(out, &indent, key);
                emit_nested(children, style, depth + 1, out);
                style.close(out, &indent, last);
            }
        }
    }
}

// =========================================================================
// JS literals
// =========================================================================

/// Serialize a value as a pretty-printed object literal.
///
/// Continuation lines are indented by `depth` levels so the literal can be
/// embedded after a property key.
pub fn js_literal<T: Serialize + ?Sized>(value: &T, depth: usize) -> Result<String, CodegenError> {
    let json = serde_json::to_string_pretty(value)?;
    Ok(indent_continuation(&json, depth))
}

/// Indent every line but the first by `depth` levels.
pub fn indent_continuation(text: &str, depth: usize) -> String {
    let pad = "  ".repeat(depth);
    let mut out = String::with_capacity(text.len());
    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            out.push('\n');
            if !line.is_empty() {
                out.push_str(&pad);
            }
        }
        out.push_str(line);
    }
    out
}

/// An object key, quoted only when it is not a valid bare key.
pub fn js_key(key: &str) -> String {
    let mut chars = key.chars();
    let bare_ident = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    let numeric = !key.is_empty()
        && key.chars().all(|c| c.is_ascii_digit())
        && (key == "0" || !key.starts_with('0'));

    if bare_ident || numeric {
        key.to_string()
    } else {
        format!("'{}'", escape_single(key))
    }
}

/// Escape a string for use inside single quotes, in JS or CSS.
pub fn escape_single(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}

// =========================================================================
// Typography
// =========================================================================

/// Unique font families in first-occurrence order.
pub fn font_families(set: &TokenSet) -> IndexSet<&str> {
    set.typography_styles()
        .map(|(_, _, _, token)| token.font_family.as_str())
        .collect()
}

/// Deduplicate and sort ascending.
pub fn sorted_unique(values: impl IntoIterator<Item = f64>) -> Vec<f64> {
    let mut values: Vec<f64> = values.into_iter().filter(|v| v.is_finite()).collect();
    values.sort_by(f64::total_cmp);
    values.dedup();
    values
}

/// Unique font sizes, ascending.
pub fn font_sizes(set: &TokenSet) -> Vec<f64> {
    sorted_unique(set.typography_styles().map(|(_, _, _, t)| t.font_size))
}

/// Unique line heights, ascending.
pub fn line_heights(set: &TokenSet) -> Vec<f64> {
    sorted_unique(set.typography_styles().map(|(_, _, _, t)| t.line_height))
}

/// CSS declarations for one text style, one per line.
pub fn css_declarations(token: &TypographyToken, indent: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{indent}font-family: '{}', sans-serif;\n",
        escape_single(&token.font_family)
    ));
    out.push_str(&format!("{indent}font-size: {};\n", px(token.font_size)));
    out.push_str(&format!(
        "{indent}font-weight: {};\n",
        format_number(token.font_weight)
    ));
    out.push_str(&format!("{indent}line-height: {};\n", px(token.line_height)));
    if let Some(spacing) = token.letter_spacing() {
        out.push_str(&format!("{indent}letter-spacing: {};\n", px(spacing)));
    }
    out
}

// =========================================================================
// Gradients
// =========================================================================

/// CSS gradient function for a gradient token.
///
/// Stop positions in `0..=1` are treated as fractions and scaled to percent.
pub fn css_gradient(token: &GradientToken) -> String {
    let fractional = token.stops.iter().all(|s| s.position <= 1.0);
    let stops: Vec<String> = token
        .stops
        .iter()
        .map(|stop| {
            let position = if fractional {
                stop.position * 100.0
            } else {
                stop.position
            };
            format!("{} {}%", stop.color, format_number(round2(position)))
        })
        .collect();
    let stops = stops.join(", ");

    let kind = token.kind.to_ascii_lowercase();
    if kind.contains("radial") {
        format!("radial-gradient(circle, {stops})")
    } else if kind.contains("angular") || kind.contains("conic") {
        format!("conic-gradient(from {}deg, {stops})", format_number(token.rotation))
    } else {
        format!("linear-gradient({}deg, {stops})", format_number(token.rotation))
    }
}

fn round2(n: f64) -> f64 {
    (n * 100.0).round() / 100.0
}
