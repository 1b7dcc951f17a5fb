//! Token export parser.
//!
//! Walks the three recognized top-level branches (`color`, `font`,
//! `gradient`) and builds a [`TokenSet`]. Nothing in here fails: nodes that do
//! not decode are dropped at the smallest scope and logged at `debug`.

use crate::keys::to_kebab_case;
use crate::model::{insert_color, ColorTree, GradientTree, TokenSet, TypographyTree};
use crate::raw::RawNode;
use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::debug;

/// Locale synthesized for devices whose styles have no locale level.
pub const DEFAULT_LOCALE: &str = "default";

/// Category for gradients whose key path has a single segment.
pub const DEFAULT_GRADIENT_CATEGORY: &str = "default";

/// Parse a raw token export into the normalized model.
pub fn parse(raw: &Value) -> TokenSet {
    let mut set = TokenSet::default();

    let Some(root) = raw.as_object() else {
        debug!("token document root is not an object; nothing to parse");
        return set;
    };

    for (key, value) in root {
        match (key.as_str(), value.as_object()) {
            ("color", Some(colors)) => parse_colors(colors, "", &mut set.colors),
            ("font", Some(fonts)) => set.typography = parse_typography(fonts),
            ("gradient", Some(gradients)) => {
                let mut tree = GradientTree::new();
                parse_gradients(gradients, "", &mut tree);
                set.gradients = Some(tree);
            }
            _ => debug!(key = %key, "ignoring top-level key"),
        }
    }

    set
}

fn join_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}-{key}")
    }
}

// =========================================================================
// Colors
// =========================================================================

fn parse_colors(obj: &Map<String, Value>, prefix: &str, out: &mut ColorTree) {
    for (key, value) in obj {
        let path = join_key(prefix, key);

        match RawNode::decode(value) {
            RawNode::Color(hex) => {
                let normalized = to_kebab_case(&path);
                if normalized.is_empty() {
                    debug!(path = %path, "color key normalizes to nothing; skipped");
                    continue;
                }
                let segments: Vec<&str> = normalized.split('-').collect();
                insert_color(out, &segments, hex);
            }
            RawNode::Group(children) => parse_colors(children, &path, out),
            RawNode::Skipped(reason) => debug!(path = %path, %reason, "skipped color node"),
            RawNode::Typography(_) | RawNode::Gradient(_) => {
                debug!(path = %path, "non-color token under color branch; skipped")
            }
        }
    }
}

// =========================================================================
// Typography
// =========================================================================

fn parse_typography(fonts: &Map<String, Value>) -> TypographyTree {
    let mut tree = TypographyTree::new();

    for (device, device_value) in fonts {
        let Some(entries) = device_value.as_object() else {
            debug!(device = %device, "typography device is not an object; skipped");
            continue;
        };

        let mut locales: IndexMap<String, IndexMap<_, _>> = IndexMap::new();

        for (key, value) in entries {
            match RawNode::decode(value) {
                // A style directly under the device: lift it under the default locale.
                RawNode::Typography(token) => {
                    locales
                        .entry(DEFAULT_LOCALE.to_string())
                        .or_default()
                        .insert(key.clone(), token);
                }
                RawNode::Group(styles) => {
                    for (style, style_value) in styles {
                        match RawNode::decode(style_value) {
                            RawNode::Typography(token) => {
                                locales
                                    .entry(key.clone())
                                    .or_default()
                                    .insert(style.clone(), token);
                            }
                            _ => debug!(
                                path = %format!("{device}.{key}.{style}"),
                                "not a typography style; skipped"
                            ),
                        }
                    }
                }
                _ => debug!(path = %format!("{device}.{key}"), "not a typography node; skipped"),
            }
        }

        if !locales.is_empty() {
            tree.insert(device.clone(), locales);
        }
    }

    tree
}

// =========================================================================
// Gradients
// =========================================================================

fn parse_gradients(obj: &Map<String, Value>, prefix: &str, out: &mut GradientTree) {
    for (key, value) in obj {
        let path = join_key(prefix, key);

        match RawNode::decode(value) {
            RawNode::Gradient(token) => {
                let normalized = to_kebab_case(&path);
                let (category, name) = match normalized.rsplit_once('-') {
                    Some((category, name)) => (category.to_string(), name.to_string()),
                    None => (DEFAULT_GRADIENT_CATEGORY.to_string(), normalized),
                };
                out.entry(category).or_default().insert(name, token);
            }
            RawNode::Group(children) => parse_gradients(children, &path, out),
            RawNode::Skipped(reason) => debug!(path = %path, %reason, "skipped gradient node"),
            RawNode::Color(_) | RawNode::Typography(_) => {
                debug!(path = %path, "non-gradient token under gradient branch; skipped")
            }
        }
    }
}
