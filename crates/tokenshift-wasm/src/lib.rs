//! WASM bindings for the tokenshift converter.
//!
//! Exposes `convert()`, `parse()`, `formats()` and `version()` to JavaScript
//! via wasm-bindgen. Errors surface as thrown JS errors.

use serde::Serialize;
use tokenshift_codegen::{GeneratorResult, OutputFormat};
use tokenshift_parser::TokenSet;
use wasm_bindgen::prelude::*;

/// Convert a token export to the files of one output format.
///
/// Returns a JS array of `{ filename: string, language: string, content: string }`.
/// Throws on invalid JSON or an unknown format identifier.
#[wasm_bindgen]
pub fn convert(source: &str, format: &str) -> Result<JsValue, JsError> {
    let results = convert_source(source, format).map_err(|e| JsError::new(&e))?;
    to_js(&results)
}

/// Normalize a token export without generating anything.
///
/// Returns the model as a plain object `{ colors, typography, gradients? }`.
#[wasm_bindgen]
pub fn parse(source: &str) -> Result<JsValue, JsError> {
    let set = parse_source(source).map_err(|e| JsError::new(&e))?;
    to_js(&set)
}

/// List the supported formats as `{ id, name, description }` objects.
#[wasm_bindgen]
pub fn formats() -> Result<JsValue, JsError> {
    let list = js_sys::Array::new();
    for format in OutputFormat::ALL {
        let entry = js_sys::Object::new();
        set_property(&entry, "id", format.id())?;
        set_property(&entry, "name", format.display_name())?;
        set_property(&entry, "description", format.description())?;
        list.push(&entry);
    }
    Ok(list.into())
}

/// Get the converter version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn set_property(target: &js_sys::Object, key: &str, value: &str) -> Result<(), JsError> {
    js_sys::Reflect::set(target, &key.into(), &value.into())
        .map(|_| ())
        .map_err(|_| JsError::new(&format!("Failed to set {key} property")))
}

/// Serialize maps as plain objects rather than JS `Map`s.
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&e.to_string()))
}

fn parse_source(source: &str) -> Result<TokenSet, String> {
    tokenshift_parser::parse_str(source).map_err(|e| e.to_string())
}

fn convert_source(source: &str, format: &str) -> Result<Vec<GeneratorResult>, String> {
    // Reject the format before touching the source.
    let format = format
        .parse::<OutputFormat>()
        .map_err(|e| e.to_string())?;
    let set = parse_source(source)?;
    tokenshift_codegen::generate(&set, format).map_err(|e| e.to_string())
}
