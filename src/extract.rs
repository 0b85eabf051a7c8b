//! Text fragment extraction from passage documents
//!
//! A passage body is an arbitrarily nested JSON tree. Every value stored
//! under a `text` key is a fragment; it is emitted as-is and never walked
//! into, even when it is itself an object or array.

use serde_json::Value;
use std::io::{self, Write};

/// Key marking textual content
const TEXT_KEY: &str = "text";

/// Walk `node` depth-first, pre-order, calling `f` for every fragment
pub fn visit_text<'a, F>(node: &'a Value, f: &mut F)
where
    F: FnMut(&'a Value),
{
    match node {
        Value::Object(map) => {
            for (key, value) in map {
                if key == TEXT_KEY {
                    f(value);
                } else if value.is_object() || value.is_array() {
                    visit_text(value, &mut *f);
                }
            }
        }
        Value::Array(items) => {
            for item in items.iter().filter(|v| v.is_object() || v.is_array()) {
                visit_text(item, &mut *f);
            }
        }
        _ => {}
    }
}

/// Render a fragment: strings raw, anything else as compact JSON
fn render_fragment(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Write every fragment of `node` to `out`, one per line
pub fn extract_text<W: Write>(node: &Value, out: &mut W) -> io::Result<()> {
    let mut result = Ok(());
    visit_text(node, &mut |value| {
        if result.is_ok() {
            result = writeln!(out, "{}", render_fragment(value));
        }
    });
    result
}

/// Fragments of `node` in traversal order
pub fn collect_text(node: &Value) -> Vec<String> {
    let mut fragments = Vec::new();
    visit_text(node, &mut |value| fragments.push(render_fragment(value)));
    fragments
}
