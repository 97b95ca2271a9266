//! Textual dumps used in failure diagnostics and attribute comparison.

use std::collections::BTreeMap;
use std::fmt::Write;

use serde_json::{Map, Value};

use crate::fixture::{AttributeMap, LineNumber};

/// Render comments as `> Line N: text`, one per line, ascending by line.
pub fn dump_comments(comments: &BTreeMap<LineNumber, Vec<String>>) -> String {
    let mut out = String::new();
    for (line, line_comments) in comments {
        out.push_str(&dump_line_comments(*line, line_comments));
    }
    out
}

/// Render the comments of a single line.
pub fn dump_line_comments(line: LineNumber, comments: &[String]) -> String {
    let mut out = String::new();
    for comment in comments {
        let _ = writeln!(out, "> Line {line}: {comment}");
    }
    out
}

/// Canonical attribute text: `Line N: {json}` per line, ascending.
/// Arrays at any depth render as index-keyed objects.
pub fn dump_line_attributes(attributes: &BTreeMap<LineNumber, AttributeMap>) -> String {
    let mut out = String::new();
    for (line, attrs) in attributes {
        let rendered = force_object(Value::Object(attrs.clone()));
        let _ = writeln!(out, "Line {line}: {rendered}");
    }
    out
}

/// Recursively turn arrays into index-keyed objects.
fn force_object(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Object(
            items
                .into_iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), force_object(v)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k, force_object(v)))
                .collect(),
        ),
        scalar => scalar,
    }
}
