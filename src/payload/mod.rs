//! Render payloads and dotted-path value resolution

use crate::problem::InputProblem;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// The two reserved keys whose values are row sequences rather than
/// scalars. Every other key is fair game for the conditional passes.
pub const COLLECTION_KEYS: [&str; 2] = ["items", "allocations"];

/// The field values a document is rendered against. Assembled upstream,
/// with currency and dates already formatted for display; rendering never
/// mutates it.
#[derive(Debug, Clone, Default)]
pub struct Payload {
    fields: Map<String, Value>,
}

impl Payload {
    pub fn new(fields: Map<String, Value>) -> Payload {
        Payload { fields }
    }

    /// Anything other than a JSON object becomes an empty payload; a
    /// shapeless payload renders a document full of blanks rather than
    /// refusing to render at all.
    pub fn from_value(value: Value) -> Payload {
        match value {
            Value::Object(fields) => Payload { fields },
            _ => Payload::default(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields
            .keys()
            .map(String::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The rows backing a collection key. Missing, null, or non-array
    /// values all present as an empty sequence.
    pub fn rows(&self, key: &str) -> &[Value] {
        match self.fields.get(key) {
            Some(Value::Array(rows)) => rows,
            _ => &[],
        }
    }

    /// Dotted-path lookup, e.g. `contact.name`. Any missing or non-object
    /// step resolves the whole path to the empty string.
    pub fn resolve(&self, path: &str) -> String {
        let mut segments = path.split('.');
        let first = match segments.next() {
            Some(segment) => segment,
            None => return String::new(),
        };
        let root = match self.fields.get(first) {
            Some(value) => value,
            None => return String::new(),
        };
        match descend(root, segments) {
            Some(value) => scalar_text(value),
            None => String::new(),
        }
    }

    pub fn is_truthy(&self, key: &str) -> bool {
        truthy(self.fields.get(key))
    }
}

/// Resolve a dotted path against a single value, typically one row of a
/// collection.
pub fn resolve_path(root: &Value, path: &str) -> String {
    match descend(root, path.split('.')) {
        Some(value) => scalar_text(value),
        None => String::new(),
    }
}

fn descend<'v, 'p>(
    mut value: &'v Value,
    segments: impl Iterator<Item = &'p str>,
) -> Option<&'v Value> {
    for segment in segments {
        match value {
            Value::Object(fields) => value = fields.get(segment)?,
            _ => return None,
        }
    }
    Some(value)
}

/// Display form of a scalar field. Composite values reaching a scalar slot
/// are a template/payload mismatch and render as absent.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// Truthiness for conditional sections. The falsy set is exactly absent,
/// null, the empty string, zero, and false; objects and arrays are always
/// truthy, empty or not.
pub fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Number(number)) => number
            .as_f64()
            .map(|n| n != 0.0)
            .unwrap_or(true),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Read a payload from a JSON file. The top level must be an object.
pub fn load_payload(path: &Path) -> Result<Payload, InputProblem> {
    let content = fs::read_to_string(path)
        .map_err(|cause| InputProblem::PayloadUnreadable(path.to_path_buf(), cause))?;
    let value: Value = serde_json::from_str(&content)
        .map_err(|cause| InputProblem::PayloadInvalid(path.to_path_buf(), cause))?;
    if !value.is_object() {
        return Err(InputProblem::PayloadNotObject(path.to_path_buf()));
    }
    Ok(Payload::from_value(value))
}
