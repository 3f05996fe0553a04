use crate::error::InputError;
use crate::ir::{Edge, KnowledgeItem};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Items and edges of one learning path, as returned by the path build endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutInput {
    #[serde(default, alias = "nodes")]
    pub items: Vec<KnowledgeItem>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

/// Parses a learning-path document.
///
/// Strict JSON is tried first and JSON5 second, so hand-written fixtures may
/// carry comments and trailing commas. A `{"data": {...}}` response envelope is
/// unwrapped when the root has no item list of its own.
pub fn parse_document(input: &str) -> Result<LayoutInput, InputError> {
    let value = parse_value(input)?;
    let root = unwrap_envelope(value)?;
    let parsed: LayoutInput = serde_json::from_value(root).map_err(InputError::Shape)?;
    tracing::debug!(
        items = parsed.items.len(),
        edges = parsed.edges.len(),
        "parsed learning path document"
    );
    Ok(parsed)
}

fn parse_value(input: &str) -> Result<Value, InputError> {
    match serde_json::from_str::<Value>(input) {
        Ok(value) => Ok(value),
        Err(json_err) => json5::from_str::<Value>(input).map_err(|json5_err| {
            InputError::Syntax(format!("{json_err} (json5: {json5_err})"))
        }),
    }
}

fn unwrap_envelope(value: Value) -> Result<Value, InputError> {
    let mut map = match value {
        Value::Object(map) => map,
        other => return Err(InputError::NotAnObject(value_kind(&other))),
    };
    if !map.contains_key("items") && !map.contains_key("nodes") {
        if let Some(data @ Value::Object(_)) = map.remove("data") {
            return Ok(data);
        }
    }
    Ok(Value::Object(map))
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
