//! Normalized tree → YAML text

use crate::error::FormatError;
use crate::ir::nodes::{Node, NormalizedDoc};
use serde_yaml::{Mapping, Value};

/// Serialize a normalized document as `{ <label>: <entry> }`.
pub fn emit(doc: &NormalizedDoc) -> Result<String, FormatError> {
    let top = mapping([(doc.label.as_str(), &doc.root)]);
    Ok(serde_yaml::to_string(&top)?)
}

/// Document key for a field name: underscores become hyphens, case is kept.
pub fn render_key(key: &str) -> String {
    key.replace('_', "-")
}

fn mapping<'a>(entries: impl IntoIterator<Item = (&'a str, &'a Node)>) -> Value {
    let mut map = Mapping::new();
    for (key, value) in entries {
        if value.is_omitted() {
            continue;
        }
        map.insert(Value::String(render_key(key)), to_value(value));
    }
    Value::Mapping(map)
}

fn to_value(node: &Node) -> Value {
    match node {
        Node::Null => Value::Null,
        Node::Str(s) => Value::String(s.clone()),
        Node::Int(n) => Value::Number((*n).into()),
        Node::Seq(items) => Value::Sequence(items.iter().map(to_value).collect()),
        Node::Map(entries) => mapping(entries.iter().map(|(k, v)| (k.as_str(), v))),
    }
}
