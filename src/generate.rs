//! Schema generation
//!
//! Pure transform from a field sequence to the nested key-to-descriptor
//! mapping shown in the preview pane. The shape (`type`, `default`,
//! `properties`) is the builder's own convention, not a JSON Schema draft.

use serde_json::{json, Map, Value};

use crate::field::{Field, FieldKind};

/// Generate the schema mapping for a sequence of fields
///
/// Fields with an empty key are skipped at every depth. Nested fields
/// contribute `{"type": "object", "properties": ...}` recursively (an empty
/// children sequence yields `"properties": {}`); scalar fields contribute
/// `{"type": ..., "default": ...}` with `""` for strings and `0` for
/// numbers. Duplicate keys at one level silently overwrite: last write wins.
pub fn generate(fields: &[Field]) -> Map<String, Value> {
    let mut schema = Map::new();
    for field in fields {
        if field.key.is_empty() {
            continue;
        }
        let entry = match &field.kind {
            FieldKind::Nested { children } => json!({
                "type": "object",
                "properties": generate(children),
            }),
            FieldKind::String => json!({"type": "string", "default": ""}),
            FieldKind::Number => json!({"type": "number", "default": 0}),
        };
        schema.insert(field.key.clone(), entry);
    }
    schema
}

/// Render the generated schema as indented JSON for the preview pane
pub fn render(fields: &[Field]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&Value::Object(generate(fields)))
}
