//! Core types for the field tree
//!
//! A form is described by an ordered sequence of [`Field`]s. A field carries
//! a user-entered key and a [`FieldKind`]; nested fields own their children,
//! scalar fields have none, so "non-nested fields never carry children" is a
//! structural invariant rather than a runtime convention.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Field Type
// ============================================================================

/// The fixed type enumeration offered to the user for each field
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    String,
    Number,
    Nested,
}

impl FieldType {
    /// All selectable types, in presentation order
    pub const ALL: [FieldType; 3] = [FieldType::String, FieldType::Number, FieldType::Nested];

    /// Wire/schema name (snake_case)
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Nested => "nested",
        }
    }

    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            FieldType::String => "String",
            FieldType::Number => "Number",
            FieldType::Nested => "Nested",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Field
// ============================================================================

/// Type-dependent payload of a field
///
/// Serialized with an adjacent `type` tag so a field round-trips as the
/// familiar `{"key": ..., "type": ..., "children": [...]}` object, children
/// present only on nested fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    String,
    Number,
    Nested {
        #[serde(default)]
        children: Vec<Field>,
    },
}

impl FieldKind {
    /// The flat type of this kind
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldKind::String => FieldType::String,
            FieldKind::Number => FieldType::Number,
            FieldKind::Nested { .. } => FieldType::Nested,
        }
    }
}

/// A single entry in the builder's tree
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// User-entered label; empty keys are excluded from generated schemas
    pub key: String,
    #[serde(flatten)]
    pub kind: FieldKind,
}

impl Field {
    /// Create the default field appended on "add": empty key, string type
    pub fn new() -> Self {
        Self {
            key: String::new(),
            kind: FieldKind::String,
        }
    }

    /// Create a string field with the given key
    pub fn string(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind: FieldKind::String,
        }
    }

    /// Create a number field with the given key
    pub fn number(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind: FieldKind::Number,
        }
    }

    /// Create a nested field with the given key and children
    pub fn nested(key: impl Into<String>, children: Vec<Field>) -> Self {
        Self {
            key: key.into(),
            kind: FieldKind::Nested { children },
        }
    }

    /// The flat type of this field
    pub fn field_type(&self) -> FieldType {
        self.kind.field_type()
    }

    /// Children of a nested field, `None` for scalar fields
    pub fn children(&self) -> Option<&[Field]> {
        match &self.kind {
            FieldKind::Nested { children } => Some(children),
            _ => None,
        }
    }

    /// Change this field's type
    ///
    /// Leaving `nested` drops the children; entering `nested` initializes an
    /// empty children sequence. Retyping to the current type is a no-op, so
    /// a nested field keeps its children across a redundant selection.
    pub fn retype(&mut self, ty: FieldType) {
        if self.field_type() == ty {
            return;
        }
        self.kind = match ty {
            FieldType::String => FieldKind::String,
            FieldType::Number => FieldKind::Number,
            FieldType::Nested => FieldKind::Nested {
                children: Vec::new(),
            },
        };
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_field_shape() {
        let field = Field::new();
        assert_eq!(field.key, "");
        assert_eq!(field.field_type(), FieldType::String);
        assert!(field.children().is_none());
    }

    #[test]
    fn test_retype_to_nested_initializes_children() {
        let mut field = Field::string("addr");
        field.retype(FieldType::Nested);
        assert_eq!(field.children(), Some(&[][..]));
    }

    #[test]
    fn test_retype_away_from_nested_drops_children() {
        let mut field = Field::nested("addr", vec![Field::string("city")]);
        field.retype(FieldType::Number);
        assert_eq!(field.field_type(), FieldType::Number);
        assert!(field.children().is_none());
    }

    #[test]
    fn test_retype_to_same_type_keeps_children() {
        let mut field = Field::nested("addr", vec![Field::string("city")]);
        field.retype(FieldType::Nested);
        assert_eq!(field.children().map(<[Field]>::len), Some(1));
    }

    #[test]
    fn test_field_serialization_shape() {
        let field = Field::nested("addr", vec![Field::string("city")]);
        let value = serde_json::to_value(&field).unwrap();
        assert_eq!(
            value,
            json!({
                "key": "addr",
                "type": "nested",
                "children": [{"key": "city", "type": "string"}],
            })
        );
    }

    #[test]
    fn test_field_deserialization_defaults_children() {
        let field: Field = serde_json::from_str(r#"{"key": "addr", "type": "nested"}"#).unwrap();
        assert_eq!(field.children(), Some(&[][..]));

        let scalar: Field = serde_json::from_str(r#"{"key": "name", "type": "string"}"#).unwrap();
        assert!(scalar.children().is_none());
    }
}
