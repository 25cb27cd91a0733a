//! Field tree store
//!
//! Owns the ordered sequence of top-level fields and mediates every
//! mutation. Operations address a target sequence through a [`FieldPath`]
//! (root, or the children of a nested field) plus a position within it.
//! Malformed indices and paths fail fast with a [`BuilderError`] rather
//! than clamping or no-opping.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::BuilderError;
use crate::field::{Field, FieldKind, FieldType};
use crate::path::FieldPath;

/// In-memory store for the builder's field tree
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldTree {
    roots: Vec<Field>,
}

impl FieldTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// The top-level field sequence
    pub fn roots(&self) -> &[Field] {
        &self.roots
    }

    /// Check whether the tree has no fields at all
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Read the sequence addressed by `parent`
    pub fn fields(&self, parent: &FieldPath) -> Result<&[Field], BuilderError> {
        self.sequence(parent).map(Vec::as_slice)
    }

    /// Read the field at `index` within the sequence addressed by `parent`
    pub fn field(&self, parent: &FieldPath, index: usize) -> Result<&Field, BuilderError> {
        let seq = self.sequence(parent)?;
        seq.get(index).ok_or(BuilderError::IndexOutOfBounds {
            index,
            len: seq.len(),
        })
    }

    /// Append a new default field (`{key: "", type: string}`) to the
    /// sequence addressed by `parent`. Returns the position it was added at.
    pub fn add_field(&mut self, parent: &FieldPath) -> Result<usize, BuilderError> {
        let seq = self.sequence_mut(parent)?;
        seq.push(Field::new());
        let index = seq.len() - 1;
        debug!("Added field at {}[{}]", parent, index);
        Ok(index)
    }

    /// Replace the field at `index` wholesale (not a merge)
    pub fn update_field(
        &mut self,
        parent: &FieldPath,
        index: usize,
        field: Field,
    ) -> Result<(), BuilderError> {
        let seq = self.sequence_mut(parent)?;
        let len = seq.len();
        let slot = seq
            .get_mut(index)
            .ok_or(BuilderError::IndexOutOfBounds { index, len })?;
        *slot = field;
        debug!("Updated field at {}[{}]", parent, index);
        Ok(())
    }

    /// Change the type of the field at `index`
    ///
    /// Leaving `nested` drops the field's children; entering `nested`
    /// initializes an empty children sequence; reselecting the current type
    /// changes nothing.
    pub fn retype_field(
        &mut self,
        parent: &FieldPath,
        index: usize,
        ty: FieldType,
    ) -> Result<(), BuilderError> {
        let seq = self.sequence_mut(parent)?;
        let len = seq.len();
        let field = seq
            .get_mut(index)
            .ok_or(BuilderError::IndexOutOfBounds { index, len })?;
        field.retype(ty);
        debug!("Retyped field at {}[{}] to {}", parent, index, ty);
        Ok(())
    }

    /// Remove and return the field at `index`, shifting subsequent fields
    pub fn delete_field(&mut self, parent: &FieldPath, index: usize) -> Result<Field, BuilderError> {
        let seq = self.sequence_mut(parent)?;
        if index >= seq.len() {
            return Err(BuilderError::IndexOutOfBounds {
                index,
                len: seq.len(),
            });
        }
        let removed = seq.remove(index);
        debug!("Deleted field at {}[{}]", parent, index);
        Ok(removed)
    }

    fn sequence(&self, parent: &FieldPath) -> Result<&Vec<Field>, BuilderError> {
        let mut seq = &self.roots;
        let mut walked = FieldPath::root();
        for idx in parent.segments() {
            walked = walked.push(idx);
            let field = seq.get(idx).ok_or_else(|| BuilderError::PathNotFound {
                path: walked.clone(),
            })?;
            seq = match &field.kind {
                FieldKind::Nested { children } => children,
                _ => return Err(BuilderError::NotNested { path: walked }),
            };
        }
        Ok(seq)
    }

    fn sequence_mut(&mut self, parent: &FieldPath) -> Result<&mut Vec<Field>, BuilderError> {
        let mut seq = &mut self.roots;
        let mut walked = FieldPath::root();
        for idx in parent.segments() {
            walked = walked.push(idx);
            let field = seq.get_mut(idx).ok_or_else(|| BuilderError::PathNotFound {
                path: walked.clone(),
            })?;
            seq = match &mut field.kind {
                FieldKind::Nested { children } => children,
                _ => return Err(BuilderError::NotNested { path: walked }),
            };
        }
        Ok(seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_appends_default_field() {
        let mut tree = FieldTree::new();
        let root = FieldPath::root();

        assert_eq!(tree.add_field(&root).unwrap(), 0);
        assert_eq!(tree.add_field(&root).unwrap(), 1);

        let fields = tree.fields(&root).unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0], Field::new());
    }

    #[test]
    fn test_update_replaces_wholesale() {
        let mut tree = FieldTree::new();
        let root = FieldPath::root();
        tree.add_field(&root).unwrap();

        tree.update_field(&root, 0, Field::number("count")).unwrap();
        assert_eq!(tree.field(&root, 0).unwrap(), &Field::number("count"));
    }

    #[test]
    fn test_add_within_nested_field() {
        let mut tree = FieldTree::new();
        let root = FieldPath::root();
        tree.add_field(&root).unwrap();
        tree.update_field(&root, 0, Field::nested("addr", vec![]))
            .unwrap();

        let inner = root.push(0);
        tree.add_field(&inner).unwrap();
        tree.update_field(&inner, 0, Field::string("city")).unwrap();

        assert_eq!(tree.field(&inner, 0).unwrap().key, "city");
        assert_eq!(tree.field(&root, 0).unwrap().children().map(<[Field]>::len), Some(1));
    }

    #[test]
    fn test_delete_shifts_subsequent_fields() {
        let mut tree = FieldTree::new();
        let root = FieldPath::root();
        tree.add_field(&root).unwrap();
        tree.add_field(&root).unwrap();
        tree.update_field(&root, 0, Field::string("a")).unwrap();
        tree.update_field(&root, 1, Field::string("b")).unwrap();

        let removed = tree.delete_field(&root, 0).unwrap();
        assert_eq!(removed.key, "a");
        assert_eq!(tree.field(&root, 0).unwrap().key, "b");
    }

    #[test]
    fn test_delete_only_field_leaves_empty_tree() {
        let mut tree = FieldTree::new();
        let root = FieldPath::root();
        tree.add_field(&root).unwrap();
        tree.delete_field(&root, 0).unwrap();
        assert!(tree.is_empty());
    }

    #[test]
    fn test_retype_transitions() {
        let mut tree = FieldTree::new();
        let root = FieldPath::root();
        tree.add_field(&root).unwrap();

        tree.retype_field(&root, 0, FieldType::Nested).unwrap();
        tree.add_field(&root.push(0)).unwrap();
        assert_eq!(
            tree.field(&root, 0).unwrap().children().map(<[Field]>::len),
            Some(1)
        );

        tree.retype_field(&root, 0, FieldType::String).unwrap();
        assert!(tree.field(&root, 0).unwrap().children().is_none());

        // Children do not come back after a transition away and back
        tree.retype_field(&root, 0, FieldType::Nested).unwrap();
        assert_eq!(
            tree.field(&root, 0).unwrap().children().map(<[Field]>::len),
            Some(0)
        );
    }

    #[test]
    fn test_out_of_range_index_fails() {
        let mut tree = FieldTree::new();
        let root = FieldPath::root();
        tree.add_field(&root).unwrap();

        let err = tree.delete_field(&root, 5).unwrap_err();
        assert!(matches!(
            err,
            BuilderError::IndexOutOfBounds { index: 5, len: 1 }
        ));
        assert!(tree
            .update_field(&root, 1, Field::new())
            .is_err());
    }

    #[test]
    fn test_path_through_scalar_field_fails() {
        let mut tree = FieldTree::new();
        let root = FieldPath::root();
        tree.add_field(&root).unwrap();

        let err = tree.add_field(&root.push(0)).unwrap_err();
        assert!(matches!(err, BuilderError::NotNested { .. }));

        let err = tree.fields(&root.push(7)).unwrap_err();
        assert!(matches!(err, BuilderError::PathNotFound { .. }));
    }
}
