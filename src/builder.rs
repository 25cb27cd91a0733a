//! Top-level builder state
//!
//! [`SchemaBuilder`] is what an interactive front end drives: it owns the
//! field tree and a preview string, and regenerates the preview from
//! scratch after every successful mutation. Full recomputation keeps the
//! design simple and the preview trivially consistent; trees are
//! human-entered and small.

use serde_json::{Map, Value};
use tracing::trace;

use crate::error::BuilderError;
use crate::field::{Field, FieldType};
use crate::generate::{generate, render};
use crate::path::FieldPath;
use crate::tree::FieldTree;

/// Interactive schema builder: a field tree plus its live JSON preview
#[derive(Clone, Debug)]
pub struct SchemaBuilder {
    tree: FieldTree,
    preview: String,
}

impl SchemaBuilder {
    /// Create a builder with an empty tree
    pub fn new() -> Self {
        Self {
            tree: FieldTree::new(),
            preview: "{}".to_string(),
        }
    }

    /// The current field tree
    pub fn tree(&self) -> &FieldTree {
        &self.tree
    }

    /// The preview text: the generated schema as 2-space-indented JSON
    pub fn preview(&self) -> &str {
        &self.preview
    }

    /// Generate the schema mapping for the current tree
    pub fn schema(&self) -> Map<String, Value> {
        generate(self.tree.roots())
    }

    /// Append a new default field to the sequence at `parent`; returns the
    /// position it was added at
    pub fn add_field(&mut self, parent: &FieldPath) -> Result<usize, BuilderError> {
        let index = self.tree.add_field(parent)?;
        self.refresh()?;
        Ok(index)
    }

    /// Replace the field at `parent`/`index` wholesale
    pub fn update_field(
        &mut self,
        parent: &FieldPath,
        index: usize,
        field: Field,
    ) -> Result<(), BuilderError> {
        self.tree.update_field(parent, index, field)?;
        self.refresh()
    }

    /// Change the type of the field at `parent`/`index`
    pub fn retype_field(
        &mut self,
        parent: &FieldPath,
        index: usize,
        ty: FieldType,
    ) -> Result<(), BuilderError> {
        self.tree.retype_field(parent, index, ty)?;
        self.refresh()
    }

    /// Remove and return the field at `parent`/`index`
    pub fn delete_field(
        &mut self,
        parent: &FieldPath,
        index: usize,
    ) -> Result<Field, BuilderError> {
        let removed = self.tree.delete_field(parent, index)?;
        self.refresh()?;
        Ok(removed)
    }

    fn refresh(&mut self) -> Result<(), BuilderError> {
        self.preview = render(self.tree.roots())?;
        trace!("Regenerated preview ({} bytes)", self.preview.len());
        Ok(())
    }
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}
