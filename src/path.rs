//! Positional paths into the field tree
//!
//! A [`FieldPath`] addresses a sequence of fields: the root sequence when
//! empty, otherwise the children of the nested field reached by indexing
//! each level in turn (e.g. `[0][2]` is the children of the third child of
//! the first top-level field).

use std::fmt;

use crate::error::BuilderError;

/// Path of positional segments into the field tree
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<usize>,
}

impl FieldPath {
    /// Create a root path (empty), addressing the top-level sequence
    pub fn root() -> Self {
        Self { segments: vec![] }
    }

    /// Check if this is the root path
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Get the depth (number of segments)
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Push an index segment, descending into the field at `idx`
    pub fn push(&self, idx: usize) -> Self {
        let mut new = self.clone();
        new.segments.push(idx);
        new
    }

    /// Get the parent path (without the last segment)
    pub fn parent(&self) -> Self {
        let mut new = self.clone();
        new.segments.pop();
        new
    }

    /// Get segments iterator
    pub fn segments(&self) -> impl Iterator<Item = usize> + '_ {
        self.segments.iter().copied()
    }

    /// Parse bracket notation (`""`, `"[0]"`, `"[0][2]"`) into a path
    pub fn parse(s: &str) -> Result<Self, BuilderError> {
        let mut segments = Vec::new();
        let mut rest = s.trim();

        while !rest.is_empty() {
            let inner = rest
                .strip_prefix('[')
                .and_then(|r| r.split_once(']'))
                .ok_or_else(|| BuilderError::InvalidPath(s.to_string()))?;
            let idx = inner
                .0
                .parse::<usize>()
                .map_err(|_| BuilderError::InvalidPath(s.to_string()))?;
            segments.push(idx);
            rest = inner.1;
        }

        Ok(Self { segments })
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for idx in &self.segments {
            write!(f, "[{}]", idx)?;
        }
        Ok(())
    }
}
