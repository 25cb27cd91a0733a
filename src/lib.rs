//! # Formtree - Interactive Schema Builder Core
//!
//! Formtree is the state and transform core of an interactive JSON schema
//! builder: a recursively nested tree of key/type fields with positional
//! mutation operations, and a pure generator that turns the tree into a
//! nested key-to-descriptor mapping with a live textual preview.
//!
//! ## Features
//!
//! - **Field tree store**: add, replace, retype, and delete fields at any
//!   nesting depth, addressed by positional paths
//! - **Typed fields**: `string`, `number`, and `nested` as a tagged union,
//!   so only nested fields can ever carry children
//! - **Schema generation**: pure, deterministic transform; empty keys are
//!   skipped, nested fields become `object`s with recursive `properties`
//! - **Live preview**: 2-space-indented JSON, regenerated from scratch
//!   after every mutation
//!
//! ## Quick Start
//!
//! ```rust
//! use formtree::{Field, FieldPath, SchemaBuilder};
//!
//! fn main() -> Result<(), formtree::BuilderError> {
//!     let mut builder = SchemaBuilder::new();
//!     let root = FieldPath::root();
//!
//!     let i = builder.add_field(&root)?;
//!     builder.update_field(&root, i, Field::nested("addr", vec![]))?;
//!
//!     let inner = root.push(i);
//!     builder.add_field(&inner)?;
//!     builder.update_field(&inner, 0, Field::string("city"))?;
//!
//!     println!("{}", builder.preview());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **field**: the `Field` data model and its type enumeration
//! - **path**: positional addressing into the tree
//! - **tree**: the owning store and its mutation operations
//! - **generate**: the tree-to-schema transform and preview rendering
//! - **builder**: top-level state tying the store to the live preview

pub mod builder;
pub mod error;
pub mod field;
pub mod generate;
pub mod path;
pub mod tree;

pub use builder::SchemaBuilder;
pub use error::BuilderError;
pub use field::{Field, FieldKind, FieldType};
pub use generate::{generate, render};
pub use path::FieldPath;
pub use tree::FieldTree;
