//! # Atelier Model
//!
//! The design tree edited by Atelier.
//!
//! A tree is made of [`VisualElementModel`] nodes. Each node has a [`Tag`]
//! (HTML/plugin element, component reference or text leaf), ordered raw
//! property and style entries, and ordered children. Nodes are addressed
//! only by [`Path`]; nothing else identifies a node across edits.
//!
//! Trees are immutable once built. Children are held through [`NodeRef`]
//! (`Arc`), so edits share every subtree they do not touch.
//!
//! ## Serialized forms
//!
//! - JSON through `serde`
//! - the indented tree format ([`serialize`] / [`parse`]) used for drafts and
//!   history snapshots

pub mod error;
pub mod node;
pub mod parser;
pub mod path;
pub mod serializer;
pub mod value;

#[cfg(test)]
mod tests_serializer;

pub use error::{ModelError, ModelResult};
pub use node::{ComponentId, NodeRef, Tag, VisualElementModel, TEXT_TAG};
pub use parser::{parse, Parser};
pub use path::Path;
pub use serializer::{serialize, Serializer};
pub use value::{markers, split_declaration, PropertyValue};
