//! # Mutations
//!
//! Serializable edit requests sent by the editing UI. Each variant maps to one
//! operation in [`crate::structural`] or [`crate::attributes`].

use crate::attributes;
use crate::errors::EditResult;
use crate::structural::{self, DropPosition, EditOutcome};
use atelier_model::{NodeRef, Path};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Mutation {
    /// Drag an existing node to a new location
    Move {
        source: Path,
        target: Path,
        position: DropPosition,
    },

    /// Drop a new node relative to an existing one
    Insert {
        node: NodeRef,
        target: Path,
        position: DropPosition,
    },

    /// Wrap the current tree in a new root
    InsertAsRoot { node: NodeRef },

    Delete { path: Path },

    Replace { path: Path, node: NodeRef },

    SetProperty {
        path: Path,
        name: String,
        value: String,
    },

    RemoveProperty { path: Path, name: String },

    AddStyle { path: Path, style: String },

    RemoveStyle { path: Path, style: String },

    SetHidden { path: Path, hidden: bool },
}

impl Mutation {
    pub fn apply(&self, root: &NodeRef) -> EditResult<EditOutcome> {
        match self {
            Mutation::Move {
                source,
                target,
                position,
            } => structural::move_node(root, source, target, *position),

            Mutation::Insert {
                node,
                target,
                position,
            } => structural::insert(root, node.clone(), target, *position),

            Mutation::InsertAsRoot { node } => {
                Ok(structural::insert_as_root(Some(root), node.clone()))
            }

            Mutation::Delete { path } => structural::delete(root, path),

            Mutation::Replace { path, node } => structural::replace(root, path, node.clone()),

            Mutation::SetProperty { path, name, value } => {
                let root = attributes::set_property(root, path, name, value)?;
                Ok(EditOutcome::new(root, Some(path.clone())))
            }

            Mutation::RemoveProperty { path, name } => {
                let root = attributes::remove_property(root, path, name)?;
                Ok(EditOutcome::new(root, Some(path.clone())))
            }

            Mutation::AddStyle { path, style } => {
                let root = attributes::add_style(root, path, style)?;
                Ok(EditOutcome::new(root, Some(path.clone())))
            }

            Mutation::RemoveStyle { path, style } => {
                let root = attributes::remove_style(root, path, style)?;
                Ok(EditOutcome::new(root, Some(path.clone())))
            }

            Mutation::SetHidden { path, hidden } => {
                let root = attributes::set_hidden(root, path, *hidden)?;
                Ok(EditOutcome::new(root, Some(path.clone())))
            }
        }
    }

    /// Debug name used for history descriptions
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::Move { .. } => "move",
            Mutation::Insert { .. } => "insert",
            Mutation::InsertAsRoot { .. } => "insert-as-root",
            Mutation::Delete { .. } => "delete",
            Mutation::Replace { .. } => "replace",
            Mutation::SetProperty { .. } => "set-property",
            Mutation::RemoveProperty { .. } => "remove-property",
            Mutation::AddStyle { .. } => "add-style",
            Mutation::RemoveStyle { .. } => "remove-style",
            Mutation::SetHidden { .. } => "set-hidden",
        }
    }
}
