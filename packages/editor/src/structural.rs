//! # Structural edits
//!
//! Drag-drop style operations keyed by [`Path`]. Every operation takes an
//! immutable tree and returns a new one; the input is never modified.
//!
//! ## Move semantics
//!
//! - The root cannot be moved
//! - A node cannot be moved into its own subtree
//! - Moving a node onto itself is a no-op
//! - Dropping a node `Before` the root makes that subtree the whole tree
//! - `Inside` only accepts a target with no children
//! - Removing the source shifts later siblings left; a target that sits under
//!   one of those siblings is renumbered before inserting

use crate::errors::{EditResult, StructuralError};
use crate::spine::{node_at, remove_at, update_at};
use atelier_model::{NodeRef, Path};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// Where a dragged node lands relative to the drop target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropPosition {
    Before,
    After,
    Inside,
}

impl fmt::Display for DropPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DropPosition::Before => "before",
            DropPosition::After => "after",
            DropPosition::Inside => "inside",
        };
        f.write_str(name)
    }
}

impl FromStr for DropPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "before" => Ok(DropPosition::Before),
            "after" => Ok(DropPosition::After),
            "inside" => Ok(DropPosition::Inside),
            other => Err(format!(
                "unknown drop position '{}' (expected before, after or inside)",
                other
            )),
        }
    }
}

/// New tree plus the path the editor should select afterwards
#[derive(Debug, Clone, PartialEq)]
pub struct EditOutcome {
    pub root: NodeRef,
    pub selection: Option<Path>,
}

impl EditOutcome {
    pub fn new(root: NodeRef, selection: Option<Path>) -> Self {
        Self { root, selection }
    }
}

/// Move the subtree at `source` relative to `target`
#[instrument(skip_all, fields(source = %source, target = %target, position = %position))]
pub fn move_node(
    root: &NodeRef,
    source: &Path,
    target: &Path,
    position: DropPosition,
) -> EditResult<EditOutcome> {
    if source.is_root() {
        return Err(StructuralError::RootMove);
    }

    if source == target {
        debug!("Source equals target, nothing to move");
        return Ok(EditOutcome::new(root.clone(), Some(source.clone())));
    }

    if target.is_descendant_of(source) {
        return Err(StructuralError::CyclicTarget {
            node: source.clone(),
            target: target.clone(),
        });
    }

    let moved = node_at(root, source)?.clone();
    let target_node = node_at(root, target)?;

    if target.is_root() && position == DropPosition::Before {
        info!("Promoting subtree to root");
        return Ok(EditOutcome::new(moved, Some(Path::root())));
    }

    if position == DropPosition::Inside && !target_node.children.is_empty() {
        return Err(StructuralError::OccupiedTarget {
            path: target.clone(),
        });
    }

    let detached = remove_at(root, source)?;
    let adjusted = renumber_after_removal(source, target);
    if &adjusted != target {
        debug!(adjusted = %adjusted, "Target renumbered after detaching source");
    }

    insert_at(&detached, moved, &adjusted, position)
}

/// Insert a new node (for example a toolbox drop) relative to `target`
#[instrument(skip_all, fields(target = %target, position = %position))]
pub fn insert(
    root: &NodeRef,
    node: NodeRef,
    target: &Path,
    position: DropPosition,
) -> EditResult<EditOutcome> {
    node_at(root, target)?;
    insert_at(root, node, target, position)
}

/// Make `node` the new root. The previous root, if any, becomes its last child.
pub fn insert_as_root(current: Option<&NodeRef>, node: NodeRef) -> EditOutcome {
    let root = match current {
        None => node,
        Some(previous) => {
            let mut wrapper = (*node).clone();
            wrapper.children.push(previous.clone());
            NodeRef::new(wrapper)
        }
    };
    EditOutcome::new(root, Some(Path::root()))
}

/// Remove the subtree at `path`; the parent becomes the selection
#[instrument(skip_all, fields(path = %path))]
pub fn delete(root: &NodeRef, path: &Path) -> EditResult<EditOutcome> {
    if path.is_root() {
        return Err(StructuralError::RootRemoval);
    }
    node_at(root, path)?;
    let new_root = remove_at(root, path)?;
    Ok(EditOutcome::new(new_root, path.parent()))
}

/// Swap the subtree at `path` for `node`
#[instrument(skip_all, fields(path = %path))]
pub fn replace(root: &NodeRef, path: &Path, node: NodeRef) -> EditResult<EditOutcome> {
    let (parent, index) = match (path.parent(), path.last_index()) {
        (Some(parent), Some(index)) => (parent, index),
        _ => return Ok(EditOutcome::new(node, Some(Path::root()))),
    };

    let new_root = update_at(root, &parent, |parent_node| {
        if index >= parent_node.children.len() {
            return Err(StructuralError::PathNotFound(path.clone()));
        }
        let mut copy = parent_node.clone();
        copy.children[index] = node;
        Ok(copy)
    })?;

    Ok(EditOutcome::new(new_root, Some(path.clone())))
}

fn insert_at(
    root: &NodeRef,
    node: NodeRef,
    target: &Path,
    position: DropPosition,
) -> EditResult<EditOutcome> {
    match position {
        DropPosition::Inside => {
            let new_root = update_at(root, target, |target_node| {
                if !target_node.children.is_empty() {
                    return Err(StructuralError::OccupiedTarget {
                        path: target.clone(),
                    });
                }
                let mut copy = target_node.clone();
                copy.children = vec![node];
                Ok(copy)
            })?;
            Ok(EditOutcome::new(new_root, Some(target.child(0))))
        }
        DropPosition::Before | DropPosition::After => {
            let (parent, target_index) = match (target.parent(), target.last_index()) {
                (Some(parent), Some(index)) => (parent, index),
                _ => {
                    return Err(StructuralError::invalid_target(
                        target,
                        "the root has no siblings",
                    ))
                }
            };

            let index = if position == DropPosition::After {
                target_index + 1
            } else {
                target_index
            };

            let new_root = update_at(root, &parent, |parent_node| {
                if index > parent_node.children.len() {
                    return Err(StructuralError::PathNotFound(target.clone()));
                }
                let mut copy = parent_node.clone();
                copy.children.insert(index, node);
                Ok(copy)
            })?;
            Ok(EditOutcome::new(new_root, Some(parent.child(index))))
        }
    }
}

/// Path of `target` once the node at `removed` has been detached.
///
/// Siblings after the removed node shift left by one, and so does every path
/// that runs through them.
pub fn renumber_after_removal(removed: &Path, target: &Path) -> Path {
    let depth = match removed.depth().checked_sub(1) {
        Some(depth) => depth,
        None => return target.clone(),
    };
    let removed_indices = removed.indices();
    let mut indices = target.indices().to_vec();

    if indices.len() > depth
        && indices[..depth] == removed_indices[..depth]
        && indices[depth] > removed_indices[depth]
    {
        indices[depth] -= 1;
    }

    Path::from_indices(indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(raw: &str) -> Path {
        Path::parse(raw).unwrap()
    }

    #[test]
    fn test_renumber_same_parent() {
        assert_eq!(renumber_after_removal(&p("0,0"), &p("0,2")), p("0,1"));
        assert_eq!(renumber_after_removal(&p("0,2"), &p("0,0")), p("0,0"));
    }

    #[test]
    fn test_renumber_under_later_sibling() {
        assert_eq!(renumber_after_removal(&p("0,1"), &p("0,3,0")), p("0,2,0"));
        assert_eq!(renumber_after_removal(&p("0,1,0"), &p("0,3,0")), p("0,3,0"));
    }

    #[test]
    fn test_renumber_ancestor_unchanged() {
        assert_eq!(renumber_after_removal(&p("0,1,2"), &p("0,1")), p("0,1"));
    }

    #[test]
    fn test_drop_position_parse() {
        assert_eq!("Inside".parse::<DropPosition>(), Ok(DropPosition::Inside));
        assert!("under".parse::<DropPosition>().is_err());
        assert_eq!(DropPosition::After.to_string(), "after");
    }
}
