//! Copy-on-write helpers.
//!
//! An edit rebuilds only the nodes between the edited node and the root.
//! Cloning a node copies its entry vectors and bumps the reference count of
//! each child, so untouched subtrees stay shared with the previous tree.

use crate::errors::{EditResult, StructuralError};
use atelier_model::{NodeRef, Path, VisualElementModel};
use std::sync::Arc;

/// Node at `path`, walking indices from the second path segment onward
pub(crate) fn node_at<'a>(root: &'a NodeRef, path: &Path) -> EditResult<&'a NodeRef> {
    let mut current = root;
    for &index in path.indices() {
        current = current
            .children
            .get(index)
            .ok_or_else(|| StructuralError::PathNotFound(path.clone()))?;
    }
    Ok(current)
}

/// Replace the node at `path` with the result of `edit`, returning the new root
pub(crate) fn update_at<F>(root: &NodeRef, path: &Path, edit: F) -> EditResult<NodeRef>
where
    F: FnOnce(&VisualElementModel) -> EditResult<VisualElementModel>,
{
    fn rebuild<F>(node: &NodeRef, indices: &[usize], path: &Path, edit: F) -> EditResult<NodeRef>
    where
        F: FnOnce(&VisualElementModel) -> EditResult<VisualElementModel>,
    {
        match indices.split_first() {
            None => Ok(Arc::new(edit(node)?)),
            Some((&index, rest)) => {
                let child = node
                    .children
                    .get(index)
                    .ok_or_else(|| StructuralError::PathNotFound(path.clone()))?;
                let new_child = rebuild(child, rest, path, edit)?;

                let mut copy = VisualElementModel::clone(node);
                copy.children[index] = new_child;
                Ok(Arc::new(copy))
            }
        }
    }

    rebuild(root, path.indices(), path, edit)
}

/// Detach the node at `path` from its parent
pub(crate) fn remove_at(root: &NodeRef, path: &Path) -> EditResult<NodeRef> {
    let (parent, index) = match (path.parent(), path.last_index()) {
        (Some(parent), Some(index)) => (parent, index),
        _ => return Err(StructuralError::RootRemoval),
    };

    update_at(root, &parent, |node| {
        if index >= node.children.len() {
            return Err(StructuralError::PathNotFound(path.clone()));
        }
        let mut copy = node.clone();
        copy.children.remove(index);
        Ok(copy)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> NodeRef {
        VisualElementModel::new("div")
            .with_child(VisualElementModel::new("a"))
            .with_child(VisualElementModel::new("b").with_child(VisualElementModel::new("c")))
            .into_ref()
    }

    #[test]
    fn test_update_shares_untouched_subtrees() {
        let root = tree();
        let path = Path::parse("0,1,0").unwrap();
        let updated = update_at(&root, &path, |node| {
            Ok(node.clone().with_property("id: 'x'"))
        })
        .unwrap();

        assert!(Arc::ptr_eq(&root.children[0], &updated.children[0]));
        assert!(!Arc::ptr_eq(&root.children[1], &updated.children[1]));
        assert_eq!(updated.get(&path).unwrap().property("id"), Some("'x'"));
        // Input tree is untouched
        assert!(root.get(&path).unwrap().properties.is_empty());
    }

    #[test]
    fn test_update_missing_path() {
        let root = tree();
        let path = Path::parse("0,4").unwrap();
        assert_eq!(
            update_at(&root, &path, |n| Ok(n.clone())).unwrap_err(),
            StructuralError::PathNotFound(path)
        );
    }

    #[test]
    fn test_remove_at() {
        let root = tree();
        let removed = remove_at(&root, &Path::parse("0,0").unwrap()).unwrap();
        assert_eq!(removed.children.len(), 1);
        assert_eq!(root.children.len(), 2);
        assert_eq!(
            remove_at(&root, &Path::root()).unwrap_err(),
            StructuralError::RootRemoval
        );
    }
}
