//! Property, style and visibility edits. Same copy-on-write discipline as the
//! structural edits.

use crate::errors::EditResult;
use crate::spine::update_at;
use atelier_model::{split_declaration, NodeRef, Path};

/// Set `name` to `value`. The first entry with that name is rewritten in
/// place; otherwise a new entry is appended.
pub fn set_property(root: &NodeRef, path: &Path, name: &str, value: &str) -> EditResult<NodeRef> {
    let entry = format!("{}: {}", name, value);
    update_at(root, path, |node| {
        let mut copy = node.clone();
        match copy
            .properties
            .iter()
            .position(|p| split_declaration(p).0 == name)
        {
            Some(index) => copy.properties[index] = entry,
            None => copy.properties.push(entry),
        }
        Ok(copy)
    })
}

/// Remove every entry declared with `name`
pub fn remove_property(root: &NodeRef, path: &Path, name: &str) -> EditResult<NodeRef> {
    update_at(root, path, |node| {
        let mut copy = node.clone();
        copy.properties.retain(|p| split_declaration(p).0 != name);
        Ok(copy)
    })
}

/// Append a style declaration or token
pub fn add_style(root: &NodeRef, path: &Path, style: &str) -> EditResult<NodeRef> {
    update_at(root, path, |node| {
        let mut copy = node.clone();
        copy.styles.push(style.to_string());
        Ok(copy)
    })
}

/// Remove the first style entry equal to `style`
pub fn remove_style(root: &NodeRef, path: &Path, style: &str) -> EditResult<NodeRef> {
    update_at(root, path, |node| {
        let mut copy = node.clone();
        if let Some(index) = copy.styles.iter().position(|s| s.trim() == style.trim()) {
            copy.styles.remove(index);
        }
        Ok(copy)
    })
}

pub fn set_hidden(root: &NodeRef, path: &Path, hidden: bool) -> EditResult<NodeRef> {
    update_at(root, path, |node| {
        let mut copy = node.clone();
        copy.hide_in_designer = hidden;
        Ok(copy)
    })
}
