//! Reading and writing tree files. `.json` files hold the serde form;
//! anything else is the indented tree format.

use anyhow::{anyhow, Result};
use atelier_model::{parse, serialize, VisualElementModel};
use std::fs;
use std::path::Path;

pub const TREE_EXTENSION: &str = "tree";

pub fn is_json(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("json")
}

pub fn read_tree(path: &Path) -> Result<VisualElementModel> {
    let source = fs::read_to_string(path)
        .map_err(|e| anyhow!("Cannot read {}: {}", path.display(), e))?;
    let tree = if is_json(path) {
        serde_json::from_str(&source)?
    } else {
        parse(&source).map_err(|e| anyhow!("{}: {}", path.display(), e))?
    };
    Ok(tree)
}

/// Tree in the format implied by `path`
pub fn render_tree(tree: &VisualElementModel, path: &Path) -> Result<String> {
    if is_json(path) {
        Ok(serde_json::to_string_pretty(tree)?)
    } else {
        Ok(serialize(tree))
    }
}

pub fn write_tree(tree: &VisualElementModel, path: &Path) -> Result<()> {
    fs::write(path, render_tree(tree, path)?)?;
    Ok(())
}
