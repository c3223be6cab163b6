//! Path addressing for design trees.
//!
//! A path is a comma-separated list of child indices that always starts with
//! the root marker `0`: `0,2,1` means root → child 2 → child 1. Paths are the
//! only identity a node has; structural edits recompute them.

use crate::error::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const ROOT_MARKER: &str = "0";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Path {
    /// Child indices below the root (the root marker is implicit)
    indices: Vec<usize>,
}

impl Path {
    pub fn root() -> Self {
        Self {
            indices: Vec::new(),
        }
    }

    pub fn from_indices(indices: impl Into<Vec<usize>>) -> Self {
        Self {
            indices: indices.into(),
        }
    }

    pub fn parse(raw: &str) -> ModelResult<Self> {
        let mut segments = raw.split(',').map(str::trim);

        match segments.next() {
            Some(ROOT_MARKER) => {}
            _ => {
                return Err(ModelError::invalid_path(
                    raw,
                    format!("must start with root marker '{}'", ROOT_MARKER),
                ))
            }
        }

        let mut indices = Vec::new();
        for segment in segments {
            let index = segment.parse::<usize>().map_err(|_| {
                ModelError::invalid_path(raw, format!("'{}' is not a child index", segment))
            })?;
            indices.push(index);
        }

        Ok(Self { indices })
    }

    /// Indices walked from the second path segment onward
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn is_root(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.indices.len()
    }

    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.indices.clone();
        indices.push(index);
        Self { indices }
    }

    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        Some(Self {
            indices: self.indices[..self.indices.len() - 1].to_vec(),
        })
    }

    pub fn last_index(&self) -> Option<usize> {
        self.indices.last().copied()
    }

    /// Strict descendant check; a path is not its own descendant
    pub fn is_descendant_of(&self, ancestor: &Path) -> bool {
        self.indices.len() > ancestor.indices.len()
            && self.indices.starts_with(&ancestor.indices)
    }

    pub fn is_sibling_of(&self, other: &Path) -> bool {
        !self.is_root() && !other.is_root() && self.parent() == other.parent()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(ROOT_MARKER)?;
        for index in &self.indices {
            write!(f, ",{}", index)?;
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Path::parse(s)
    }
}

impl TryFrom<String> for Path {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Path::parse(&value)
    }
}

impl From<Path> for String {
    fn from(path: Path) -> Self {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let path = Path::parse("0,2,1").unwrap();
        assert_eq!(path.indices(), &[2, 1]);
        assert_eq!(path.to_string(), "0,2,1");
        assert_eq!(Path::parse("0").unwrap(), Path::root());
    }

    #[test]
    fn test_parse_tolerates_spaces() {
        assert_eq!(Path::parse("0, 3").unwrap().indices(), &[3]);
    }

    #[test]
    fn test_parse_rejects_missing_root() {
        assert!(matches!(
            Path::parse("1,2"),
            Err(ModelError::InvalidPath { .. })
        ));
        assert!(Path::parse("").is_err());
        assert!(Path::parse("0,x").is_err());
    }

    #[test]
    fn test_descendant() {
        let parent = Path::parse("0,1").unwrap();
        assert!(Path::parse("0,1,0").unwrap().is_descendant_of(&parent));
        assert!(!parent.is_descendant_of(&parent));
        assert!(!Path::parse("0,10").unwrap().is_descendant_of(&parent));
        assert!(parent.is_descendant_of(&Path::root()));
    }

    #[test]
    fn test_parent_and_child() {
        let path = Path::root().child(2).child(0);
        assert_eq!(path.parent(), Some(Path::root().child(2)));
        assert_eq!(path.last_index(), Some(0));
        assert_eq!(Path::root().parent(), None);
        assert!(path.is_sibling_of(&Path::root().child(2).child(5)));
    }

    #[test]
    fn test_serde_as_string() {
        let path = Path::parse("0,4").unwrap();
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, "\"0,4\"");
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
    }
}
