//! Error types for the editor

use atelier_model::Path;
use thiserror::Error;

pub type EditResult<T> = Result<T, StructuralError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StructuralError {
    #[error("Cannot move the root element")]
    RootMove,

    #[error("Cannot remove the root element")]
    RootRemoval,

    #[error("Cannot move {node} into its own descendant {target}")]
    CyclicTarget { node: Path, target: Path },

    #[error("Select a valid location: {path} already has children")]
    OccupiedTarget { path: Path },

    #[error("Select a valid location: {reason} ({path})")]
    InvalidTarget { path: Path, reason: String },

    #[error("No node at path {0}")]
    PathNotFound(Path),
}

impl StructuralError {
    pub fn invalid_target(path: &Path, reason: impl Into<String>) -> Self {
        Self::InvalidTarget {
            path: path.clone(),
            reason: reason.into(),
        }
    }
}
