use atelier_model::{ComponentId, ModelError};
use atelier_styles::StyleError;
use thiserror::Error;

pub type PreviewResult<T> = Result<T, PreviewError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PreviewError {
    #[error("Cannot resolve tag '{tag}' at {path}")]
    UnresolvedTag { tag: String, path: String },

    #[error("Component {id} not found (referenced at {path})")]
    ComponentNotFound { id: ComponentId, path: String },

    #[error("Unprocessed property '{property}: {value}' on <{tag}> at {path}")]
    UnprocessedProperty {
        tag: String,
        property: String,
        value: String,
        path: String,
    },

    #[error("Property '{property}' on <{tag}> at {path} expects {expected}, got '{value}'")]
    InvalidPropertyValue {
        tag: String,
        property: String,
        value: String,
        expected: String,
        path: String,
    },

    #[error(
        "Recursive component detected: {id}\nCall stack: {}",
        chain.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(" → ")
    )]
    RecursiveComponent { id: ComponentId, chain: Vec<ComponentId> },

    #[error("Component nesting deeper than {limit} at {path}")]
    MaxDepth { limit: usize, path: String },

    #[error("Style error: {0}")]
    Style(#[from] StyleError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Store error: {0}")]
    Store(String),
}

impl PreviewError {
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store(message.into())
    }
}
