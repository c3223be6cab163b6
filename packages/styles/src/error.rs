use thiserror::Error;

pub type StyleResult<T> = Result<T, StyleError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    #[error("Unsupported style declaration '{name}' (value: '{value}')")]
    UnsupportedDeclaration { name: String, value: String },

    #[error("Invalid project config: {0}")]
    InvalidConfig(String),
}

impl StyleError {
    pub fn unsupported(name: impl Into<String>, value: impl Into<String>) -> Self {
        StyleError::UnsupportedDeclaration {
            name: name.into(),
            value: value.into(),
        }
    }
}
