//! Property and style value grammar shared by the editor, the style engine
//! and the preview interpreter.

/// Reserved property names. They carry editor-only metadata and are never
/// emitted as ordinary properties.
pub mod markers {
    /// Text shown in the designer when the node has no bound text
    pub const TEXT_PREVIEW: &str = "-text";
    pub const SHOW_IF: &str = "-show-if";
    pub const HIDE_IF: &str = "-hide-if";
    /// JSON array driving design-time list materialization
    pub const ITEMS_SOURCE: &str = "-items-source";
    pub const ITEMS_SOURCE_DESIGN_TIME_COUNT: &str = "-items-source-design-time-count";
    pub const IMPORTED_CHILDREN: &str = "-imported-children";
    pub const DISPLAY_NAME: &str = "-name";
    pub const SPREAD: &str = "-spread";
    /// Image source used only while designing
    pub const DESIGN_TIME_SRC: &str = "-design-time-src";

    pub const ALL: &[&str] = &[
        TEXT_PREVIEW,
        SHOW_IF,
        HIDE_IF,
        ITEMS_SOURCE,
        ITEMS_SOURCE_DESIGN_TIME_COUNT,
        IMPORTED_CHILDREN,
        DISPLAY_NAME,
        SPREAD,
        DESIGN_TIME_SRC,
    ];

    pub fn is_design_marker(name: &str) -> bool {
        ALL.contains(&name)
    }
}

/// Prefix of a caller-bound reference (`props.onSave`)
pub const CALLER_PREFIX: &str = "props.";

/// Value that splices the caller's children (`children: {props.children}`)
pub const BOUND_CHILDREN: &str = "{props.children}";

/// Prefix used inside list templates to read the current item
pub const ITEM_ACCESSOR: &str = "item";

/// Split a raw `name: value` entry on its first colon. Entries without a
/// colon yield an empty value.
pub fn split_declaration(raw: &str) -> (&str, &str) {
    match raw.split_once(':') {
        Some((name, value)) => (name.trim(), value.trim()),
        None => (raw.trim(), ""),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    /// `'text'` or `"text"`
    Quoted(String),
    /// `{expression}` (opaque at this layer)
    Bound(String),
    /// Bare identifier, number or anything else
    Raw(String),
}

impl PropertyValue {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();

        if let Some(inner) = unquote(trimmed) {
            return PropertyValue::Quoted(inner.to_string());
        }

        if trimmed.len() >= 2 && trimmed.starts_with('{') && trimmed.ends_with('}') {
            return PropertyValue::Bound(trimmed[1..trimmed.len() - 1].trim().to_string());
        }

        PropertyValue::Raw(trimmed.to_string())
    }

    /// Text with quotes and braces removed
    pub fn text(&self) -> &str {
        match self {
            PropertyValue::Quoted(s) | PropertyValue::Bound(s) | PropertyValue::Raw(s) => s,
        }
    }

    pub fn is_bound(&self) -> bool {
        matches!(self, PropertyValue::Bound(_))
    }

    /// `X` when the value is `props.X` or `{props.X}`
    pub fn caller_binding(&self) -> Option<&str> {
        match self {
            PropertyValue::Bound(s) | PropertyValue::Raw(s) => s
                .strip_prefix(CALLER_PREFIX)
                .filter(|name| !name.is_empty()),
            PropertyValue::Quoted(_) => None,
        }
    }
}

/// Strip matching single or double quotes
pub fn unquote(value: &str) -> Option<&str> {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        let last = bytes[bytes.len() - 1];
        if (first == b'\'' || first == b'"') && first == last {
            return Some(&value[1..value.len() - 1]);
        }
    }
    None
}

/// Wrap a string constant in single quotes
pub fn quote(value: &str) -> String {
    format!("'{}'", value)
}
