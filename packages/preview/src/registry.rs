//! Element registry: the known element kinds and the typed fields the
//! property chain may assign on each.
//!
//! HTML elements come built in. Plugin kinds (`BButton`, ...) are registered
//! by the host, usually from project configuration.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    /// Rendered as the element's leading text child
    Content,
    Bool,
    Number,
    Enum(Vec<String>),
    /// Event handler name
    Handler,
}

impl FieldType {
    pub fn one_of(options: &[&str]) -> Self {
        FieldType::Enum(options.iter().map(|o| o.to_string()).collect())
    }

    pub fn describe(&self) -> String {
        match self {
            FieldType::Text | FieldType::Content => "text".to_string(),
            FieldType::Bool => "a boolean".to_string(),
            FieldType::Number => "a number".to_string(),
            FieldType::Enum(options) => format!("one of {}", options.join(" | ")),
            FieldType::Handler => "a handler name".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementKind {
    fields: BTreeMap<String, FieldType>,
}

impl ElementKind {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: impl Into<String>, ty: FieldType) -> Self {
        self.fields.insert(name.into(), ty);
        self
    }

    pub fn field_type(&self, name: &str) -> Option<&FieldType> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldType)> {
        self.fields.iter().map(|(name, ty)| (name.as_str(), ty))
    }
}

const HTML_ELEMENTS: &[&str] = &[
    "div", "span", "p", "a", "button", "input", "textarea", "select", "option", "label",
    "form", "img", "ul", "ol", "li", "h1", "h2", "h3", "h4", "h5", "h6", "header", "footer",
    "nav", "main", "section", "article", "aside", "table", "thead", "tbody", "tr", "td",
    "th", "strong", "em", "small", "code", "pre", "blockquote", "hr", "br", "iframe",
    "video", "audio", "svg",
];

/// Inputs whose `type` is passed through unchanged
pub const FORM_INPUTS: &[&str] = &["input", "button"];

fn global_fields() -> ElementKind {
    ElementKind::new()
        .field("id", FieldType::Text)
        .field("title", FieldType::Text)
        .field("role", FieldType::Text)
        .field("aria-label", FieldType::Text)
        .field("tabIndex", FieldType::Number)
        .field("hidden", FieldType::Bool)
        .field("draggable", FieldType::Bool)
        .field("text", FieldType::Content)
        .field("onClick", FieldType::Handler)
}

fn html_kind(name: &str) -> ElementKind {
    let kind = global_fields();
    match name {
        "a" => kind
            .field("href", FieldType::Text)
            .field("target", FieldType::one_of(&["_self", "_blank", "_parent", "_top"]))
            .field("rel", FieldType::Text)
            .field("download", FieldType::Bool),
        "button" => kind.field("disabled", FieldType::Bool),
        "input" => kind
            .field("placeholder", FieldType::Text)
            .field("value", FieldType::Text)
            .field("name", FieldType::Text)
            .field("disabled", FieldType::Bool)
            .field("checked", FieldType::Bool)
            .field("readOnly", FieldType::Bool)
            .field("required", FieldType::Bool)
            .field("min", FieldType::Number)
            .field("max", FieldType::Number)
            .field("step", FieldType::Number),
        "textarea" => kind
            .field("placeholder", FieldType::Text)
            .field("value", FieldType::Text)
            .field("name", FieldType::Text)
            .field("rows", FieldType::Number)
            .field("disabled", FieldType::Bool),
        "select" => kind
            .field("name", FieldType::Text)
            .field("value", FieldType::Text)
            .field("multiple", FieldType::Bool)
            .field("disabled", FieldType::Bool),
        "option" => kind
            .field("value", FieldType::Text)
            .field("selected", FieldType::Bool)
            .field("disabled", FieldType::Bool),
        "label" => kind.field("htmlFor", FieldType::Text),
        "form" => kind
            .field("action", FieldType::Text)
            .field("method", FieldType::one_of(&["get", "post"])),
        "img" => kind
            .field("alt", FieldType::Text)
            .field("loading", FieldType::one_of(&["lazy", "eager"])),
        "iframe" => kind.field("src", FieldType::Text),
        "video" | "audio" => kind
            .field("src", FieldType::Text)
            .field("controls", FieldType::Bool)
            .field("autoPlay", FieldType::Bool)
            .field("loop", FieldType::Bool)
            .field("muted", FieldType::Bool),
        "td" | "th" => kind
            .field("colSpan", FieldType::Number)
            .field("rowSpan", FieldType::Number),
        "ol" => kind.field("start", FieldType::Number),
        _ => kind,
    }
}

#[derive(Debug, Clone, Default)]
pub struct ElementRegistry {
    kinds: HashMap<String, ElementKind>,
}

impl ElementRegistry {
    /// Registry with no known elements
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in HTML elements
    pub fn html() -> Self {
        let kinds = HTML_ELEMENTS
            .iter()
            .map(|name| (name.to_string(), html_kind(name)))
            .collect();
        Self { kinds }
    }

    pub fn register(&mut self, name: impl Into<String>, kind: ElementKind) {
        self.kinds.insert(name.into(), kind);
    }

    pub fn with_kind(mut self, name: impl Into<String>, kind: ElementKind) -> Self {
        self.register(name, kind);
        self
    }

    /// Register every plugin kind in `plugins`, replacing existing entries
    pub fn extend(&mut self, plugins: impl IntoIterator<Item = (String, ElementKind)>) {
        self.kinds.extend(plugins);
    }

    pub fn get(&self, name: &str) -> Option<&ElementKind> {
        self.kinds.get(name)
    }

    pub fn is_known(&self, name: &str) -> bool {
        self.kinds.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}
