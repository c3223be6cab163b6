use crate::path::Path;
use crate::value::{markers, split_declaration, PropertyValue};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Identifier of a stored component
pub type ComponentId = u64;

/// Shared handle to an immutable node. Edits rebuild the spine from the
/// mutated node to the root and share every other subtree.
pub type NodeRef = Arc<VisualElementModel>;

pub const TEXT_TAG: &str = "#text";

/// What a node renders as, decided once when the raw tag is read
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tag {
    /// HTML element or plugin element name
    Html(String),
    /// Invocation of another stored component
    Component(ComponentId),
    /// Text leaf
    Text,
}

impl Tag {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();

        if raw.is_empty() || raw == TEXT_TAG {
            return Tag::Text;
        }

        if raw.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(id) = raw.parse::<ComponentId>() {
                return Tag::Component(id);
            }
        }

        Tag::Html(raw.to_string())
    }

    pub fn element_name(&self) -> Option<&str> {
        match self {
            Tag::Html(name) => Some(name),
            _ => None,
        }
    }

    pub fn component_id(&self) -> Option<ComponentId> {
        match self {
            Tag::Component(id) => Some(*id),
            _ => None,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Html(name) => f.write_str(name),
            Tag::Component(id) => write!(f, "{}", id),
            Tag::Text => f.write_str(TEXT_TAG),
        }
    }
}

impl From<String> for Tag {
    fn from(raw: String) -> Self {
        Tag::parse(&raw)
    }
}

impl From<&str> for Tag {
    fn from(raw: &str) -> Self {
        Tag::parse(raw)
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.to_string()
    }
}

/// A node of the design tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualElementModel {
    pub tag: Tag,

    /// Raw `name: value` entries in insertion order
    #[serde(default)]
    pub properties: Vec<String>,

    /// Raw style declarations or bare utility/named-style tokens
    #[serde(default)]
    pub styles: Vec<String>,

    #[serde(default)]
    pub children: Vec<NodeRef>,

    #[serde(default)]
    pub hide_in_designer: bool,
}

impl VisualElementModel {
    pub fn new(tag: impl Into<Tag>) -> Self {
        Self {
            tag: tag.into(),
            properties: Vec::new(),
            styles: Vec::new(),
            children: Vec::new(),
            hide_in_designer: false,
        }
    }

    pub fn text(content: &str) -> Self {
        Self::new(Tag::Text).with_property(format!("text: '{}'", content))
    }

    pub fn with_property(mut self, property: impl Into<String>) -> Self {
        self.properties.push(property.into());
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.styles.push(style.into());
        self
    }

    pub fn with_child(mut self, child: VisualElementModel) -> Self {
        self.children.push(Arc::new(child));
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = VisualElementModel>) -> Self {
        self.children.extend(children.into_iter().map(Arc::new));
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hide_in_designer = true;
        self
    }

    pub fn into_ref(self) -> NodeRef {
        Arc::new(self)
    }

    /// Iterate `(name, value)` pairs in declaration order
    pub fn property_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties.iter().map(|p| split_declaration(p))
    }

    /// First property declared with `name`
    pub fn property(&self, name: &str) -> Option<&str> {
        self.property_pairs()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }

    /// Last property declared with `name`
    pub fn last_property(&self, name: &str) -> Option<&str> {
        self.property_pairs()
            .filter(|(n, _)| *n == name)
            .last()
            .map(|(_, v)| v)
    }

    pub fn property_value(&self, name: &str) -> Option<PropertyValue> {
        self.property(name).map(PropertyValue::parse)
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.property(name).is_some()
    }

    pub fn display_name(&self) -> Option<String> {
        self.property_value(markers::DISPLAY_NAME)
            .map(|v| v.text().to_string())
    }

    /// Node addressed by `path`, walking indices below the root
    pub fn get(&self, path: &Path) -> Option<&VisualElementModel> {
        let mut current = self;
        for &index in path.indices() {
            current = current.children.get(index)?;
        }
        Some(current)
    }

    /// Pre-order traversal with each node's path
    pub fn walk<F>(&self, mut visit: F)
    where
        F: FnMut(&Path, &VisualElementModel),
    {
        fn walk_inner<F>(node: &VisualElementModel, path: &Path, visit: &mut F)
        where
            F: FnMut(&Path, &VisualElementModel),
        {
            visit(path, node);
            for (i, child) in node.children.iter().enumerate() {
                walk_inner(child, &path.child(i), visit);
            }
        }

        walk_inner(self, &Path::root(), &mut visit);
    }

    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(|c| c.node_count()).sum::<usize>()
    }
}
