//! Render tree produced by the interpreter and consumed by the design
//! surface.

use atelier_styles::{CssProperty, ResolvedStyle};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Typed attribute value set through the element registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Text(String),
    Bool(bool),
    Number(f64),
    /// Name of an event handler (never invoked at design time)
    Handler { handler: String },
}

impl AttributeValue {
    pub fn handler(name: impl Into<String>) -> Self {
        Self::Handler {
            handler: name.into(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RenderNode {
    Element(RenderElement),
    Text { id: String, content: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderElement {
    /// Element name (`div`, `img`, `BButton`)
    pub kind: String,

    /// Path string used for click-to-select
    pub id: String,

    /// Spliced in from the caller through `{props.children}`
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub imported: bool,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, AttributeValue>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub styles: Vec<CssProperty>,

    /// Styles that only apply under pseudo/breakpoint prefixes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variant_styles: Vec<ResolvedStyle>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RenderNode>,
}

impl RenderElement {
    pub fn new(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: id.into(),
            imported: false,
            attributes: BTreeMap::new(),
            classes: Vec::new(),
            styles: Vec::new(),
            variant_styles: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: AttributeValue) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    pub fn with_style(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.push(CssProperty::new(name, value));
        self
    }

    pub fn with_child(mut self, child: RenderNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }

    /// Last resolved value of a base (non-variant) CSS property
    pub fn style(&self, name: &str) -> Option<&str> {
        self.styles
            .iter()
            .rev()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }
}

impl RenderNode {
    pub fn text(id: impl Into<String>, content: impl Into<String>) -> Self {
        RenderNode::Text {
            id: id.into(),
            content: content.into(),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            RenderNode::Element(element) => &element.id,
            RenderNode::Text { id, .. } => id,
        }
    }

    pub fn as_element(&self) -> Option<&RenderElement> {
        match self {
            RenderNode::Element(element) => Some(element),
            RenderNode::Text { .. } => None,
        }
    }

    pub fn children(&self) -> &[RenderNode] {
        match self {
            RenderNode::Element(element) => &element.children,
            RenderNode::Text { .. } => &[],
        }
    }

    /// Concatenated text of this subtree
    pub fn text_content(&self) -> String {
        match self {
            RenderNode::Text { content, .. } => content.clone(),
            RenderNode::Element(element) => element
                .children
                .iter()
                .map(RenderNode::text_content)
                .collect(),
        }
    }

    /// Re-home a spliced subtree onto the invocation that owns it
    pub(crate) fn mark_imported(&mut self, owner: &str) {
        match self {
            RenderNode::Text { id, .. } => *id = owner.to_string(),
            RenderNode::Element(element) => {
                element.id = owner.to_string();
                element.imported = true;
                for child in &mut element.children {
                    child.mark_imported(owner);
                }
            }
        }
    }

    /// First node (pre-order) whose element kind is `kind`
    pub fn find_kind(&self, kind: &str) -> Option<&RenderElement> {
        match self {
            RenderNode::Element(element) if element.kind == kind => Some(element),
            RenderNode::Element(element) => {
                element.children.iter().find_map(|c| c.find_kind(kind))
            }
            RenderNode::Text { .. } => None,
        }
    }

    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(RenderNode::node_count).sum::<usize>()
    }
}

impl From<RenderElement> for RenderNode {
    fn from(element: RenderElement) -> Self {
        RenderNode::Element(element)
    }
}

/// Result of resolving one tree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreviewDocument {
    /// `None` when the root itself is hidden in the designer
    pub root: Option<RenderNode>,
}

impl PreviewDocument {
    pub fn node_count(&self) -> usize {
        self.root.as_ref().map_or(0, RenderNode::node_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_type_tag() {
        let node: RenderNode = RenderElement::new("div", "0")
            .with_attr("title", AttributeValue::Text("Card".into()))
            .with_child(RenderNode::text("0,0", "Hello"))
            .into();
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "Element");
        assert_eq!(json["kind"], "div");
        assert_eq!(json["attributes"]["title"], "Card");
        assert_eq!(json["children"][0]["type"], "Text");
        assert!(json.get("imported").is_none());
    }

    #[test]
    fn test_mark_imported_rehomes_subtree() {
        let mut node: RenderNode = RenderElement::new("p", "0,1")
            .with_child(RenderNode::text("0,1,0", "x"))
            .into();
        node.mark_imported("0,3");
        assert_eq!(node.id(), "0,3");
        assert!(node.as_element().unwrap().imported);
        assert_eq!(node.children()[0].id(), "0,3");
    }

    #[test]
    fn test_handler_value_json() {
        let value = AttributeValue::handler("handleSave");
        assert_eq!(
            serde_json::to_string(&value).unwrap(),
            r#"{"handler":"handleSave"}"#
        );
    }
}
