//! Scope chain used to resolve caller-bound (`props.X`) values across
//! component boundaries.
//!
//! Each component invocation gets a child scope borrowing its parent; the
//! chain is never mutated.

use atelier_model::{ComponentId, Path, PropertyValue, VisualElementModel};
use serde_json::Value;

/// The node that invoked a component, with its location in the caller
#[derive(Debug, Clone, Copy)]
pub struct Invocation<'a> {
    pub node: &'a VisualElementModel,
    pub path: &'a Path,
    pub component: ComponentId,
}

#[derive(Debug, Clone)]
pub struct Scope<'a> {
    parent: Option<&'a Scope<'a>>,
    invocation: Option<Invocation<'a>>,
    /// Component whose tree is rendered in this scope
    component: Option<ComponentId>,
    /// Identity given to every node rendered in this scope
    boundary: Option<String>,
}

impl Scope<'static> {
    /// Scope of the tree being edited
    pub fn root() -> Self {
        Self {
            parent: None,
            invocation: None,
            component: None,
            boundary: None,
        }
    }

    /// Root scope for the tree of stored component `id`
    pub fn root_of(id: ComponentId) -> Self {
        Self {
            component: Some(id),
            ..Self::root()
        }
    }
}

impl<'a> Scope<'a> {
    /// Scope for the component invoked by `invocation`
    pub fn child(&'a self, invocation: Invocation<'a>) -> Scope<'a> {
        let boundary = self
            .boundary
            .clone()
            .unwrap_or_else(|| invocation.path.to_string());
        Scope {
            parent: Some(self),
            invocation: Some(invocation),
            component: Some(invocation.component),
            boundary: Some(boundary),
        }
    }

    pub fn parent(&self) -> Option<&'a Scope<'a>> {
        self.parent
    }

    pub fn invocation(&self) -> Option<&Invocation<'a>> {
        self.invocation.as_ref()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Path string of the outermost invocation, `None` in the root scope
    pub fn boundary(&self) -> Option<&str> {
        self.boundary.as_deref()
    }

    /// Number of component invocations above this scope
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self;
        while let Some(parent) = current.parent {
            depth += 1;
            current = parent;
        }
        depth
    }

    /// Invoked components, outermost first
    pub fn component_chain(&self) -> Vec<ComponentId> {
        let mut chain = Vec::new();
        let mut current = Some(self);
        while let Some(scope) = current {
            if let Some(id) = scope.component {
                chain.push(id);
            }
            current = scope.parent;
        }
        chain.reverse();
        chain
    }

    pub fn contains_component(&self, id: ComponentId) -> bool {
        let mut current = Some(self);
        while let Some(scope) = current {
            if scope.component == Some(id) {
                return true;
            }
            current = scope.parent;
        }
        false
    }

    /// Value of the invoking node's own property `name`, resolved in the
    /// caller's scope
    pub fn resolve_binding(&self, name: &str) -> Option<Value> {
        let invocation = self.invocation?;
        let raw = invocation.node.property(name)?;
        let parent = self.parent?;
        parent.resolve_value(raw)
    }

    /// Literal value of a raw property value. String literals, raw strings,
    /// booleans, numbers and JSON arrays unwrap; `props.X` walks one scope
    /// up. Anything else has no design-time value.
    pub fn resolve_value(&self, raw: &str) -> Option<Value> {
        let value = PropertyValue::parse(raw);
        if let Some(name) = value.caller_binding() {
            return self.resolve_binding(name);
        }

        match value {
            PropertyValue::Quoted(text) => Some(Value::String(text)),
            PropertyValue::Raw(text) => {
                if text.is_empty() {
                    return None;
                }
                Some(scalar(&text).unwrap_or(Value::String(text)))
            }
            PropertyValue::Bound(expression) => match PropertyValue::parse(&expression) {
                PropertyValue::Quoted(text) => Some(Value::String(text)),
                _ => scalar(&expression),
            },
        }
    }
}

/// Boolean, number or JSON array written as text
fn scalar(text: &str) -> Option<Value> {
    match text {
        "true" => return Some(Value::Bool(true)),
        "false" => return Some(Value::Bool(false)),
        _ => {}
    }

    if text.starts_with('[') {
        return serde_json::from_str::<Value>(text)
            .ok()
            .filter(Value::is_array);
    }

    if let Ok(integer) = text.parse::<i64>() {
        return Some(Value::from(integer));
    }
    let number = text.parse::<f64>().ok()?;
    serde_json::Number::from_f64(number).map(Value::Number)
}

/// Design-time truthiness of a resolved value
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |n| n != 0.0),
        Value::String(s) => !s.is_empty() && s != "false",
        Value::Array(items) => !items.is_empty(),
        Value::Object(_) => true,
    }
}

/// Display form of a resolved value
pub fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_literals_unwrap() {
        let scope = Scope::root();
        assert_eq!(scope.resolve_value("'Save'"), Some(json!("Save")));
        assert_eq!(scope.resolve_value("handleSave"), Some(json!("handleSave")));
        assert_eq!(scope.resolve_value("true"), Some(json!(true)));
        assert_eq!(scope.resolve_value("{false}"), Some(json!(false)));
        assert_eq!(scope.resolve_value("42"), Some(json!(42)));
        assert_eq!(scope.resolve_value("1.5"), Some(json!(1.5)));
        assert_eq!(scope.resolve_value("[1, 2]"), Some(json!([1, 2])));
        assert_eq!(scope.resolve_value("{['a']}"), None);
        assert_eq!(scope.resolve_value("{[\"a\"]}"), Some(json!(["a"])));
        assert_eq!(scope.resolve_value("{user.name}"), None);
    }

    #[test]
    fn test_binding_walks_one_scope_up() {
        let caller = VisualElementModel::new("7")
            .with_property("title: 'Hello'")
            .with_property("count: 3")
            .with_property("label: props.heading");
        let grand = VisualElementModel::new("8").with_property("heading: 'Top'");

        let root = Scope::root();
        let grand_path = Path::from_indices(vec![0]);
        let outer = root.child(Invocation {
            node: &grand,
            path: &grand_path,
            component: 8,
        });
        let caller_path = Path::from_indices(vec![1]);
        let inner = outer.child(Invocation {
            node: &caller,
            path: &caller_path,
            component: 7,
        });

        assert_eq!(inner.resolve_value("props.title"), Some(json!("Hello")));
        assert_eq!(inner.resolve_value("{props.count}"), Some(json!(3)));
        assert_eq!(inner.resolve_value("props.label"), Some(json!("Top")));
        assert_eq!(inner.resolve_value("props.missing"), None);
        assert_eq!(root.resolve_value("props.title"), None);
    }

    #[test]
    fn test_chain_bookkeeping() {
        let node = VisualElementModel::new("3");
        let path = Path::from_indices(vec![2]);
        let root = Scope::root();
        let child = root.child(Invocation {
            node: &node,
            path: &path,
            component: 3,
        });
        let nested_path = Path::root();
        let nested = child.child(Invocation {
            node: &node,
            path: &nested_path,
            component: 4,
        });

        assert_eq!(root.depth(), 0);
        assert_eq!(nested.depth(), 2);
        assert_eq!(nested.component_chain(), vec![3, 4]);
        assert!(nested.contains_component(3));
        assert!(!child.contains_component(4));
        assert_eq!(child.boundary(), Some("0,2"));
        assert_eq!(nested.boundary(), Some("0,2"));

        let stored = Scope::root_of(9);
        assert!(stored.contains_component(9));
        assert_eq!(stored.component_chain(), vec![9]);
    }

    #[test]
    fn test_truthiness() {
        assert!(is_truthy(&json!(true)));
        assert!(!is_truthy(&json!("false")));
        assert!(!is_truthy(&json!(0)));
        assert!(is_truthy(&json!([1])));
        assert!(!is_truthy(&json!("")));
    }
}
