//! Design-time list materialization: template clones with `item.` paths
//! substituted from sample data.

use atelier_model::value::{quote, ITEM_ACCESSOR};
use atelier_model::{split_declaration, PropertyValue, VisualElementModel};
use serde_json::Value;
use std::sync::Arc;

/// Deep copy of `template` with every `item`/`item.a.b` property value
/// replaced by the matching field of `item`. Paths missing from `item` are
/// left as written.
pub fn substitute_item(template: &VisualElementModel, item: &Value) -> VisualElementModel {
    let mut clone = template.clone();
    clone.properties = template
        .properties
        .iter()
        .map(|entry| substitute_entry(entry, item))
        .collect();
    clone.children = template
        .children
        .iter()
        .map(|child| Arc::new(substitute_item(child, item)))
        .collect();
    clone
}

fn substitute_entry(entry: &str, item: &Value) -> String {
    let (name, raw) = split_declaration(entry);
    let value = PropertyValue::parse(raw);
    if matches!(value, PropertyValue::Quoted(_)) {
        return entry.to_string();
    }

    let Some(path) = item_path(value.text()) else {
        return entry.to_string();
    };
    match lookup(item, path) {
        Some(found) => format!("{}: {}", name, literal(found)),
        None => entry.to_string(),
    }
}

/// `a.b` for `item.a.b`, empty for `item` itself
fn item_path(text: &str) -> Option<&str> {
    let rest = text.strip_prefix(ITEM_ACCESSOR)?;
    if rest.is_empty() {
        return Some("");
    }
    rest.strip_prefix('.')
}

/// Dotted lookup; numeric segments index arrays
pub fn lookup<'v>(value: &'v Value, path: &str) -> Option<&'v Value> {
    if path.is_empty() {
        return Some(value);
    }
    path.split('.').try_fold(value, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Property-value spelling of a JSON value
fn literal(value: &Value) -> String {
    match value {
        Value::String(s) => quote(s),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_paths() {
        let data = json!({ "user": { "name": "Ana", "tags": ["a", "b"] } });
        assert_eq!(lookup(&data, "user.name"), Some(&json!("Ana")));
        assert_eq!(lookup(&data, "user.tags.1"), Some(&json!("b")));
        assert_eq!(lookup(&data, "user.age"), None);
        assert_eq!(lookup(&data, ""), Some(&data));
    }

    #[test]
    fn test_substitution_reaches_descendants() {
        let template = VisualElementModel::new("li")
            .with_property("title: item.title")
            .with_property("data: item.missing")
            .with_property("label: 'item.title'")
            .with_property("items: itemCount")
            .with_child(VisualElementModel::new("span").with_property("text: {item.price}"));
        let clone = substitute_item(&template, &json!({ "title": "Tea", "price": 4 }));

        assert_eq!(
            clone.properties,
            vec![
                "title: 'Tea'",
                "data: item.missing",
                "label: 'item.title'",
                "items: itemCount"
            ]
        );
        assert_eq!(clone.children[0].properties, vec!["text: 4"]);
    }

    #[test]
    fn test_whole_item_substitution() {
        let template = VisualElementModel::new("li").with_property("text: item");
        let clone = substitute_item(&template, &json!("Milk"));
        assert_eq!(clone.properties, vec!["text: 'Milk'"]);
    }
}
