/// Round-trip tests for the tree format
use crate::*;

fn card() -> VisualElementModel {
    VisualElementModel::new("div")
        .with_property("-name: 'Card'")
        .with_property("onClick: {props.onOpen}")
        .with_style("hover:color: primary")
        .with_style("flex-col")
        .with_style("padding: 8 16")
        .with_child(VisualElementModel::text("Title \"quoted\" and 'single'"))
        .with_child(
            VisualElementModel::new("17")
                .with_property("title: 'Nested'")
                .with_child(VisualElementModel::new("span").hidden()),
        )
        .with_child(
            VisualElementModel::new("ul")
                .with_property("-items-source: [{\"name\": \"a\"}, {\"name\": \"b\"}]")
                .with_child(VisualElementModel::new("li").with_property("text: item.name")),
        )
}

#[test]
fn test_round_trip_preserves_order_and_nesting() {
    let tree = card();
    let text = serialize(&tree);
    let back = parse(&text).unwrap();
    assert_eq!(back, tree);
}

#[test]
fn test_round_trip_keeps_duplicate_properties() {
    let tree = VisualElementModel::new("a")
        .with_property("href: '/one'")
        .with_property("href: '/two'");
    assert_eq!(parse(&serialize(&tree)).unwrap(), tree);
}

#[test]
fn test_output_shape() {
    let tree = VisualElementModel::new("div")
        .with_style("padding: 8")
        .with_child(VisualElementModel::new("span").hidden());

    assert_eq!(
        serialize(&tree),
        "<div>\n  style \"padding: 8\"\n  <span>\n    hidden\n"
    );
}

#[test]
fn test_entries_with_newlines_survive() {
    let tree = VisualElementModel::new("p").with_property("text: 'line one\nline two'");
    assert_eq!(parse(&serialize(&tree)).unwrap(), tree);
}

#[test]
fn test_parse_rejects_two_roots() {
    let source = "<div>\n<span>\n";
    assert!(matches!(parse(source), Err(ModelError::Syntax { line: 2, .. })));
}

#[test]
fn test_parse_rejects_skipped_depth() {
    let source = "<div>\n    <span>\n";
    assert!(matches!(parse(source), Err(ModelError::Syntax { line: 2, .. })));
}

#[test]
fn test_parse_rejects_unknown_record() {
    let source = "<div>\n  colour \"red\"\n";
    assert!(parse(source).is_err());
}

#[test]
fn test_parse_empty_document() {
    assert!(parse("\n\n").is_err());
}

#[test]
fn test_records_after_children_attach_to_parent() {
    let source = "<div>\n  <span>\n  prop \"id: 'x'\"\n";
    let tree = parse(source).unwrap();
    assert_eq!(tree.properties, vec!["id: 'x'".to_string()]);
    assert_eq!(tree.children.len(), 1);
}
