use crate::node::VisualElementModel;

/// Serializer writes a tree in the line-oriented tree format
///
/// Drafts, history snapshots and rollbacks are stored in this form so that
/// diffs stay readable:
///
/// ```text
/// <div>
///   prop "-name: 'Card'"
///   style "padding: 8"
///   <#text>
///     prop "text: 'Title'"
/// ```
///
/// Each node opens with `<tag>`; its records and children are indented one
/// level deeper. Entry strings are JSON-quoted so any character survives.
pub struct Serializer {
    indent_string: String,
}

impl Serializer {
    pub fn new() -> Self {
        Self {
            indent_string: "  ".to_string(),
        }
    }

    pub fn serialize(&self, node: &VisualElementModel) -> String {
        let mut output = String::new();
        self.serialize_node(node, 0, &mut output);
        output
    }

    fn serialize_node(&self, node: &VisualElementModel, depth: usize, output: &mut String) {
        self.push_line(depth, &format!("<{}>", node.tag), output);

        if node.hide_in_designer {
            self.push_line(depth + 1, "hidden", output);
        }

        for property in &node.properties {
            self.push_line(depth + 1, &format!("prop {}", quote_entry(property)), output);
        }

        for style in &node.styles {
            self.push_line(depth + 1, &format!("style {}", quote_entry(style)), output);
        }

        for child in &node.children {
            self.serialize_node(child, depth + 1, output);
        }
    }

    fn push_line(&self, depth: usize, line: &str, output: &mut String) {
        for _ in 0..depth {
            output.push_str(&self.indent_string);
        }
        output.push_str(line);
        output.push('\n');
    }
}

impl Default for Serializer {
    fn default() -> Self {
        Self::new()
    }
}

fn quote_entry(entry: &str) -> String {
    // Serializing a str cannot fail
    serde_json::to_string(entry).unwrap_or_else(|_| format!("\"{}\"", entry))
}

/// Serialize a tree to the tree format
pub fn serialize(node: &VisualElementModel) -> String {
    Serializer::new().serialize(node)
}
