use crate::error::{ModelError, ModelResult};
use crate::node::{Tag, VisualElementModel};
use std::sync::Arc;

const INDENT_WIDTH: usize = 2;

/// Parse a tree written by [`crate::Serializer`]
pub fn parse(source: &str) -> ModelResult<VisualElementModel> {
    Parser::new(source).parse()
}

pub struct Parser<'a> {
    source: &'a str,
    /// Open nodes with their depth, innermost last
    stack: Vec<(usize, VisualElementModel)>,
    root: Option<VisualElementModel>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            stack: Vec::new(),
            root: None,
        }
    }

    pub fn parse(mut self) -> ModelResult<VisualElementModel> {
        let source = self.source;
        for (i, raw_line) in source.lines().enumerate() {
            let line_no = i + 1;
            let content = raw_line.trim_end();
            if content.trim().is_empty() {
                continue;
            }

            let indent = content.len() - content.trim_start_matches(' ').len();
            if indent % INDENT_WIDTH != 0 {
                return Err(ModelError::syntax(
                    line_no,
                    format!("indentation must be a multiple of {}", INDENT_WIDTH),
                ));
            }
            let depth = indent / INDENT_WIDTH;
            let content = content.trim_start();

            if let Some(tag) = content.strip_prefix('<').and_then(|s| s.strip_suffix('>')) {
                self.open_node(line_no, depth, tag)?;
            } else {
                self.add_record(line_no, depth, content)?;
            }
        }

        self.close_until(0);
        self.root
            .ok_or_else(|| ModelError::syntax(1, "document contains no node"))
    }

    fn open_node(&mut self, line: usize, depth: usize, tag: &str) -> ModelResult<()> {
        self.close_until(depth);

        if depth == 0 {
            if self.root.is_some() {
                return Err(ModelError::syntax(line, "a tree has exactly one root node"));
            }
        } else {
            match self.stack.last() {
                Some((parent_depth, _)) if *parent_depth + 1 == depth => {}
                _ => {
                    return Err(ModelError::syntax(
                        line,
                        "node is indented deeper than its parent allows",
                    ))
                }
            }
        }

        self.stack.push((depth, VisualElementModel::new(Tag::parse(tag))));
        Ok(())
    }

    fn add_record(&mut self, line: usize, depth: usize, content: &str) -> ModelResult<()> {
        if depth == 0 {
            return Err(ModelError::syntax(line, "record outside of a node"));
        }
        self.close_until(depth);

        let node = match self.stack.last_mut() {
            Some((node_depth, node)) if *node_depth + 1 == depth => node,
            _ => return Err(ModelError::syntax(line, "record does not belong to a node")),
        };

        let (keyword, rest) = match content.split_once(' ') {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (content, ""),
        };

        match keyword {
            "hidden" if rest.is_empty() => node.hide_in_designer = true,
            "prop" => node.properties.push(unquote_entry(line, rest)?),
            "style" => node.styles.push(unquote_entry(line, rest)?),
            other => {
                return Err(ModelError::syntax(
                    line,
                    format!("unknown record '{}'", other),
                ))
            }
        }

        Ok(())
    }

    /// Close every open node at `depth` or deeper, attaching it to its parent
    fn close_until(&mut self, depth: usize) {
        while matches!(self.stack.last(), Some((d, _)) if *d >= depth) {
            if let Some((_, node)) = self.stack.pop() {
                match self.stack.last_mut() {
                    Some((_, parent)) => parent.children.push(Arc::new(node)),
                    None => self.root = Some(node),
                }
            }
        }
    }
}

fn unquote_entry(line: usize, raw: &str) -> ModelResult<String> {
    serde_json::from_str::<String>(raw)
        .map_err(|e| ModelError::syntax(line, format!("invalid quoted entry: {}", e)))
}
