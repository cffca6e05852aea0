//! RenderNode tree

use serde::Serialize;

/// A structural unit of formatted output.
///
/// Text-bearing variants hold plain strings only; nothing in the tree is
/// interpreted as markup by a consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum RenderNode {
    /// Block of inline content
    Paragraph(Vec<RenderNode>),
    /// Section heading, `level` in 1..=6
    Heading { level: u8, children: Vec<RenderNode> },
    /// Bulleted (`start == None`) or numbered list of [`RenderNode::ListItem`]s
    List {
        start: Option<u64>,
        items: Vec<RenderNode>,
    },
    ListItem(Vec<RenderNode>),
    /// Fenced or indented code, verbatim
    CodeBlock(String),
    /// Thematic break
    Rule,
    /// Table; rows are [`RenderNode::TableRow`]s, header row first
    Table(Vec<RenderNode>),
    TableRow {
        header: bool,
        cells: Vec<RenderNode>,
    },
    TableCell(Vec<RenderNode>),
    Strong(Vec<RenderNode>),
    Emphasis(Vec<RenderNode>),
    Strikethrough(Vec<RenderNode>),
    /// Inline code, verbatim
    Code(String),
    Text(String),
    LineBreak,
}

impl RenderNode {
    /// Whether this node starts a new block when laid out
    pub fn is_block(&self) -> bool {
        matches!(
            self,
            RenderNode::Paragraph(_)
                | RenderNode::Heading { .. }
                | RenderNode::List { .. }
                | RenderNode::ListItem(_)
                | RenderNode::CodeBlock(_)
                | RenderNode::Rule
                | RenderNode::Table(_)
                | RenderNode::TableRow { .. }
        )
    }

    /// Child nodes, empty for leaves
    pub fn children(&self) -> &[RenderNode] {
        match self {
            RenderNode::Paragraph(children)
            | RenderNode::Heading { children, .. }
            | RenderNode::ListItem(children)
            | RenderNode::Table(children)
            | RenderNode::TableCell(children)
            | RenderNode::Strong(children)
            | RenderNode::Emphasis(children)
            | RenderNode::Strikethrough(children) => children,
            RenderNode::List { items, .. } => items,
            RenderNode::TableRow { cells, .. } => cells,
            RenderNode::CodeBlock(_)
            | RenderNode::Rule
            | RenderNode::Code(_)
            | RenderNode::Text(_)
            | RenderNode::LineBreak => &[],
        }
    }
}

/// Concatenate the literal text of `nodes`.
///
/// Blocks are separated by newlines and line breaks become `\n`;
/// formatting is dropped.
pub fn flatten(nodes: &[RenderNode]) -> String {
    let mut out = String::new();
    flatten_into(nodes, &mut out);
    out.trim_end_matches('\n').to_string()
}

fn flatten_into(nodes: &[RenderNode], out: &mut String) {
    for node in nodes {
        if node.is_block() && !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        match node {
            RenderNode::Text(text) | RenderNode::Code(text) => out.push_str(text),
            RenderNode::CodeBlock(code) => {
                out.push_str(code);
                if !out.ends_with('\n') {
                    out.push('\n');
                }
            }
            RenderNode::LineBreak => out.push('\n'),
            RenderNode::Rule => out.push('\n'),
            RenderNode::TableRow { cells, .. } => {
                for (index, cell) in cells.iter().enumerate() {
                    if index > 0 {
                        out.push_str(" | ");
                    }
                    flatten_into(cell.children(), out);
                }
                out.push('\n');
            }
            other => {
                flatten_into(other.children(), out);
                if other.is_block() && !out.ends_with('\n') {
                    out.push('\n');
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> RenderNode {
        RenderNode::Text(s.to_string())
    }

    #[test]
    fn test_flatten_inline_runs() {
        let nodes = vec![RenderNode::Paragraph(vec![
            RenderNode::Strong(vec![text("Nike")]),
            text(" means victory."),
        ])];
        assert_eq!(flatten(&nodes), "Nike means victory.");
    }

    #[test]
    fn test_flatten_separates_blocks() {
        let nodes = vec![
            RenderNode::Paragraph(vec![text("one"), RenderNode::LineBreak, text("two")]),
            RenderNode::List {
                start: None,
                items: vec![
                    RenderNode::ListItem(vec![text("a")]),
                    RenderNode::ListItem(vec![text("b")]),
                ],
            },
        ];
        assert_eq!(flatten(&nodes), "one\ntwo\na\nb");
    }

    #[test]
    fn test_flatten_table_rows() {
        let row = |header, cells: &[&str]| RenderNode::TableRow {
            header,
            cells: cells
                .iter()
                .map(|c| RenderNode::TableCell(vec![text(c)]))
                .collect(),
        };
        let nodes = vec![RenderNode::Table(vec![
            row(true, &["Market", "Meaning"]),
            row(false, &["Greece", "victory"]),
        ])];
        assert_eq!(flatten(&nodes), "Market | Meaning\nGreece | victory");
    }

    #[test]
    fn test_flatten_empty() {
        assert_eq!(flatten(&[]), "");
    }

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_value(RenderNode::Code("x".into())).unwrap();
        assert_eq!(json["type"], "code");
        assert_eq!(json["content"], "x");
    }
}
