//! Markdown → RenderNode conversion
//!
//! Follows the service's flavour of markdown: GitHub-style tables,
//! strikethrough and task lists, and a single newline inside a paragraph
//! is a visible line break, not a space. Raw HTML is shown as the text it
//! is. Links keep their text and lose their target.

use super::node::RenderNode;
use pulldown_cmark::{Event, Options, Parser, Tag};

/// Container being built while walking the event stream
#[derive(Debug)]
enum Frame {
    Paragraph,
    Heading(u8),
    List(Option<u64>),
    Item,
    Strong,
    Emphasis,
    Strikethrough,
    Table,
    TableHead,
    TableRow,
    TableCell,
    CodeBlock,
    /// Tags without a node of their own; children are spliced into the parent
    Transparent,
}

struct TreeBuilder {
    stack: Vec<(Frame, Vec<RenderNode>)>,
    root: Vec<RenderNode>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            stack: Vec::new(),
            root: Vec::new(),
        }
    }

    fn current(&mut self) -> &mut Vec<RenderNode> {
        match self.stack.last_mut() {
            Some((_, children)) => children,
            None => &mut self.root,
        }
    }

    fn open(&mut self, frame: Frame) {
        self.stack.push((frame, Vec::new()));
    }

    fn close(&mut self) {
        let Some((frame, children)) = self.stack.pop() else {
            return;
        };
        match frame {
            Frame::Paragraph => {
                let mut children = children;
                while matches!(children.last(), Some(RenderNode::LineBreak)) {
                    children.pop();
                }
                self.push(RenderNode::Paragraph(children));
            }
            Frame::Heading(level) => self.push(RenderNode::Heading { level, children }),
            Frame::List(start) => self.push(RenderNode::List {
                start,
                items: children,
            }),
            Frame::Item => self.push(RenderNode::ListItem(children)),
            Frame::Strong => self.push(RenderNode::Strong(children)),
            Frame::Emphasis => self.push(RenderNode::Emphasis(children)),
            Frame::Strikethrough => self.push(RenderNode::Strikethrough(children)),
            Frame::Table => self.push(RenderNode::Table(children)),
            Frame::TableHead => self.push(RenderNode::TableRow {
                header: true,
                cells: children,
            }),
            Frame::TableRow => self.push(RenderNode::TableRow {
                header: false,
                cells: children,
            }),
            Frame::TableCell => self.push(RenderNode::TableCell(children)),
            Frame::CodeBlock => {
                let code = children
                    .iter()
                    .map(|node| match node {
                        RenderNode::Text(text) => text.as_str(),
                        _ => "",
                    })
                    .collect::<String>();
                self.push(RenderNode::CodeBlock(code));
            }
            Frame::Transparent => {
                for child in children {
                    self.push(child);
                }
            }
        }
    }

    /// Append a node, merging adjacent text runs
    fn push(&mut self, node: RenderNode) {
        let target = self.current();
        if let RenderNode::Text(text) = &node
            && let Some(RenderNode::Text(last)) = target.last_mut()
        {
            last.push_str(text);
            return;
        }
        target.push(node);
    }

    fn push_text(&mut self, text: &str) {
        if !text.is_empty() {
            self.push(RenderNode::Text(text.to_string()));
        }
    }

    /// Literal text that may span lines (raw HTML)
    fn push_literal(&mut self, text: &str) {
        let mut lines = text.split('\n').peekable();
        while let Some(line) = lines.next() {
            self.push_text(line);
            if lines.peek().is_some() {
                self.push(RenderNode::LineBreak);
            }
        }
    }

    fn in_code_block(&self) -> bool {
        matches!(self.stack.last(), Some((Frame::CodeBlock, _)))
    }

    fn finish(mut self) -> Vec<RenderNode> {
        while !self.stack.is_empty() {
            self.close();
        }
        self.root
    }
}

fn frame_for(tag: &Tag<'_>) -> Frame {
    match tag {
        Tag::Paragraph | Tag::HtmlBlock => Frame::Paragraph,
        Tag::Heading { level, .. } => Frame::Heading(*level as u8),
        Tag::List(start) => Frame::List(*start),
        Tag::Item => Frame::Item,
        Tag::Strong => Frame::Strong,
        Tag::Emphasis => Frame::Emphasis,
        Tag::Strikethrough => Frame::Strikethrough,
        Tag::Table(_) => Frame::Table,
        // The header row has no TableRow of its own
        Tag::TableHead => Frame::TableHead,
        Tag::TableRow => Frame::TableRow,
        Tag::TableCell => Frame::TableCell,
        Tag::CodeBlock(_) => Frame::CodeBlock,
        _ => Frame::Transparent,
    }
}

/// Convert markdown text into render nodes.
///
/// Total over all inputs; the empty string yields an empty sequence.
pub fn render(text: &str) -> Vec<RenderNode> {
    let mut builder = TreeBuilder::new();
    // Footnotes, math and smart punctuation stay off; their markers are
    // kept as literal text.
    let options =
        Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS;
    let parser = Parser::new_ext(text, options);

    for event in parser {
        match event {
            Event::Start(tag) => builder.open(frame_for(&tag)),
            // Start/End pairs are balanced, so every End closes the innermost frame
            Event::End(_) => builder.close(),
            Event::Text(text) => {
                if builder.in_code_block() {
                    builder.push(RenderNode::Text(text.to_string()));
                } else {
                    builder.push_text(&text);
                }
            }
            Event::Code(code) => builder.push(RenderNode::Code(code.to_string())),
            Event::Html(html) | Event::InlineHtml(html) => builder.push_literal(&html),
            Event::SoftBreak | Event::HardBreak => builder.push(RenderNode::LineBreak),
            Event::Rule => builder.push(RenderNode::Rule),
            Event::TaskListMarker(done) => builder.push_text(if done { "[x] " } else { "[ ] " }),
            _ => {}
        }
    }

    builder.finish()
}
