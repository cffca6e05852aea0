//! Line layout for rendered analyses
//!
//! Turns a [`RenderNode`] tree into terminal lines made of styled
//! segments. Both the console formatter and the TUI results pane draw
//! from this, each mapping [`SegmentStyle`] onto its own styling.
//!
//! ```text
//! RenderNode tree ──layout()──▶ Vec<LayoutLine> ──▶ colored (console)
//!                                               └─▶ ratatui Line (TUI)
//! ```

use brandcheck_domain::RenderNode;

const BULLET: &str = "• ";
const RULE_WIDTH: usize = 24;
const COLUMN_SEPARATOR: &str = " │ ";

/// Inline styling flags; nested runs combine them
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SegmentStyle {
    pub strong: bool,
    pub emphasis: bool,
    pub strikethrough: bool,
    pub code: bool,
    pub heading: bool,
    /// List markers, rules and table borders
    pub muted: bool,
}

impl SegmentStyle {
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }
}

/// A run of text with one style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub style: SegmentStyle,
}

/// One output line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutLine {
    pub segments: Vec<Segment>,
}

impl LayoutLine {
    /// Line text without styling
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn is_blank(&self) -> bool {
        self.segments.iter().all(|s| s.text.trim().is_empty())
    }

    fn push(&mut self, text: &str, style: SegmentStyle) {
        if text.is_empty() {
            return;
        }
        match self.segments.last_mut() {
            Some(last) if last.style == style => last.text.push_str(text),
            _ => self.segments.push(Segment {
                text: text.to_string(),
                style,
            }),
        }
    }
}

/// Left margin for the lines of one block. A pending marker is printed
/// on the first line only; continuation lines are padded to match.
#[derive(Debug, Clone)]
struct Gutter {
    indent: usize,
    marker: Option<String>,
}

impl Gutter {
    fn root() -> Self {
        Self {
            indent: 0,
            marker: None,
        }
    }

    fn item(&self, marker: String) -> Self {
        Self {
            indent: self.indent + marker.chars().count(),
            marker: Some(marker),
        }
    }

    fn open_line(&mut self) -> LayoutLine {
        let mut line = LayoutLine::default();
        match self.marker.take() {
            Some(marker) => {
                let pad = self.indent.saturating_sub(marker.chars().count());
                line.push(&" ".repeat(pad), SegmentStyle::default());
                line.push(
                    &marker,
                    SegmentStyle {
                        muted: true,
                        ..SegmentStyle::default()
                    },
                );
            }
            None => line.push(&" ".repeat(self.indent), SegmentStyle::default()),
        }
        line
    }
}

struct Writer {
    lines: Vec<LayoutLine>,
}

impl Writer {
    fn block(&mut self, node: &RenderNode, gutter: &mut Gutter) {
        match node {
            RenderNode::Paragraph(children) => {
                self.inline_run(children, SegmentStyle::default(), gutter)
            }
            RenderNode::Heading { children, .. } => self.inline_run(
                children,
                SegmentStyle {
                    heading: true,
                    strong: true,
                    ..SegmentStyle::default()
                },
                gutter,
            ),
            RenderNode::List { start, items } => {
                for (index, item) in items.iter().enumerate() {
                    let marker = match start {
                        Some(first) => format!("{}. ", first + index as u64),
                        None => BULLET.to_string(),
                    };
                    // A list opened on a marker line (e.g. "- - x") keeps that marker
                    let mut item_gutter = match gutter.marker.take() {
                        Some(outer) => Gutter {
                            indent: gutter.indent + marker.chars().count(),
                            marker: Some(format!("{}{}", outer, marker)),
                        },
                        None => gutter.item(marker),
                    };
                    self.block(item, &mut item_gutter);
                }
            }
            RenderNode::ListItem(children) => self.item_children(children, gutter),
            RenderNode::CodeBlock(code) => {
                let style = SegmentStyle {
                    code: true,
                    ..SegmentStyle::default()
                };
                for text in code.trim_end_matches('\n').split('\n') {
                    let mut line = gutter.open_line();
                    line.push(text, style);
                    self.lines.push(line);
                }
            }
            RenderNode::Rule => {
                let mut line = gutter.open_line();
                line.push(
                    &"─".repeat(RULE_WIDTH),
                    SegmentStyle {
                        muted: true,
                        ..SegmentStyle::default()
                    },
                );
                self.lines.push(line);
            }
            RenderNode::Table(rows) => self.table(rows, gutter),
            RenderNode::TableRow { .. } => self.table(std::slice::from_ref(node), gutter),
            inline => self.inline_run(std::slice::from_ref(inline), SegmentStyle::default(), gutter),
        }
    }

    /// Cells padded to a common column width, with a rule under the header
    fn table(&mut self, rows: &[RenderNode], gutter: &mut Gutter) {
        let rows: Vec<(bool, Vec<LayoutLine>)> = rows
            .iter()
            .map(|row| match row {
                RenderNode::TableRow { header, cells } => (
                    *header,
                    cells.iter().map(|cell| cell_line(cell, *header)).collect(),
                ),
                other => (false, vec![cell_line(other, false)]),
            })
            .collect();

        let columns = rows.iter().map(|(_, cells)| cells.len()).max().unwrap_or(0);
        let widths: Vec<usize> = (0..columns)
            .map(|col| {
                rows.iter()
                    .filter_map(|(_, cells)| cells.get(col))
                    .map(|cell| cell.text().chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let muted = SegmentStyle {
            muted: true,
            ..SegmentStyle::default()
        };
        for (header, cells) in &rows {
            let mut line = gutter.open_line();
            for (col, width) in widths.iter().enumerate() {
                if col > 0 {
                    line.push(COLUMN_SEPARATOR, muted);
                }
                let used = match cells.get(col) {
                    Some(cell) => {
                        for segment in &cell.segments {
                            line.push(&segment.text, segment.style);
                        }
                        cell.text().chars().count()
                    }
                    None => 0,
                };
                // No trailing padding after the last column
                if col + 1 < widths.len() {
                    line.push(&" ".repeat(width.saturating_sub(used)), SegmentStyle::default());
                }
            }
            self.lines.push(line);

            if *header {
                let mut rule = gutter.open_line();
                let parts: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
                rule.push(&parts.join("─┼─"), muted);
                self.lines.push(rule);
            }
        }
    }

    /// Tight items hold inline nodes directly, loose ones hold paragraphs.
    /// Consecutive inline nodes are laid out as one run.
    fn item_children(&mut self, children: &[RenderNode], gutter: &mut Gutter) {
        if children.is_empty() {
            let line = gutter.open_line();
            self.lines.push(line);
            return;
        }

        let mut run_start = 0;
        for (index, child) in children.iter().enumerate() {
            if child.is_block() {
                if run_start < index {
                    self.inline_run(&children[run_start..index], SegmentStyle::default(), gutter);
                }
                self.block(child, gutter);
                run_start = index + 1;
            }
        }
        if run_start < children.len() {
            self.inline_run(&children[run_start..], SegmentStyle::default(), gutter);
        }
    }

    fn inline_run(&mut self, nodes: &[RenderNode], style: SegmentStyle, gutter: &mut Gutter) {
        let mut line = gutter.open_line();
        self.inline(nodes, style, gutter, &mut line);
        self.lines.push(line);
    }

    fn inline(
        &mut self,
        nodes: &[RenderNode],
        style: SegmentStyle,
        gutter: &mut Gutter,
        line: &mut LayoutLine,
    ) {
        for node in nodes {
            match node {
                RenderNode::Text(text) => line.push(text, style),
                RenderNode::Code(code) => line.push(
                    code,
                    SegmentStyle {
                        code: true,
                        ..style
                    },
                ),
                RenderNode::Strong(children) => self.inline(
                    children,
                    SegmentStyle {
                        strong: true,
                        ..style
                    },
                    gutter,
                    line,
                ),
                RenderNode::Emphasis(children) => self.inline(
                    children,
                    SegmentStyle {
                        emphasis: true,
                        ..style
                    },
                    gutter,
                    line,
                ),
                RenderNode::Strikethrough(children) => self.inline(
                    children,
                    SegmentStyle {
                        strikethrough: true,
                        ..style
                    },
                    gutter,
                    line,
                ),
                RenderNode::TableCell(children) => self.inline(children, style, gutter, line),
                RenderNode::LineBreak => {
                    let finished = std::mem::replace(line, gutter.open_line());
                    self.lines.push(finished);
                }
                block => {
                    // Blocks never nest inside inline runs from the renderer,
                    // but lay them out on their own lines if they do.
                    let finished = std::mem::take(line);
                    self.lines.push(finished);
                    self.block(block, gutter);
                    *line = gutter.open_line();
                }
            }
        }
    }
}

/// One table cell on a single line; header cells are bold
fn cell_line(cell: &RenderNode, header: bool) -> LayoutLine {
    let style = SegmentStyle {
        strong: header,
        ..SegmentStyle::default()
    };
    let mut writer = Writer { lines: Vec::new() };
    let mut line = LayoutLine::default();
    writer.inline(cell.children(), style, &mut Gutter::root(), &mut line);

    // Breaks inside a cell fold back into spaces
    let mut joined = LayoutLine::default();
    for part in writer.lines.iter().chain(std::iter::once(&line)) {
        if !joined.segments.is_empty() {
            joined.push(" ", SegmentStyle::default());
        }
        for segment in &part.segments {
            joined.push(&segment.text, segment.style);
        }
    }
    joined
}

/// Lay out top-level blocks, separated by one blank line
pub fn layout(nodes: &[RenderNode]) -> Vec<LayoutLine> {
    let mut writer = Writer { lines: Vec::new() };
    for (index, node) in nodes.iter().enumerate() {
        if index > 0 {
            writer.lines.push(LayoutLine::default());
        }
        writer.block(node, &mut Gutter::root());
    }
    writer.lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandcheck_domain::render;

    fn texts(markdown: &str) -> Vec<String> {
        layout(&render(markdown)).iter().map(LayoutLine::text).collect()
    }

    #[test]
    fn test_strong_segment() {
        let lines = layout(&render("**Nike** means victory."));
        assert_eq!(lines.len(), 1);
        let segments = &lines[0].segments;
        assert_eq!(segments[0].text, "Nike");
        assert!(segments[0].style.strong);
        assert_eq!(segments[1].text, " means victory.");
        assert!(segments[1].style.is_plain());
    }

    #[test]
    fn test_nested_inline_styles_combine() {
        let lines = layout(&render("***both***"));
        let style = lines[0].segments[0].style;
        assert!(style.strong && style.emphasis);
    }

    #[test]
    fn test_paragraphs_separated_by_blank_line() {
        assert_eq!(texts("one\n\ntwo"), vec!["one", "", "two"]);
    }

    #[test]
    fn test_line_break_starts_new_line() {
        assert_eq!(texts("one\ntwo"), vec!["one", "two"]);
    }

    #[test]
    fn test_bullets_and_nesting() {
        assert_eq!(
            texts("- outer\n  - inner\n- second"),
            vec!["• outer", "  • inner", "• second"]
        );
    }

    #[test]
    fn test_numbered_list_keeps_start() {
        assert_eq!(texts("3. three\n4. four"), vec!["3. three", "4. four"]);
    }

    #[test]
    fn test_item_continuation_is_indented() {
        assert_eq!(
            texts("1. first line\n   second line"),
            vec!["1. first line", "   second line"]
        );
    }

    #[test]
    fn test_marker_is_muted() {
        let lines = layout(&render("- item"));
        assert_eq!(lines[0].segments[0].text, "• ");
        assert!(lines[0].segments[0].style.muted);
    }

    #[test]
    fn test_heading_style() {
        let lines = layout(&render("## Meaning"));
        assert_eq!(lines[0].text(), "Meaning");
        assert!(lines[0].segments[0].style.heading);
    }

    #[test]
    fn test_code_block_lines() {
        let lines = layout(&render("```\na\nb\n```"));
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text(), "a");
        assert!(lines[1].segments[0].style.code);
    }

    #[test]
    fn test_empty_input() {
        assert!(layout(&[]).is_empty());
    }

    #[test]
    fn test_strikethrough_style() {
        let lines = layout(&render("was ~~Nikey~~"));
        assert_eq!(lines[0].text(), "was Nikey");
        assert_eq!(lines[0].segments[1].text, "Nikey");
        assert!(lines[0].segments[1].style.strikethrough);
    }

    #[test]
    fn test_table_columns_are_aligned() {
        assert_eq!(
            texts("| Market | Meaning |\n|---|---|\n| UK | victory, speed |"),
            vec![
                "Market │ Meaning",
                "───────┼───────────────",
                "UK     │ victory, speed",
            ]
        );
    }

    #[test]
    fn test_table_header_is_bold_and_border_muted() {
        let lines = layout(&render("| A | B |\n|---|---|\n| 1 | 2 |"));
        assert_eq!(lines[0].segments[0].text, "A");
        assert!(lines[0].segments[0].style.strong);
        assert!(lines[0].segments[1].style.muted);
        assert!(lines[1].segments[0].style.muted);
        assert!(!lines[2].segments[0].style.strong);
    }

    #[test]
    fn test_table_short_row_is_padded() {
        assert_eq!(
            texts("| a | b |\n|---|---|\n| only |"),
            vec!["a    │ b", "─────┼──", "only │ "]
        );
    }

    #[test]
    fn test_literal_words_survive() {
        let joined = texts("# Title\n\n**Bold** and *it*\n\n1. one\n   - two").join("\n");
        for word in ["Title", "Bold", "and", "it", "one", "two"] {
            assert!(joined.contains(word), "missing {:?} in {:?}", word, joined);
        }
    }
}
