//! Section rendering: serialize a section to its text artifact form.

use crate::segment::Section;

/// Separator between rendered nodes.
pub const PARAGRAPH_BREAK: &str = "\n\n";

/// Render a section to text: heading first (when present), then body
/// node texts in segmented order, joined by a paragraph break.
///
/// Pure and deterministic: the same section always yields byte-identical
/// output. Nodes with empty text contribute nothing.
#[must_use]
pub fn render(section: &Section) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(section.node_count());

    if let Some(title) = section.title() {
        if !title.is_empty() {
            parts.push(title);
        }
    }
    for node in &section.body {
        if !node.text.is_empty() {
            parts.push(&node.text);
        }
    }

    parts.join(PARAGRAPH_BREAK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Node, NodeKind};
    use crate::segment::segment;
    use pretty_assertions::assert_eq;

    fn h1(text: &str) -> Node {
        Node::new(NodeKind::H1, text)
    }

    fn para(text: &str) -> Node {
        Node::new(NodeKind::Paragraph, text)
    }

    #[test]
    fn test_render_heading_and_body() {
        let sections = segment(&[h1("Part 1"), para("First."), para("Second.")]);
        assert_eq!(render(&sections[0]), "Part 1\n\nFirst.\n\nSecond.");
    }

    #[test]
    fn test_render_headingless_section() {
        let sections = segment(&[para("intro one"), para("intro two")]);
        assert_eq!(render(&sections[0]), "intro one\n\nintro two");
    }

    #[test]
    fn test_render_heading_only_section() {
        let sections = segment(&[h1("Bare heading"), h1("Next")]);
        assert_eq!(render(&sections[0]), "Bare heading");
    }

    #[test]
    fn test_render_skips_empty_node_text() {
        let sections = segment(&[h1(""), para("body")]);
        assert_eq!(render(&sections[0]), "body");
    }

    #[test]
    fn test_render_is_deterministic() {
        let sections = segment(&[h1("A"), para("x"), Node::new(NodeKind::List, "a\nb")]);
        let first = render(&sections[0]);
        let second = render(&sections[0]);
        assert_eq!(first, second);
        assert_eq!(first, "A\n\nx\n\na\nb");
    }
}
