//! Document model: parse juriscontent HTML into an ordered block node sequence.
//!
//! The nested markup is flattened into a linear stream of block-level
//! [`Node`]s in document order. Nesting survives only through the node
//! kind (sub-headings are content, not structure), which is all the
//! segmenter needs.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::config::MAX_INPUT_SIZE;
use crate::error::{ExtractorError, Result};

/// Kind of a parsed block-level node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Top-level heading. The only section boundary.
    H1,
    /// Nested heading (levels 2 through 5). Content, not a boundary.
    SubHeading(u8),
    Paragraph,
    List,
    /// Any other block content: tables, quotes, stray text, unknown tags.
    OtherBlock,
}

/// A parsed block-level HTML element.
///
/// Position in the document is implicit in the sequence index.
/// Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub kind: NodeKind,
    /// Rendered inner text, whitespace-normalized.
    pub text: String,
}

impl Node {
    /// Create a new node.
    #[must_use]
    pub fn new(kind: NodeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Whether this node starts a new section.
    #[must_use]
    pub fn is_boundary(&self) -> bool {
        self.kind == NodeKind::H1
    }
}

#[allow(clippy::expect_used)] // Static selector that is guaranteed to be valid
static MAIN_CONTENT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("main#content").expect("valid selector"));

#[allow(clippy::expect_used)] // Static selector that is guaranteed to be valid
static BODY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("body").expect("valid selector"));

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Leading "§ 12" artifact left over from section-number markup.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static HEADING_SECTION_SYMBOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*§\s*\d+\s*").expect("valid regex"));

/// Leading "12 —" / "12 -" artifact left over from section-number markup.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static HEADING_NUMBER_DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\s*[-—–]\s*").expect("valid regex"));

/// Tags that are transparent containers: recurse into their children.
const CONTAINER_TAGS: &[&str] = &[
    "html", "body", "main", "article", "section", "div", "header", "footer", "aside", "form",
    "figure", "details",
];

/// Tags whose entire subtree is ignored.
const IGNORED_TAGS: &[&str] = &["head", "script", "style", "noscript", "template", "nav"];

/// Block-level tags that mark an unknown element as structural rather
/// than a text leaf.
const BLOCK_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "p", "ul", "ol", "dl", "table"];

/// Parse raw juriscontent HTML into an ordered sequence of block nodes.
///
/// Parsing is tolerant of malformed markup (html5ever recovery);
/// unrecognized tags are flattened into [`NodeKind::OtherBlock`] rather
/// than aborting. Fails only when the input is empty, oversized, or
/// yields no block content at all.
///
/// Content scoping follows the upstream artifact layout: prefer
/// `<main id="content">`, fall back to `<body>`, then the whole
/// document. Navigation chrome (`<nav>`, `id="navigator"`) is excluded.
pub fn parse(raw_html: &str) -> Result<Vec<Node>> {
    if raw_html.trim().is_empty() {
        return Err(ExtractorError::Parse("input is empty".to_string()));
    }

    let size = raw_html.len() as u64;
    if size > MAX_INPUT_SIZE {
        return Err(ExtractorError::InputTooLarge {
            size,
            max: MAX_INPUT_SIZE,
        });
    }

    let document = Html::parse_document(raw_html);
    let root = content_root(&document);

    let mut nodes = Vec::new();
    collect_blocks(root, &mut nodes);

    if nodes.is_empty() {
        return Err(ExtractorError::Parse(
            "no block content found in document".to_string(),
        ));
    }

    tracing::debug!(nodes = nodes.len(), "parsed document");
    Ok(nodes)
}

/// Find the element to extract content from.
fn content_root(document: &Html) -> ElementRef<'_> {
    document
        .select(&MAIN_CONTENT_SELECTOR)
        .next()
        .or_else(|| document.select(&BODY_SELECTOR).next())
        .unwrap_or_else(|| document.root_element())
}

/// Walk children in document order, emitting block nodes.
fn collect_blocks(el: ElementRef<'_>, nodes: &mut Vec<Node>) {
    for child in el.children() {
        if let Some(text) = child.value().as_text() {
            // Stray text directly inside a container still counts as content.
            let normalized = normalize_text(&text.text);
            if !normalized.is_empty() {
                nodes.push(Node::new(NodeKind::OtherBlock, normalized));
            }
            continue;
        }

        let Some(child_el) = ElementRef::wrap(child) else {
            continue;
        };

        if is_ignored(child_el) {
            continue;
        }

        let tag = child_el.value().name();
        match tag {
            "h1" => {
                // Always emit: an H1 is a boundary even when its text is empty.
                nodes.push(Node::new(NodeKind::H1, heading_text(child_el)));
            }
            "h2" | "h3" | "h4" | "h5" => {
                let text = heading_text(child_el);
                if !text.is_empty() {
                    let level = match tag {
                        "h2" => 2,
                        "h3" => 3,
                        "h4" => 4,
                        _ => 5,
                    };
                    nodes.push(Node::new(NodeKind::SubHeading(level), text));
                }
            }
            "p" => {
                let text = normalize_text(&flatten_text(child_el));
                if !text.is_empty() {
                    nodes.push(Node::new(NodeKind::Paragraph, text));
                }
            }
            "ul" | "ol" | "dl" => {
                let text = list_text(child_el);
                if !text.is_empty() {
                    nodes.push(Node::new(NodeKind::List, text));
                }
            }
            _ if CONTAINER_TAGS.contains(&tag) => {
                collect_blocks(child_el, nodes);
            }
            _ => {
                // Unknown tag: recurse if it holds block structure,
                // otherwise flatten it into an other-block leaf.
                if has_block_descendant(child_el) {
                    collect_blocks(child_el, nodes);
                } else {
                    let text = normalize_text(&flatten_text(child_el));
                    if !text.is_empty() {
                        nodes.push(Node::new(NodeKind::OtherBlock, text));
                    }
                }
            }
        }
    }
}

/// Whether this element's subtree is excluded from content.
fn is_ignored(el: ElementRef<'_>) -> bool {
    let value = el.value();
    IGNORED_TAGS.contains(&value.name()) || value.attr("id") == Some("navigator")
}

fn has_class(el: ElementRef<'_>, class: &str) -> bool {
    el.value()
        .attr("class")
        .is_some_and(|attr| attr.split_whitespace().any(|c| c == class))
}

/// Whether any descendant element is a known block tag.
fn has_block_descendant(el: ElementRef<'_>) -> bool {
    el.descendants().any(|node| {
        ElementRef::wrap(node).is_some_and(|e| BLOCK_TAGS.contains(&e.value().name()))
    })
}

/// Flatten all descendant text into one string, skipping ignored subtrees.
fn flatten_text(el: ElementRef<'_>) -> String {
    let mut out = String::new();
    flatten_into(el, &mut out, false);
    out
}

fn flatten_into(el: ElementRef<'_>, out: &mut String, skip_section_numbers: bool) {
    for child in el.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(&text.text);
            continue;
        }
        let Some(child_el) = ElementRef::wrap(child) else {
            continue;
        };
        if is_ignored(child_el) {
            continue;
        }
        if skip_section_numbers
            && (has_class(child_el, "section-number") || has_class(child_el, "section-separator"))
        {
            continue;
        }
        flatten_into(child_el, out, skip_section_numbers);
        // Keep words from adjacent elements apart; collapsed later.
        out.push(' ');
    }
}

/// Extract clean heading text: drop section-number markup and leading
/// "§ N" / "N —" artifacts.
fn heading_text(el: ElementRef<'_>) -> String {
    let mut raw = String::new();
    flatten_into(el, &mut raw, true);
    let normalized = normalize_text(&raw);
    let stripped = HEADING_SECTION_SYMBOL.replace(&normalized, "");
    let stripped = HEADING_NUMBER_DASH.replace(&stripped, "");
    stripped.trim().to_string()
}

/// One line per list item, nested lists folded into their parent item.
fn list_text(el: ElementRef<'_>) -> String {
    let mut items = Vec::new();
    for child in el.children() {
        let Some(item) = ElementRef::wrap(child) else {
            continue;
        };
        if is_ignored(item) {
            continue;
        }
        match item.value().name() {
            "li" | "dt" | "dd" => {
                let text = normalize_text(&flatten_text(item));
                if !text.is_empty() {
                    items.push(text);
                }
            }
            // Tolerate lists nested directly under the list element.
            "ul" | "ol" | "dl" => {
                let nested = list_text(item);
                if !nested.is_empty() {
                    items.push(nested);
                }
            }
            _ => {}
        }
    }
    items.join("\n")
}

/// Normalize text: NFKC (maps NBSP to a plain space), collapse
/// whitespace runs, trim.
#[must_use]
pub fn normalize_text(raw: &str) -> String {
    let composed: String = raw.nfkc().collect();
    WHITESPACE_RUN.replace_all(&composed, " ").trim().to_string()
}
