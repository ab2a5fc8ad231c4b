//! Section segmentation: partition a node sequence at H1 boundaries.
//!
//! A single left-to-right pass over the flattened node stream with an
//! explicit accumulator. Two laws hold for every input:
//!
//! - Content preservation: the concatenation of heading + body over all
//!   emitted sections equals the input node sequence exactly.
//! - Numbering: sequence numbers form the contiguous range `1..=k`.
//!
//! [`verify`] re-checks both after the fact; a violation is a defect in
//! this module, never a property of the input.

use serde::{Deserialize, Serialize};

use crate::document::{Node, NodeKind};
use crate::error::{ExtractorError, Result};

/// A contiguous run of nodes attributed to one logical unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// 1-based, gap-free ordinal in final output order.
    pub sequence_number: u32,

    /// The H1 that opened this section. Absent only for a leading
    /// section with no preceding H1.
    pub heading: Option<Node>,

    /// Content nodes belonging to this section, in document order.
    pub body: Vec<Node>,
}

impl Section {
    /// A section is empty only when it has no heading AND no body.
    /// A heading-only section is not empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heading.is_none() && self.body.is_empty()
    }

    /// Heading text, if a heading is present.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.heading.as_ref().map(|h| h.text.as_str())
    }

    /// Total number of nodes (heading + body) in this section.
    #[must_use]
    pub fn node_count(&self) -> usize {
        usize::from(self.heading.is_some()) + self.body.len()
    }
}

/// Accumulator for the section currently being built.
#[derive(Default)]
struct Accumulator {
    heading: Option<Node>,
    body: Vec<Node>,
}

impl Accumulator {
    fn is_empty(&self) -> bool {
        self.heading.is_none() && self.body.is_empty()
    }

    fn into_section(self) -> Section {
        Section {
            sequence_number: 0, // assigned in the renumber pass
            heading: self.heading,
            body: self.body,
        }
    }
}

/// Partition a node sequence into sections delimited by H1 headings.
///
/// Single O(n) pass. An H1 closes the current accumulator (discarded
/// only when it has neither heading nor body, the no-leading-content
/// case) and opens a new one with itself as heading; every other node
/// appends to the current body. The final accumulator is emitted if
/// non-empty, then all sections are renumbered sequentially from 1.
///
/// This operation never fails: a document with no H1 at all yields one
/// heading-less section holding the entire node sequence.
#[must_use]
pub fn segment(nodes: &[Node]) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    let mut current = Accumulator::default();

    for node in nodes {
        if node.kind == NodeKind::H1 {
            if !current.is_empty() {
                sections.push(current.into_section());
            }
            current = Accumulator {
                heading: Some(node.clone()),
                body: Vec::new(),
            };
        } else {
            current.body.push(node.clone());
        }
    }

    if !current.is_empty() {
        sections.push(current.into_section());
    }

    for (index, section) in sections.iter_mut().enumerate() {
        section.sequence_number = index as u32 + 1;
    }

    tracing::debug!(
        nodes = nodes.len(),
        sections = sections.len(),
        "segmented node sequence"
    );
    sections
}

/// Verify the segmentation laws against the original node sequence.
///
/// Checks that sequence numbers are contiguous from 1 and that the
/// concatenation of heading + body over all sections reconstructs the
/// input with no omission, duplication, or reordering.
pub fn verify(nodes: &[Node], sections: &[Section]) -> Result<()> {
    for (index, section) in sections.iter().enumerate() {
        let expected = index as u32 + 1;
        if section.sequence_number != expected {
            return Err(ExtractorError::InvariantViolation(format!(
                "numbering gap: expected sequence number {expected}, found {}",
                section.sequence_number
            )));
        }
    }

    let mut reconstructed: Vec<&Node> = Vec::with_capacity(nodes.len());
    for section in sections {
        if let Some(heading) = &section.heading {
            reconstructed.push(heading);
        }
        reconstructed.extend(section.body.iter());
    }

    if reconstructed.len() != nodes.len() {
        return Err(ExtractorError::InvariantViolation(format!(
            "content loss: {} input nodes, {} reconstructed",
            nodes.len(),
            reconstructed.len()
        )));
    }

    for (position, (got, expected)) in reconstructed.iter().zip(nodes.iter()).enumerate() {
        if *got != expected {
            return Err(ExtractorError::InvariantViolation(format!(
                "content mismatch at node {position}"
            )));
        }
    }

    Ok(())
}
