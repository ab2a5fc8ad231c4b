//! High-level extraction entry point: parse, segment, verify.

use crate::document;
use crate::error::Result;
use crate::segment::{self, Section};

/// Extract the ordered section list from raw juriscontent HTML.
///
/// Runs the full pipeline: parse into block nodes, segment at H1
/// boundaries, then verify the content-preservation and numbering laws
/// before handing the sections to the caller.
pub fn extract_sections(raw_html: &str) -> Result<Vec<Section>> {
    let nodes = document::parse(raw_html)?;
    let sections = segment::segment(&nodes);
    segment::verify(&nodes, &sections)?;

    tracing::debug!(
        nodes = nodes.len(),
        sections = sections.len(),
        "extracted sections"
    );
    Ok(sections)
}
