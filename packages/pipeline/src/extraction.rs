//! The section-extract stage: load a document's juriscontent HTML,
//! split it into sections, persist one artifact per section, and record
//! the outcome.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use juriscontent_extractor::config::{section_filename, JURISCONTENT_FILENAME, SECTIONS_FOLDER};
use juriscontent_extractor::{extract_sections, render};

use crate::error::Result;
use crate::models::{Stage, StageStatus};
use crate::sections;
use crate::status;
use crate::store::BlobStore;

/// One section rendered to its artifact text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderedSection {
    pub section_id: i32,
    pub content: String,
}

/// Outcome of running the section-extract stage for one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionOutcome {
    pub source_id: String,
    pub section_count: usize,
    pub status: StageStatus,
}

/// Parse and segment a document, returning each section rendered to its
/// artifact text. Pure with respect to the database and store.
pub fn render_document(raw_html: &str) -> juriscontent_extractor::Result<Vec<RenderedSection>> {
    let sections = extract_sections(raw_html)?;
    Ok(sections
        .iter()
        .map(|section| RenderedSection {
            section_id: section.sequence_number as i32,
            content: render(section),
        })
        .collect())
}

/// Run the extraction work for one document: extract, then replace the
/// previous run's section artifacts and rows with the new ones.
///
/// Returns the number of sections written. Status bookkeeping is the
/// caller's concern.
async fn execute(
    pool: &PgPool,
    store: &dyn BlobStore,
    store_prefix: &str,
    source_id: &str,
) -> Result<usize> {
    let doc_prefix = format!("{store_prefix}/{source_id}");
    let sections_prefix = format!("{doc_prefix}/{SECTIONS_FOLDER}");

    let raw_html = store
        .get_text(&format!("{doc_prefix}/{JURISCONTENT_FILENAME}"))
        .await?;

    let rendered = tokio::task::spawn_blocking(move || render_document(&raw_html))
        .await?
        .map_err(crate::error::PipelineError::Extraction)?;

    // Full replacement: stale artifacts from a prior run must not
    // survive, and the old ones stay intact until extraction has
    // succeeded so the section rows never outlive their blobs.
    store.clear_prefix(&sections_prefix).await?;

    for section in &rendered {
        let key = format!(
            "{sections_prefix}/{}",
            section_filename(section.section_id as u32)
        );
        store.put_text(&key, &section.content).await?;
    }

    let section_ids: Vec<i32> = rendered.iter().map(|s| s.section_id).collect();
    sections::replace_sections(pool, source_id, &section_ids).await?;

    Ok(rendered.len())
}

/// Run the section-extract stage for one document with full status
/// bookkeeping. Failures are recorded, not propagated.
#[tracing::instrument(skip(pool, store, store_prefix))]
pub async fn extract_document(
    pool: &PgPool,
    store: &dyn BlobStore,
    store_prefix: &str,
    source_id: &str,
) -> ExtractionOutcome {
    let start_time = Utc::now();

    if let Err(e) = status::mark_started(pool, source_id, Stage::SectionExtract, start_time).await {
        tracing::warn!(source_id, error = %e, "failed to mark stage started");
    }

    let result = execute(pool, store, store_prefix, source_id).await;
    let end_time = Utc::now();

    let (section_count, outcome_status) = match result {
        Ok(count) => {
            tracing::info!(source_id, sections = count, "section extraction passed");
            (count, StageStatus::Pass)
        }
        Err(e) => {
            tracing::error!(source_id, error = %e, "section extraction failed");
            (0, StageStatus::Failed)
        }
    };

    if let Err(e) = status::mark_finished(
        pool,
        source_id,
        Stage::SectionExtract,
        outcome_status,
        start_time,
        end_time,
    )
    .await
    {
        tracing::warn!(source_id, error = %e, "failed to record stage outcome");
    }

    ExtractionOutcome {
        source_id: source_id.to_string(),
        section_count,
        status: outcome_status,
    }
}

/// Run the section-extract stage for every pending document. One
/// document failing never stops the rest.
#[tracing::instrument(skip(pool, store, store_prefix))]
pub async fn run_batch(
    pool: &PgPool,
    store: &dyn BlobStore,
    store_prefix: &str,
) -> Result<Vec<ExtractionOutcome>> {
    let pending = status::list_pending_extractions(pool).await?;
    tracing::info!(count = pending.len(), "documents pending section extraction");

    let mut outcomes = Vec::with_capacity(pending.len());
    for source_id in &pending {
        outcomes.push(extract_document(pool, store, store_prefix, source_id).await);
    }

    Ok(outcomes)
}
