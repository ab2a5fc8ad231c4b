//! Enrichment status rows: one per (source document, stage), updated in
//! place, never multiplied or deleted.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::error::{PipelineError, Result};
use crate::models::{EnrichmentStatus, Stage, StageStatus};

/// Ensure a status row exists for this document and stage.
///
/// Creates it with `not_started` if missing; an existing row is left
/// untouched.
#[tracing::instrument(skip(pool))]
pub async fn ensure_status(pool: &PgPool, source_id: &str, stage: Stage) -> Result<EnrichmentStatus> {
    let row = sqlx::query_as::<_, EnrichmentStatus>(
        r#"
        INSERT INTO enrichment_status (source_id, stage)
        VALUES ($1, $2)
        ON CONFLICT (source_id, stage) DO UPDATE SET source_id = enrichment_status.source_id
        RETURNING *
        "#,
    )
    .bind(source_id)
    .bind(stage)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Mark a stage as started for this document. A re-run may start from
/// any prior state.
#[tracing::instrument(skip(pool))]
pub async fn mark_started(
    pool: &PgPool,
    source_id: &str,
    stage: Stage,
    start_time: DateTime<Utc>,
) -> Result<EnrichmentStatus> {
    let row = sqlx::query_as::<_, EnrichmentStatus>(
        r#"
        INSERT INTO enrichment_status (source_id, stage, status, start_time, end_time, duration_secs, updated_at)
        VALUES ($1, $2, 'started', $3, NULL, NULL, now())
        ON CONFLICT (source_id, stage) DO UPDATE
        SET status = 'started', start_time = $3, end_time = NULL,
            duration_secs = NULL, updated_at = now()
        RETURNING *
        "#,
    )
    .bind(source_id)
    .bind(stage)
    .bind(start_time)
    .fetch_one(pool)
    .await?;

    tracing::info!(source_id, stage = %stage, "stage started");
    Ok(row)
}

/// Record a terminal outcome (pass or failed) with timing for this
/// document and stage.
#[tracing::instrument(skip(pool))]
pub async fn mark_finished(
    pool: &PgPool,
    source_id: &str,
    stage: Stage,
    status: StageStatus,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
) -> Result<EnrichmentStatus> {
    if !status.is_terminal() {
        return Err(PipelineError::InvalidInput(format!(
            "terminal status must be pass or failed, got {status}"
        )));
    }

    let duration_secs = (end_time - start_time).num_milliseconds() as f64 / 1000.0;

    let row = sqlx::query_as::<_, EnrichmentStatus>(
        r#"
        UPDATE enrichment_status
        SET status = $3, duration_secs = $4, start_time = $5, end_time = $6, updated_at = now()
        WHERE source_id = $1 AND stage = $2
        RETURNING *
        "#,
    )
    .bind(source_id)
    .bind(stage)
    .bind(status)
    .bind(duration_secs)
    .bind(start_time)
    .bind(end_time)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| PipelineError::StatusNotFound {
        source_id: source_id.to_string(),
        stage: stage.to_string(),
    })?;

    tracing::info!(
        source_id,
        stage = %stage,
        status = %status,
        duration_secs,
        "stage finished"
    );
    Ok(row)
}

/// Get the status row for a document and stage.
pub async fn get_status(pool: &PgPool, source_id: &str, stage: Stage) -> Result<EnrichmentStatus> {
    let row = sqlx::query_as::<_, EnrichmentStatus>(
        r#"SELECT * FROM enrichment_status WHERE source_id = $1 AND stage = $2"#,
    )
    .bind(source_id)
    .bind(stage)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| PipelineError::StatusNotFound {
        source_id: source_id.to_string(),
        stage: stage.to_string(),
    })?;

    Ok(row)
}

/// List documents whose juriscontent HTML is ready but whose section
/// extraction has not yet passed.
#[tracing::instrument(skip(pool))]
pub async fn list_pending_extractions(pool: &PgPool) -> Result<Vec<String>> {
    let source_ids = sqlx::query_scalar::<_, String>(
        r#"
        SELECT h.source_id
        FROM enrichment_status h
        WHERE h.stage = 'juriscontent_html' AND h.status = 'pass'
          AND NOT EXISTS (
              SELECT 1 FROM enrichment_status s
              WHERE s.source_id = h.source_id
                AND s.stage = 'section_extract'
                AND s.status = 'pass'
          )
        ORDER BY h.source_id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(source_ids)
}
