use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pipeline stages tracked per source document.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    sqlx::Type,
    strum::Display,
    strum::EnumString,
)]
#[sqlx(type_name = "enrichment_stage", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Stage {
    /// Upstream cleaned-HTML generation (a prior service owns this).
    JuriscontentHtml,
    /// Section-level content extraction (this service).
    SectionExtract,
}

/// Status of one stage for one source document.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    sqlx::Type,
    strum::Display,
    strum::EnumString,
)]
#[sqlx(type_name = "stage_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StageStatus {
    NotStarted,
    Started,
    Pass,
    Failed,
}

impl StageStatus {
    /// Whether this is a terminal run outcome.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, StageStatus::Pass | StageStatus::Failed)
    }
}

/// One enrichment status row: (source document, stage), updated in place.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EnrichmentStatus {
    pub source_id: String,
    pub stage: Stage,
    pub status: StageStatus,
    pub duration_secs: Option<f64>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

/// A durable record linking a section artifact back to its source document.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct SectionRecord {
    pub id: i64,
    pub source_id: String,
    /// The section's sequence number (1-based, gap-free per document).
    pub section_id: i32,
    pub created_at: DateTime<Utc>,
}
