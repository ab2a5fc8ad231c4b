use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("extraction error: {0}")]
    Extraction(#[from] juriscontent_extractor::ExtractorError),

    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("blob not found: {0}")]
    BlobNotFound(String),

    #[error("status row not found for {source_id} at stage {stage}")]
    StatusNotFound { source_id: String, stage: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("task join error: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
