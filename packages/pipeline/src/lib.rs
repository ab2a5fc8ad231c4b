//! Juriscontent enrichment pipeline: status tracking, section artifact
//! persistence, and the section-extract worker.
//!
//! The extraction itself lives in `juriscontent-extractor`; this crate
//! owns everything around it: the Postgres status and section tables,
//! the artifact store, and the worker that drives a run end to end.

pub mod config;
pub mod db;
pub mod error;
pub mod extraction;
pub mod models;
pub mod sections;
pub mod status;
pub mod store;
pub mod worker;

pub use config::{PipelineConfig, WorkerConfig};
pub use db::{create_pool, run_migrations};
pub use error::{PipelineError, Result};
pub use extraction::{ExtractionOutcome, RenderedSection};
pub use models::{EnrichmentStatus, SectionRecord, Stage, StageStatus};
pub use store::{BlobStore, FsBlobStore};
pub use worker::RunMode;
