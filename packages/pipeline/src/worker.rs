//! Worker entry point: wires configuration, database, and artifact
//! store together and runs the requested stage(s).

use clap::ValueEnum;

use crate::config::WorkerConfig;
use crate::db;
use crate::error::Result;
use crate::extraction;
use crate::models::StageStatus;
use crate::store::FsBlobStore;

/// Which stage(s) a worker invocation covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum RunMode {
    /// Juriscontent HTML generation only (owned by the upstream service).
    Juriscontent,
    /// Section extraction only.
    Sections,
    /// Everything this worker owns.
    #[default]
    Both,
}

impl RunMode {
    #[must_use]
    pub fn includes_sections(self) -> bool {
        matches!(self, RunMode::Sections | RunMode::Both)
    }
}

/// Run the section worker once: either a single document, or every
/// pending one.
pub async fn run(config: WorkerConfig, mode: RunMode, source_id: Option<String>) -> Result<()> {
    if !mode.includes_sections() {
        tracing::info!(
            "juriscontent generation is handled by the upstream enrichment service; nothing to do"
        );
        return Ok(());
    }

    let pipeline_config = config.pipeline_config();
    let pool = db::create_pool(&pipeline_config).await?;
    db::run_migrations(&pool).await?;

    let store = FsBlobStore::new(&config.store_root);

    tracing::info!(
        store_root = %config.store_root.display(),
        store_prefix = %config.store_prefix,
        ?mode,
        "starting section worker"
    );

    let outcomes = match source_id {
        Some(source_id) => {
            vec![extraction::extract_document(&pool, &store, &config.store_prefix, &source_id).await]
        }
        None => extraction::run_batch(&pool, &store, &config.store_prefix).await?,
    };

    let passed = outcomes
        .iter()
        .filter(|o| o.status == StageStatus::Pass)
        .count();
    let failed = outcomes.len() - passed;
    let sections: usize = outcomes.iter().map(|o| o.section_count).sum();

    tracing::info!(
        documents = outcomes.len(),
        passed,
        failed,
        sections,
        "section worker run complete"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_mode_sections_coverage() {
        assert!(RunMode::Sections.includes_sections());
        assert!(RunMode::Both.includes_sections());
        assert!(!RunMode::Juriscontent.includes_sections());
    }

    #[test]
    fn test_run_mode_default_is_both() {
        assert_eq!(RunMode::default(), RunMode::Both);
    }
}
