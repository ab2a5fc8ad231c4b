use std::path::PathBuf;

use crate::error::{PipelineError, Result};

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub database_url: String,
    pub max_connections: u32,
}

impl PipelineConfig {
    pub fn from_env() -> Result<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| PipelineError::Config("DATABASE_URL not set".into()))?;

        let max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        Ok(Self {
            database_url,
            max_connections,
        })
    }

    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: 5,
        }
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }
}

#[derive(Debug, Clone)]
pub struct WorkerConfig {
    pub database_url: String,
    pub max_connections: u32,
    /// Root directory of the artifact store.
    pub store_root: PathBuf,
    /// Key prefix under which document folders live (e.g. "legislation/nsw").
    pub store_prefix: String,
}

impl WorkerConfig {
    pub fn from_env() -> Result<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| PipelineError::Config("DATABASE_URL not set".into()))?;

        let max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let store_root = std::env::var("STORE_ROOT")
            .unwrap_or_else(|_| "./object-store".into())
            .into();

        let store_prefix = std::env::var("STORE_PREFIX").unwrap_or_else(|_| "legislation".into());

        Ok(Self {
            database_url,
            max_connections,
            store_root,
            store_prefix,
        })
    }

    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            database_url: self.database_url.clone(),
            max_connections: self.max_connections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_config_builder() {
        let config = PipelineConfig::new("postgres://localhost/juris").with_max_connections(10);
        assert_eq!(config.database_url, "postgres://localhost/juris");
        assert_eq!(config.max_connections, 10);
    }
}
