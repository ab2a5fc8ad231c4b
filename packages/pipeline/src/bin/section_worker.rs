use clap::Parser;
use tracing_subscriber::EnvFilter;

use juriscontent_pipeline::config::WorkerConfig;
use juriscontent_pipeline::worker::{run, RunMode};

#[derive(Parser, Debug)]
#[command(
    name = "juriscontent-section-worker",
    about = "Split juriscontent HTML into section-level artifacts"
)]
struct Args {
    /// Which stage(s) to run.
    #[arg(long, value_enum, default_value = "both")]
    mode: RunMode,

    /// Process a single document instead of everything pending.
    #[arg(long)]
    source_id: Option<String>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = match WorkerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "failed to load configuration");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config, args.mode, args.source_id).await {
        tracing::error!(error = %e, "section worker exited with error");
        std::process::exit(1);
    }
}
