use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use wilayah_indexer::{Dependencies, IndexerConfig, LogFormat};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let config =
        IndexerConfig::from_env().map_err(|e| anyhow::anyhow!("Failed to load config: {e}"))?;

    init_tracing(&config.log_level, config.log_format);

    info!("Starting wilayah indexer");

    let dependencies = Dependencies::new(&config).await.map_err(|e| {
        error!(error = %e, "Failed to initialize dependencies");
        e
    })?;

    let report = dependencies.pipeline.run().await.map_err(|e| {
        error!(error = %e, "Indexing aborted");
        e
    })?;

    if report.load.failed > 0 {
        info!(
            failed = report.load.failed,
            "Indexing finished with rejected documents; re-run to retry them"
        );
    }

    info!("Seeding completed");
    Ok(())
}

fn init_tracing(level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}
