//! Boot — logging init and config load.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::conf::AnalyzerConfig;

/// Initialise the tracing / logging subsystem.
///
/// Logs go to stderr; stdout carries only the JSON result.
pub fn init_logging(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Load config, then bring up logging with the configured filter.
pub fn boot() -> Result<AnalyzerConfig, Box<dyn std::error::Error>> {
    let config = AnalyzerConfig::load()?;
    init_logging(&config.log_filter);

    info!("Starting gclog v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Output: pretty={}, include_stats={}, max_input_bytes={}",
        config.pretty, config.include_stats, config.max_input_bytes
    );

    Ok(config)
}
