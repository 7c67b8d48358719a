//! Boot: logging init, config load, service creation.

use std::path::Path;
use tracing::{info, warn, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::conf::CallflowConfig;
use crate::service::CallFlowService;

/// Initialise the tracing / logging subsystem.
///
/// Logs go to stderr; stdout is reserved for query results.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "callflow=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Load and validate config, then build the call-flow service.
///
/// Returns `(CallFlowService, CallflowConfig)` on success.
pub fn boot() -> Result<(CallFlowService, CallflowConfig), Box<dyn std::error::Error>> {
    info!("Starting callflow v{}", env!("CARGO_PKG_VERSION"));

    let config = CallflowConfig::load()?;
    config.validate().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;
    info!(
        "Loaded configuration: log_path={}, read_chunk_bytes={}",
        config.log_path, config.read_chunk_bytes
    );

    if !Path::new(&config.log_path).exists() {
        warn!("Log file {} does not exist yet; queries will find nothing", config.log_path);
    }

    let service = CallFlowService::from_config(&config)?;
    info!("Initialized call-flow service");

    Ok((service, config))
}
