//! Load: config loading from file and environment variables.

use std::path::Path;
use std::fs::File;
use std::io::Read;

use super::model::CallflowConfig;

impl CallflowConfig {
    /// Load configuration from file or environment variables
    /// Priority: Environment Variables > Config File > Defaults
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = std::env::var("CALLFLOW_CONFIG_FILE")
            .unwrap_or_else(|_| "/etc/callflow/callflow.toml".to_string());

        let mut config = if Path::new(&config_path).exists() {
            tracing::info!("Loading configuration from: {}", config_path);
            Self::from_file(&config_path)?
        } else {
            tracing::info!("Config file not found at {}, using environment variables", config_path);
            Self::from_env()
        };

        if let Ok(log_path) = std::env::var("CALLFLOW_LOG_PATH") {
            config.log_path = log_path;
        }

        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: CallflowConfig = toml::from_str(contents)?;
        Ok(config)
    }

    /// Load configuration from environment variables with sensible defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            log_path: std::env::var("CALLFLOW_LOG_PATH").unwrap_or(defaults.log_path),
            read_chunk_bytes: std::env::var("CALLFLOW_READ_CHUNK_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.read_chunk_bytes),
        }
    }

    /// Check that configuration values are sane. A missing log file is not
    /// an error here; queries against it simply find nothing.
    pub fn validate(&self) -> Result<(), String> {
        if self.log_path.is_empty() {
            return Err("log_path must not be empty".to_string());
        }
        if self.read_chunk_bytes == 0 {
            return Err("read_chunk_bytes must be > 0".to_string());
        }
        Ok(())
    }
}
