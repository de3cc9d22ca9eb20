use anyhow::{bail, Result};
use wildlens_vision::VisionProvider;

/// WildLens runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server bind address
    pub bind_address: String,
    /// HTTP server port
    pub port: u16,
    /// Directory for rolling log files
    pub log_dir: String,
    /// Log level
    pub log_level: String,
    /// Gemini API key
    pub gemini_api_key: Option<String>,
    /// OpenAI API key (used when no Gemini key is set)
    pub openai_api_key: Option<String>,
    /// Gemini model to request
    pub vision_model: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8080,
            log_dir: "logs".to_string(),
            log_level: "info".to_string(),
            gemini_api_key: None,
            openai_api_key: None,
            vision_model: "gemini-1.5-flash".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        Self {
            bind_address: std::env::var("WILDLENS_BIND")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("WILDLENS_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            log_dir: std::env::var("WILDLENS_LOG_DIR")
                .unwrap_or_else(|_| "logs".to_string()),
            log_level: std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info".to_string()),
            gemini_api_key: std::env::var("GEMINI_API_KEY").ok(),
            openai_api_key: std::env::var("OPENAI_API_KEY").ok(),
            vision_model: std::env::var("WILDLENS_VISION_MODEL")
                .unwrap_or_else(|_| "gemini-1.5-flash".to_string()),
        }
    }

    /// Build the vision provider from the configured keys, Gemini first.
    pub fn provider(&self) -> Result<VisionProvider> {
        if let Some(key) = &self.gemini_api_key {
            return Ok(VisionProvider::gemini(key.clone(), self.vision_model.clone()));
        }
        if let Some(key) = &self.openai_api_key {
            return Ok(VisionProvider::openai(key.clone()));
        }
        bail!("no vision provider configured: set GEMINI_API_KEY or OPENAI_API_KEY");
    }
}
