//! Configuration system for Brandgen
//!
//! Supports loading configuration from:
//! 1. CLI --config argument
//! 2. ~/.config/brandgen/config.json
//! 3. Default values
//!
//! # Examples
//!
//! ## Loading Configuration
//!
//! ```no_run
//! use brandgen::config::AppConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Load with default priority
//! let config = AppConfig::load(None)?;
//! println!("Endpoint: {}", config.api.endpoint);
//!
//! // Load from specific file
//! let config = AppConfig::load(Some("./my-config.json".as_ref()))?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Creating Configuration
//!
//! ```
//! use brandgen::config::AppConfig;
//!
//! let mut config = AppConfig::default();
//! config.runner.output_dir = "out/assets".into();
//! config.generation.aspect_ratio = "1:1".to_string();
//!
//! // Validate before using
//! config.validate().unwrap();
//! ```
//!
//! ## Environment Variables
//!
//! Environment variables override config file values:
//! - BRANDGEN_ENDPOINT
//! - BRANDGEN_OUTPUT_DIR
//! - GEMINI_API_KEY

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Aspect ratios accepted by the Imagen predict endpoint
const SUPPORTED_ASPECT_RATIOS: &[&str] = &["1:1", "3:4", "4:3", "9:16", "16:9"];

/// Configuration for the generation API endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Full URL of the `:predict` endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// API key (can be an environment variable name like "GEMINI_API_KEY")
    #[serde(default = "default_api_key", skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta/models/imagen-3.0-generate-001:predict"
        .to_string()
}

fn default_request_timeout() -> u64 {
    120
}

fn default_api_key() -> Option<String> {
    Some("GEMINI_API_KEY".to_string())
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: default_api_key(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ApiConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.is_empty() {
            return Err(ConfigError::ValidationError(
                "Endpoint cannot be empty".to_string(),
            ));
        }

        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Resolve API key from environment variable if needed
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key.as_ref().and_then(|key| {
            // If the key looks like an env var name, try to resolve it
            if key.chars().all(|c| c.is_uppercase() || c == '_') {
                std::env::var(key).ok()
            } else {
                Some(key.clone())
            }
        })
    }
}

/// Parameters sent with every generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Number of samples per prompt (1-4)
    #[serde(default = "default_sample_count")]
    pub sample_count: u32,

    /// Aspect ratio of the generated image
    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: String,

    /// Negative prompt applied to every task
    #[serde(default = "default_negative_prompt")]
    pub negative_prompt: String,
}

fn default_sample_count() -> u32 {
    1
}

fn default_aspect_ratio() -> String {
    "16:9".to_string()
}

fn default_negative_prompt() -> String {
    "bright colors, cheerful, cartoonish, low quality, blurry".to_string()
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            sample_count: default_sample_count(),
            aspect_ratio: default_aspect_ratio(),
            negative_prompt: default_negative_prompt(),
        }
    }
}

impl GenerationConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=4).contains(&self.sample_count) {
            return Err(ConfigError::ValidationError(format!(
                "sample_count must be between 1 and 4, got {}",
                self.sample_count
            )));
        }

        if !SUPPORTED_ASPECT_RATIOS.contains(&self.aspect_ratio.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "Unsupported aspect ratio: {} (expected one of {})",
                self.aspect_ratio,
                SUPPORTED_ASPECT_RATIOS.join(", ")
            )));
        }

        Ok(())
    }
}

/// Configuration for the sequential task runner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Directory artifacts are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Cooldown between consecutive requests, in milliseconds
    #[serde(default = "default_inter_delay")]
    pub inter_delay_ms: u64,

    /// File extension for written artifacts
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("assets")
}

fn default_inter_delay() -> u64 {
    2000
}

fn default_extension() -> String {
    "png".to_string()
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            inter_delay_ms: default_inter_delay(),
            extension: default_extension(),
        }
    }
}

impl RunnerConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "output_dir cannot be empty".to_string(),
            ));
        }

        if self.extension.is_empty() || self.extension.starts_with('.') {
            return Err(ConfigError::ValidationError(format!(
                "extension must be a bare suffix like \"png\", got {:?}",
                self.extension
            )));
        }

        Ok(())
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Generation API endpoint and credential
    #[serde(default)]
    pub api: ApiConfig,

    /// Per-request generation parameters
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Runner behavior (output, cooldown)
    #[serde(default)]
    pub runner: RunnerConfig,

    /// Enable debug logging
    #[serde(default)]
    pub debug: bool,
}

impl AppConfig {
    /// Load configuration from file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: AppConfig = serde_json::from_str(&content)?;

        // Apply environment variable overrides
        config.apply_env_overrides();

        // Validate
        config.validate()?;

        Ok(config)
    }

    /// Load configuration with standard priority:
    /// 1. Explicit path
    /// 2. ~/.config/brandgen/config.json
    /// 3. Defaults
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        // Try explicit path first
        if let Some(path) = explicit_path {
            if path.exists() {
                tracing::info!("Loading config from: {:?}", path);
                return Self::from_file(path);
            } else {
                return Err(ConfigError::ValidationError(format!(
                    "Config file not found: {:?}",
                    path
                )));
            }
        }

        // Try standard location
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("brandgen").join("config.json");

            if config_path.exists() {
                tracing::info!("Loading config from: {:?}", config_path);
                return Self::from_file(&config_path);
            }
        }

        // Fallback to defaults with env overrides
        tracing::info!("Using default configuration with environment overrides");
        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        if let Ok(endpoint) = std::env::var("BRANDGEN_ENDPOINT") {
            self.api.endpoint = endpoint;
        }

        if let Ok(dir) = std::env::var("BRANDGEN_OUTPUT_DIR") {
            self.runner.output_dir = PathBuf::from(dir);
        }

        // The API key is resolved on-demand via ApiConfig::resolve_api_key()
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()?;
        self.generation.validate()?;
        self.runner.validate()?;

        Ok(())
    }

    /// Get the config directory path
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("brandgen"))
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
