use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub data: DataConfig,
    #[serde(default)]
    pub matching: MatchingConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// Path to the JSON recipe document.
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MatchingConfig {
    /// Default near-complete threshold, used when the caller supplies none.
    #[serde(default = "default_near_threshold")]
    pub near_threshold: f64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            near_threshold: default_near_threshold(),
        }
    }
}

fn default_near_threshold() -> f64 {
    recipe_graph::DEFAULT_NEAR_THRESHOLD
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (SMARTMEAL__DATA__PATH, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("data.path", "data/recipes.json")?
            .set_default(
                "matching.near_threshold",
                recipe_graph::DEFAULT_NEAR_THRESHOLD,
            )?
            .set_default("observability.log_level", "info")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional; defaults and env vars cover its absence.
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("SMARTMEAL")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.data.path.trim().is_empty() {
            return Err("data.path must not be empty".to_string());
        }
        if !(0.0..=1.0).contains(&self.matching.near_threshold) {
            return Err(format!(
                "matching.near_threshold must be within 0.0..=1.0, got {}",
                self.matching.near_threshold
            ));
        }
        Ok(())
    }
}
