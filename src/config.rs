use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

const ENV_PREFIX: &str = "SKAFFERI";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub planner: PlannerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Structured JSON logs instead of the pretty console format
    #[serde(default)]
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json_logs: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Serving stepper bounds
#[derive(Debug, Deserialize, Clone)]
pub struct PlannerConfig {
    #[serde(default = "default_servings")]
    pub default_servings: u32,
    #[serde(default = "default_max_servings")]
    pub max_servings: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            default_servings: default_servings(),
            max_servings: default_max_servings(),
        }
    }
}

fn default_servings() -> u32 {
    4
}

fn default_max_servings() -> u32 {
    12
}

impl PlannerConfig {
    /// Clamp requested servings into `1..=max_servings`.
    pub fn clamp_servings(&self, servings: Option<u32>) -> u32 {
        servings
            .unwrap_or(self.default_servings)
            .clamp(1, self.max_servings.max(1))
    }
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (SKAFFERI__PLANNER__MAX_SERVINGS, etc.)
    /// 2. Config file specified by path, CONFIG_PATH or config/default.toml
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        Self::load_with_prefix(config_path, ENV_PREFIX)
    }

    fn load_with_prefix(config_path: Option<String>, prefix: &str) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("observability.log_level", "info")?
            .set_default("observability.json_logs", false)?
            .set_default("planner.default_servings", 4)?
            .set_default("planner.max_servings", 12)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, ignored when missing
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix(prefix)
                .separator("__")
                .try_parsing(true),
        );

        // Production deployments switch to JSON logs without a config file
        if env::var("ENVIRONMENT").is_ok_and(|e| e == "production") {
            builder = builder.set_override("observability.json_logs", true)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.planner.max_servings < 1 {
            return Err("Planner max_servings must be at least 1".to_string());
        }
        if self.planner.default_servings < 1 {
            return Err("Planner default_servings must be at least 1".to_string());
        }
        if self.planner.default_servings > self.planner.max_servings {
            return Err(format!(
                "Planner default_servings ({}) must not exceed max_servings ({})",
                self.planner.default_servings, self.planner.max_servings
            ));
        }
        if self.observability.log_level.trim().is_empty() {
            return Err("Observability log_level must not be empty".to_string());
        }
        Ok(())
    }
}
