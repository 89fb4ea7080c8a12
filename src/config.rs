use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::core::DEFAULT_MIN_SCORE;
use crate::models::ScoringPoints;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// Suggestions must score strictly above this
    #[serde(default = "default_min_score")]
    pub min_score: u8,
    #[serde(default = "default_limit")]
    pub default_limit: u16,
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            min_score: default_min_score(),
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_min_score() -> u8 { DEFAULT_MIN_SCORE }
fn default_limit() -> u16 { 20 }
fn default_max_limit() -> u16 { 100 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub points: PointsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PointsConfig {
    #[serde(default = "default_surname_and_relatives")]
    pub surname_and_relatives: u32,
    #[serde(default = "default_birth_period_and_place")]
    pub birth_period_and_place: u32,
    #[serde(default = "default_nationality_and_country")]
    pub nationality_and_country: u32,
    #[serde(default = "default_shared_relatives")]
    pub shared_relatives: u32,
    #[serde(default = "default_same_last_name")]
    pub same_last_name: u32,
    #[serde(default = "default_same_nationality")]
    pub same_nationality: u32,
}

impl Default for PointsConfig {
    fn default() -> Self {
        Self {
            surname_and_relatives: default_surname_and_relatives(),
            birth_period_and_place: default_birth_period_and_place(),
            nationality_and_country: default_nationality_and_country(),
            shared_relatives: default_shared_relatives(),
            same_last_name: default_same_last_name(),
            same_nationality: default_same_nationality(),
        }
    }
}

impl From<&PointsConfig> for ScoringPoints {
    fn from(config: &PointsConfig) -> Self {
        Self {
            surname_and_relatives: config.surname_and_relatives,
            birth_period_and_place: config.birth_period_and_place,
            nationality_and_country: config.nationality_and_country,
            shared_relatives: config.shared_relatives,
            same_last_name: config.same_last_name,
            same_nationality: config.same_nationality,
        }
    }
}

fn default_surname_and_relatives() -> u32 { 40 }
fn default_birth_period_and_place() -> u32 { 30 }
fn default_nationality_and_country() -> u32 { 15 }
fn default_shared_relatives() -> u32 { 50 }
fn default_same_last_name() -> u32 { 10 }
fn default_same_nationality() -> u32 { 10 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with KIN__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., KIN__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Scoring points as used by the suggestion engine
    pub fn scoring_points(&self) -> ScoringPoints {
        ScoringPoints::from(&self.scoring.points)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("KIN")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
