//! Configuration types for art-shares

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub listing: ListingConfig,
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelemetryConfig {
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormatConfig,
}

/// Log line format
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormatConfig {
    #[default]
    Pretty,
    Json,
}

/// Command output configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Result format: "table" or "json"
    #[serde(default = "default_output_format")]
    pub format: OutputFormat,
}

/// Result rendering for CLI commands
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
        }
    }
}

/// Listing defaults applied when a command omits them
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListingConfig {
    /// Shares issued per artwork
    #[serde(default = "default_total_shares")]
    pub total_shares: u64,
}

fn default_total_shares() -> u64 {
    100
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self { total_shares: 100 }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Configuration shipped in `config.toml.example`
    pub fn example() -> anyhow::Result<Self> {
        let config: Config = toml::from_str(include_str!("../config.toml.example"))?;
        Ok(config)
    }
}
