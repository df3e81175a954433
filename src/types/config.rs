//! Configuration for Orçamento.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::BudgetResult;

/// Main configuration for Orçamento.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Caching proxy settings.
    #[serde(default)]
    pub proxy: ProxyConfig,

    /// Exporter settings.
    #[serde(default)]
    pub export: ExportConfig,

    /// Budget registry settings.
    #[serde(default)]
    pub registry: RegistryConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format (text, json).
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

/// Caching proxy settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxyConfig {
    /// Artificial latency added to the wrapped computation (in milliseconds).
    #[serde(default = "default_simulated_delay")]
    pub simulated_delay_ms: u64,

    /// How many times the demo reads the value through the proxy.
    #[serde(default = "default_demo_calls")]
    pub demo_calls: usize,
}

impl ProxyConfig {
    /// Returns the simulated delay as a `Duration`.
    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            simulated_delay_ms: default_simulated_delay(),
            demo_calls: default_demo_calls(),
        }
    }
}

fn default_simulated_delay() -> u64 {
    5000
}

fn default_demo_calls() -> usize {
    6
}

/// Exporter settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory where exported files are written.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    std::env::temp_dir()
}

/// Budget registry settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Endpoint that receives finalized budgets.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

fn default_endpoint() -> String {
    "http://api.registrar.orcamento".to_string()
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> BudgetResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves configuration to a TOML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> BudgetResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Creates default configuration.
    pub fn default_config() -> Self {
        Self {
            general: GeneralConfig::default(),
            proxy: ProxyConfig::default(),
            export: ExportConfig::default(),
            registry: RegistryConfig::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}
