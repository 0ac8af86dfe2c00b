//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Reporting configuration.
    #[serde(default)]
    pub reporting: ReportingConfig,
}

/// Reporting configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportingConfig {
    /// Functional currency code reports are expressed in (ISO 4217).
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Company display name attached to report titles in export layers.
    #[serde(default)]
    pub company_name: Option<String>,
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            company_name: None,
        }
    }
}

fn default_currency() -> String {
    "USD".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("STATERA").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
