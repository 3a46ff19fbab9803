//! Configuration

use clap::Args;
use rusty_money::{Findable, iso::Currency};
use thiserror::Error;

use crate::session::models::{Credentials, Secret};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The currency code is not an ISO 4217 code rusty-money knows.
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),

    /// The API URL is blank.
    #[error("api url must not be empty")]
    MissingApiUrl,
}

/// Backend API settings.
#[derive(Debug, Args)]
pub struct ApiConfig {
    /// Base URL of the back-office REST API
    #[arg(long, env = "BACKOFFICE_API_URL")]
    pub api_url: String,

    /// ISO 4217 code used when rendering amounts
    #[arg(long, env = "BACKOFFICE_CURRENCY", default_value = "EUR")]
    pub currency: String,
}

impl ApiConfig {
    /// Base URL without a trailing slash.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiUrl`] when the URL is blank.
    pub fn base_url(&self) -> Result<String, ConfigError> {
        let url = self.api_url.trim().trim_end_matches('/');

        if url.is_empty() {
            return Err(ConfigError::MissingApiUrl);
        }

        Ok(url.to_string())
    }

    /// Resolve the configured display currency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownCurrency`] for codes rusty-money does not know.
    pub fn currency(&self) -> Result<&'static Currency, ConfigError> {
        let code = self.currency.trim().to_ascii_uppercase();

        Currency::find(&code).ok_or(ConfigError::UnknownCurrency(code))
    }
}

/// Administrator credentials.
#[derive(Debug, Args)]
pub struct CredentialsConfig {
    /// Administrator e-mail address
    #[arg(long, env = "BACKOFFICE_EMAIL")]
    pub email: String,

    /// Administrator password
    #[arg(long, env = "BACKOFFICE_PASSWORD", hide_env_values = true)]
    pub password: String,
}

impl From<CredentialsConfig> for Credentials {
    fn from(config: CredentialsConfig) -> Self {
        Self {
            email: config.email,
            password: Secret::new(config.password),
        }
    }
}

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}
