//! Probe settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Environment prefix for every probe setting (`HRPROBE_API__BASE_URL`, ...)
pub const ENV_PREFIX: &str = "HRPROBE";

/// Variable the frontend build exports the backend URL under
pub const LEGACY_BASE_URL_VAR: &str = "REACT_APP_BACKEND_URL";

pub const DEFAULT_BASE_URL: &str = "https://payroll-platform-3.preview.emergentagent.com";

/// Main probe configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub api: ApiConfig,
    pub credentials: CredentialsConfig,
    pub tester: TesterConfig,
    pub logging: LoggingConfig,
}

/// Target HR API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub connect_timeout_seconds: u64,
    pub user_agent: String,
}

/// A login pair for one demo account
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AccountConfig {
    pub email: String,
    pub password: String,
}

/// Demo accounts the tally tester logs in with
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CredentialsConfig {
    pub director: AccountConfig,
    pub employee: AccountConfig,
    pub admin: AccountConfig,
    /// Full names the login and `auth/me` checks compare against
    pub director_full_name: String,
    pub employee_full_name: String,
}

/// Tally tester expectations about the seeded dataset
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TesterConfig {
    pub expected_demo_users: usize,
    pub expected_employees: usize,
    pub extended_checks: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: Option<String>,
}

impl Settings {
    /// Load settings from `config.toml` (if present) and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::load("config")
    }

    /// Load settings from the named config file (optional) layered over defaults.
    ///
    /// Precedence, highest first: `HRPROBE_*` environment, `REACT_APP_BACKEND_URL`
    /// (base URL only), the config file, built-in defaults.
    pub fn load(file_name: &str) -> Result<Self, config::ConfigError> {
        let legacy_base_url = if std::env::var(format!("{}_API__BASE_URL", ENV_PREFIX)).is_ok() {
            None
        } else {
            std::env::var(LEGACY_BASE_URL_VAR)
                .ok()
                .filter(|url| !url.trim().is_empty())
        };

        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(config::File::with_name(file_name).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("api.base_url", legacy_base_url)?
            .build()?;

        let mut settings: Settings = settings.try_deserialize()?;
        settings.api.base_url = settings.api.base_url.trim_end_matches('/').to_string();
        Ok(settings)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::ProbeError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
                timeout_seconds: 30,
                connect_timeout_seconds: 10,
                user_agent: format!("hr-api-probe/{}", env!("CARGO_PKG_VERSION")),
            },
            credentials: CredentialsConfig {
                director: AccountConfig {
                    email: "director@dllc.com".to_string(),
                    password: "demo123".to_string(),
                },
                employee: AccountConfig {
                    email: "john.doe@dllc.com".to_string(),
                    password: "demo123".to_string(),
                },
                admin: AccountConfig {
                    email: "admin@dllc.com".to_string(),
                    password: "demo123".to_string(),
                },
                director_full_name: "Anil Lalwani".to_string(),
                employee_full_name: "John Doe".to_string(),
            },
            tester: TesterConfig {
                expected_demo_users: 10,
                expected_employees: 10,
                extended_checks: false,
            },
            logging: LoggingConfig {
                level: "warn".to_string(),
                file_path: None,
            },
        }
    }
}
