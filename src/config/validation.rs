//! Configuration validation module
//!
//! This module provides validation functions for probe configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{ProbeError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_credentials_config(&settings.credentials)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate target API configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(ProbeError::Config(
            "API base URL is required".to_string()
        ));
    }

    let parsed = url::Url::parse(&config.base_url)?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ProbeError::Config(
            format!("API base URL must be http or https, got {}", parsed.scheme())
        ));
    }

    if config.timeout_seconds == 0 {
        return Err(ProbeError::Config(
            "API timeout must be greater than 0".to_string()
        ));
    }

    if config.connect_timeout_seconds == 0 {
        return Err(ProbeError::Config(
            "API connect timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate demo account credentials
fn validate_credentials_config(config: &super::CredentialsConfig) -> Result<()> {
    let accounts = [
        ("director", &config.director),
        ("employee", &config.employee),
        ("admin", &config.admin),
    ];

    for (role, account) in accounts {
        if account.email.is_empty() || account.password.is_empty() {
            return Err(ProbeError::Config(
                format!("Credentials for the {} account are incomplete", role)
            ));
        }
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(ProbeError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(ProbeError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
