//! Services module
//!
//! HTTP access to the HR API: the request helper and authentication on top of it.

pub mod api;
pub mod auth;

// Re-export commonly used services
pub use api::{ApiClient, ApiResponse, Outcome, Payload};
pub use auth::{AuthService, Session, extract_login};

use crate::config::settings::Settings;
use crate::utils::errors::Result;

/// Service factory for creating and sharing the probe's services
#[derive(Debug, Clone)]
pub struct ServiceFactory {
    pub api: ApiClient,
    pub auth_service: AuthService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(settings: &Settings) -> Result<Self> {
        let api = ApiClient::new(&settings.api)?;
        let auth_service = AuthService::new(api.clone());

        Ok(Self { api, auth_service })
    }
}
