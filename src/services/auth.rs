//! Authentication service implementation
//!
//! Logs demo accounts in against `auth/login` and fetches the current user
//! from `auth/me`. Tokens are treated as opaque strings and handed back
//! verbatim.

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::models::{Credentials, LoginResponse, UserProfile};
use crate::services::api::{ApiClient, Payload};
use crate::utils::errors::{ProbeError, Result};

/// An authenticated demo account
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

impl From<LoginResponse> for Session {
    fn from(response: LoginResponse) -> Self {
        Self {
            token: response.token,
            user: response.user,
        }
    }
}

/// Authentication service bound to one API client
#[derive(Debug, Clone)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    /// Create a new AuthService instance
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Log in and return the session, failing on any status other than 200
    pub async fn login(&self, credentials: &Credentials) -> Result<Session> {
        debug!(email = %credentials.email, "Logging in");

        let body = serde_json::to_value(credentials)?;
        let response = self.api.post("auth/login", Some(&body), None).await?;

        if response.status.as_u16() != 200 {
            warn!(email = %credentials.email, status = response.status.as_u16(), "Login rejected");
            return Err(ProbeError::Authentication(format!(
                "login for {} returned status {}: {}",
                credentials.email,
                response.status.as_u16(),
                response.body
            )));
        }

        let login: LoginResponse = response.parse()?;
        info!(email = %credentials.email, role = ?login.user.role, "Logged in");
        Ok(login.into())
    }

    /// Log in and keep only the token; `None` when authentication fails for any reason
    pub async fn token_for(&self, credentials: &Credentials) -> Option<String> {
        match self.login(credentials).await {
            Ok(session) => Some(session.token),
            Err(e) => {
                warn!(email = %credentials.email, error = %e, "Could not obtain token");
                None
            }
        }
    }

    /// Fetch the profile behind a token from `auth/me`
    pub async fn current_user(&self, token: &str) -> Result<UserProfile> {
        let response = self.api.get("auth/me", Some(token)).await?;
        if response.status.as_u16() != 200 {
            return Err(ProbeError::UnexpectedStatus {
                endpoint: "auth/me".to_string(),
                status: response.status.as_u16(),
            });
        }
        response.parse()
    }
}

/// Extract `(token, user)` from a login payload without requiring a typed parse.
///
/// Returns `None` when either key is missing or the token is not a string.
pub fn extract_login(payload: &Payload) -> Option<(String, UserProfile)> {
    let token = payload.get("token").and_then(Value::as_str)?.to_string();
    let user = payload.get("user")?;
    let profile = serde_json::from_value(user.clone()).unwrap_or_default();
    Some((token, profile))
}
