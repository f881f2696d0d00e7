//! Test target selection
//!
//! The assertion suite runs against the live deployment when
//! `HRPROBE_LIVE_URL` is set, and against a freshly seeded fake backend otherwise.

use hr_api_probe::config::Settings;
use hr_api_probe::models::Credentials;
use hr_api_probe::{ApiClient, AuthService};

use super::hr_mock::HrMockServer;
use super::simple_test::init_test_env;
use super::test_data::{DEMO_PASSWORD, SUITE_ADMIN_EMAIL, SUITE_DIRECTOR_EMAIL, SUITE_EMPLOYEE_EMAIL};

pub const LIVE_URL_VAR: &str = "HRPROBE_LIVE_URL";

/// Which demo account a fixture logs in as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuiteRole {
    Director,
    Admin,
    Employee,
}

impl SuiteRole {
    pub fn email(self) -> &'static str {
        match self {
            SuiteRole::Director => SUITE_DIRECTOR_EMAIL,
            SuiteRole::Admin => SUITE_ADMIN_EMAIL,
            SuiteRole::Employee => SUITE_EMPLOYEE_EMAIL,
        }
    }

    pub fn credentials(self) -> Credentials {
        Credentials::new(self.email(), DEMO_PASSWORD)
    }
}

/// A running HR API to test against
pub struct TestTarget {
    pub client: ApiClient,
    pub auth: AuthService,
    pub live: bool,
    // keeps the fake backend alive for the duration of the test
    mock: Option<HrMockServer>,
}

impl TestTarget {
    pub async fn resolve() -> Self {
        init_test_env();

        match std::env::var(LIVE_URL_VAR) {
            Ok(url) if !url.trim().is_empty() => {
                let mut settings = Settings::default();
                settings.api.base_url = url.trim_end_matches('/').to_string();
                let client = ApiClient::new(&settings.api).expect("build live client");
                Self {
                    auth: AuthService::new(client.clone()),
                    client,
                    live: true,
                    mock: None,
                }
            }
            _ => Self::against(HrMockServer::seeded().await),
        }
    }

    /// Target a fake backend mounted by the caller
    pub fn against(mock: HrMockServer) -> Self {
        let client = mock.client();
        Self {
            auth: AuthService::new(client.clone()),
            client,
            live: false,
            mock: Some(mock),
        }
    }

    /// The fake backend behind this target, if any
    pub fn mock(&self) -> Option<&HrMockServer> {
        self.mock.as_ref()
    }

    /// Fresh login for `role`; `None` when authentication fails
    pub async fn token(&self, role: SuiteRole) -> Option<String> {
        self.auth.token_for(&role.credentials()).await
    }
}

/// Log in as a role, or skip the current test when that fails
#[macro_export]
macro_rules! token_or_skip {
    ($target:expr, $role:expr) => {
        match $target.token($role).await {
            Some(token) => token,
            None => {
                eprintln!("SKIPPED: {:?} authentication failed", $role);
                return;
            }
        }
    };
}
