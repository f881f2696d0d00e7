//! Tally-style API tester
//!
//! Logs in as a director and an employee, keeps both tokens, then runs a
//! fixed, hand-ordered list of checks against the HR API. Each check prints
//! one line and is counted in the [`Tally`]; the run's exit code is 0 only
//! when every check passed.

pub mod checks;
pub mod tally;

pub use tally::{CheckRecord, Tally};

use tracing::info;

use crate::config::{CredentialsConfig, Settings, TesterConfig};
use crate::services::ApiClient;
use crate::utils::logging::log_check_result;

/// Sequential checker with two cached role tokens
#[derive(Debug)]
pub struct Tester {
    api: ApiClient,
    credentials: CredentialsConfig,
    config: TesterConfig,
    director_token: Option<String>,
    employee_token: Option<String>,
    tally: Tally,
}

impl Tester {
    pub fn new(api: ApiClient, settings: &Settings) -> Self {
        Self {
            api,
            credentials: settings.credentials.clone(),
            config: settings.tester.clone(),
            director_token: None,
            employee_token: None,
            tally: Tally::new(),
        }
    }

    /// Record and print one check result
    pub fn log_test(&mut self, name: &str, success: bool, details: &str) -> bool {
        log_check_result(name, success, details);
        let record = self.tally.record(name, success, details);
        println!("{}", record.line());
        success
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    pub fn director_token(&self) -> Option<&str> {
        self.director_token.as_deref()
    }

    pub fn employee_token(&self) -> Option<&str> {
        self.employee_token.as_deref()
    }

    /// Run every check in order, print the summary and return the exit code
    pub async fn run_all_tests(&mut self) -> u8 {
        info!(base_url = %self.api.base_url(), "Starting HR API checks");
        println!("🚀 Starting DLLC HR Backend API Tests");
        println!("{}", "=".repeat(50));

        // Basic connectivity
        self.test_health_check().await;
        self.test_demo_users_endpoint().await;

        // Authentication
        self.test_director_login().await;
        self.test_employee_login().await;
        self.test_auth_me_director().await;

        // Employee management
        self.test_get_employees_director().await;
        self.test_role_based_access().await;

        // Attendance
        self.test_attendance_checkin_employee().await;
        self.test_attendance_today_employee().await;
        self.test_attendance_checkout_employee().await;

        // Leave management
        self.test_apply_leave_employee().await;
        self.test_get_leaves_employee().await;

        if self.config.extended_checks {
            self.test_reports_forbidden_employee().await;
            self.test_audit_logs_forbidden_employee().await;
            self.test_get_tickets_employee().await;
            self.test_get_announcements_director().await;
        }

        for line in self.tally.summary_lines() {
            println!("{}", line);
        }

        info!(
            run = self.tally.run(),
            passed = self.tally.passed(),
            "HR API checks finished"
        );
        self.tally.exit_code()
    }
}
