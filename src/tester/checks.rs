//! Individual checks run by the [`Tester`]
//!
//! Every check issues at most one request and records exactly one result.
//! Checks that need a token record a failure without touching the network
//! when that token was never obtained.

use reqwest::Method;
use serde_json::Value;

use super::Tester;
use crate::models::{Credentials, DemoUsers, LeaveApplication, Role, ALREADY_CHECKED_IN, NO_ACTIVE_CHECK_IN};
use crate::services::api::Payload;
use crate::services::auth::extract_login;
use crate::utils::helpers::{json_kind, truncate_text};

/// Upper bound on response text quoted in a failure line
pub const MAX_DETAIL_CHARS: usize = 200;

/// Which cached token a check runs with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum As {
    Director,
    Employee,
}

impl As {
    fn label(self) -> &'static str {
        match self {
            As::Director => "director",
            As::Employee => "employee",
        }
    }
}

impl Tester {
    fn token(&self, who: As) -> Option<String> {
        match who {
            As::Director => self.director_token.clone(),
            As::Employee => self.employee_token.clone(),
        }
    }

    /// Record a failure for a check whose token is missing; returns the token otherwise
    fn require_token(&mut self, name: &str, who: As) -> Option<String> {
        let token = self.token(who);
        if token.is_none() {
            self.log_test(name, false, &format!("No {} token available", who.label()));
        }
        token
    }

    /// GET `endpoint` with a role token and only check the status
    async fn expect_status(&mut self, name: &str, who: As, endpoint: &str, expected: u16) -> bool {
        let Some(token) = self.require_token(name, who) else {
            return false;
        };
        let outcome = self.api.request(Method::GET, endpoint, None, Some(&token), expected).await;
        self.log_test(name, outcome.success, &outcome.details())
    }

    pub async fn test_health_check(&mut self) -> bool {
        let outcome = self.api.request(Method::GET, "health", None, None, 200).await;
        self.log_test("Health Check", outcome.success, &outcome.details())
    }

    pub async fn test_demo_users_endpoint(&mut self) -> bool {
        let outcome = self.api.request(Method::GET, "demo/users", None, None, 200).await;
        let expected = self.config.expected_demo_users;

        let (success, details) = if outcome.success {
            let count = outcome
                .payload
                .as_json()
                .and_then(|body| serde_json::from_value::<DemoUsers>(body.clone()).ok())
                .map_or(0, |demo| demo.demo_users.len());
            if count == expected {
                (true, String::new())
            } else {
                (false, format!("Expected {} users, got {}", expected, count))
            }
        } else {
            (false, outcome.details())
        };

        self.log_test("Demo Users Endpoint", success, &details)
    }

    /// Log in, cache the token whenever one is returned, then verify role and name
    async fn login_check(&mut self, name: &str, who: As) -> bool {
        let (credentials, role, full_name) = match who {
            As::Director => (
                Credentials::from(&self.credentials.director),
                Role::Director,
                self.credentials.director_full_name.clone(),
            ),
            As::Employee => (
                Credentials::from(&self.credentials.employee),
                Role::Employee,
                self.credentials.employee_full_name.clone(),
            ),
        };

        let body = match serde_json::to_value(&credentials) {
            Ok(body) => body,
            Err(e) => return self.log_test(name, false, &format!("Request failed: {}", e)),
        };
        let outcome = self.api.request(Method::POST, "auth/login", Some(&body), None, 200).await;

        if !outcome.success {
            return self.log_test(name, false, &outcome.details());
        }

        let Some((token, user)) = extract_login(&outcome.payload) else {
            return self.log_test(name, false, "Missing token or user in response");
        };

        match who {
            As::Director => self.director_token = Some(token),
            As::Employee => self.employee_token = Some(token),
        }

        if user.is(&role, &full_name) {
            self.log_test(name, true, "")
        } else {
            let raw_user = outcome.payload.get("user").cloned().unwrap_or(Value::Null);
            let details = format!("Invalid user data: {}", raw_user);
            self.log_test(name, false, &truncate_text(&details, MAX_DETAIL_CHARS))
        }
    }

    pub async fn test_director_login(&mut self) -> bool {
        self.login_check("Director Login", As::Director).await
    }

    pub async fn test_employee_login(&mut self) -> bool {
        self.login_check("Employee Login", As::Employee).await
    }

    pub async fn test_auth_me_director(&mut self) -> bool {
        let name = "Auth Me (Director)";
        let Some(token) = self.require_token(name, As::Director) else {
            return false;
        };

        let outcome = self.api.request(Method::GET, "auth/me", None, Some(&token), 200).await;
        if !outcome.success {
            return self.log_test(name, false, &outcome.details());
        }

        let role_ok = outcome.payload.get("role").and_then(Value::as_str) == Some(Role::Director.as_str());
        let name_ok = outcome.payload.get("full_name").and_then(Value::as_str)
            == Some(self.credentials.director_full_name.as_str());

        if role_ok && name_ok {
            self.log_test(name, true, "")
        } else {
            let details = format!("Invalid user data: {}", outcome.payload);
            self.log_test(name, false, &truncate_text(&details, MAX_DETAIL_CHARS))
        }
    }

    pub async fn test_get_employees_director(&mut self) -> bool {
        let name = "Get Employees (Director)";
        let Some(token) = self.require_token(name, As::Director) else {
            return false;
        };

        let outcome = self.api.request(Method::GET, "employees", None, Some(&token), 200).await;
        if !outcome.success {
            return self.log_test(name, false, &outcome.details());
        }

        let expected = self.config.expected_employees;
        let count = outcome.payload.len();
        if count == expected {
            self.log_test(name, true, "")
        } else {
            self.log_test(name, false, &format!("Expected {} employees, got {}", expected, count))
        }
    }

    pub async fn test_role_based_access(&mut self) -> bool {
        let name = "Role-based Access Control";
        let Some(token) = self.require_token(name, As::Employee) else {
            return false;
        };

        // an employee may only see their own record
        let outcome = self.api.request(Method::GET, "employees", None, Some(&token), 200).await;
        if !outcome.success {
            return self.log_test(name, false, &outcome.details());
        }

        let count = outcome.payload.len();
        if count == 1 {
            self.log_test(name, true, "")
        } else {
            self.log_test(
                name,
                false,
                &format!("Employee saw {} employees, should only see 1 (themselves)", count),
            )
        }
    }

    pub async fn test_attendance_checkin_employee(&mut self) -> bool {
        let name = "Attendance Check-in";
        let Some(token) = self.require_token(name, As::Employee) else {
            return false;
        };

        let outcome = self.api.request(Method::POST, "attendance/checkin", None, Some(&token), 201).await;
        if !outcome.success && outcome.payload.contains(ALREADY_CHECKED_IN) {
            return self.log_test(name, true, "");
        }
        self.log_test(name, outcome.success, &outcome.details())
    }

    pub async fn test_attendance_today_employee(&mut self) -> bool {
        let name = "Attendance Today Status";
        let Some(token) = self.require_token(name, As::Employee) else {
            return false;
        };

        let outcome = self.api.request(Method::GET, "attendance/today", None, Some(&token), 200).await;
        if !outcome.success {
            return self.log_test(name, false, &outcome.details());
        }

        if outcome.payload.has("checked_in") {
            self.log_test(name, true, "")
        } else {
            let details = format!("Missing checked_in field: {}", outcome.payload);
            self.log_test(name, false, &truncate_text(&details, MAX_DETAIL_CHARS))
        }
    }

    pub async fn test_attendance_checkout_employee(&mut self) -> bool {
        let name = "Attendance Check-out";
        let Some(token) = self.require_token(name, As::Employee) else {
            return false;
        };

        let outcome = self.api.request(Method::POST, "attendance/checkout", None, Some(&token), 200).await;
        if !outcome.success && outcome.payload.contains(NO_ACTIVE_CHECK_IN) {
            return self.log_test(name, true, "");
        }
        self.log_test(name, outcome.success, &outcome.details())
    }

    pub async fn test_apply_leave_employee(&mut self) -> bool {
        let name = "Apply Leave";
        let Some(token) = self.require_token(name, As::Employee) else {
            return false;
        };

        let body = match serde_json::to_value(LeaveApplication::christmas()) {
            Ok(body) => body,
            Err(e) => return self.log_test(name, false, &format!("Request failed: {}", e)),
        };
        let outcome = self.api.request(Method::POST, "leaves", Some(&body), Some(&token), 201).await;
        self.log_test(name, outcome.success, &outcome.details())
    }

    pub async fn test_get_leaves_employee(&mut self) -> bool {
        let name = "Get Leaves (Employee)";
        let Some(token) = self.require_token(name, As::Employee) else {
            return false;
        };

        let outcome = self.api.request(Method::GET, "leaves", None, Some(&token), 200).await;
        if !outcome.success {
            return self.log_test(name, false, &outcome.details());
        }

        match &outcome.payload {
            Payload::Json(Value::Array(_)) => self.log_test(name, true, ""),
            Payload::Json(other) => {
                let details = format!("Expected list, got {}", json_kind(other));
                self.log_test(name, false, &details)
            }
            Payload::Text(_) => self.log_test(name, false, "Expected list, got text"),
        }
    }

    pub async fn test_reports_forbidden_employee(&mut self) -> bool {
        self.expect_status("Reports Forbidden (Employee)", As::Employee, "reports/employees", 403).await
    }

    pub async fn test_audit_logs_forbidden_employee(&mut self) -> bool {
        self.expect_status("Audit Logs Forbidden (Employee)", As::Employee, "audit-logs", 403).await
    }

    pub async fn test_get_tickets_employee(&mut self) -> bool {
        self.expect_status("Get Tickets (Employee)", As::Employee, "tickets", 200).await
    }

    pub async fn test_get_announcements_director(&mut self) -> bool {
        self.expect_status("Get Announcements (Director)", As::Director, "announcements", 200).await
    }
}
