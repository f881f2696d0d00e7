//! Authentication and user profile payloads

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST auth/login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl From<&crate::config::AccountConfig> for Credentials {
    fn from(account: &crate::config::AccountConfig) -> Self {
        Self::new(account.email.clone(), account.password.clone())
    }
}

/// Successful login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}

/// User as returned by login and `auth/me`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub employee_id: Option<Value>,
}

impl UserProfile {
    /// True when both role and full name match
    pub fn is(&self, role: &Role, full_name: &str) -> bool {
        self.role.as_ref() == Some(role) && self.full_name.as_deref() == Some(full_name)
    }
}

/// Access-level label attached to an authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Director,
    Admin,
    HR,
    Finance,
    Employee,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Director => "Director",
            Role::Admin => "Admin",
            Role::HR => "HR",
            Role::Finance => "Finance",
            Role::Employee => "Employee",
            Role::Other(other) => other,
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Director" => Role::Director,
            "Admin" => Role::Admin,
            "HR" => Role::HR,
            "Finance" => Role::Finance,
            "Employee" => Role::Employee,
            _ => Role::Other(value),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
