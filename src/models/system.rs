//! Health and demo-data payloads

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response of `GET health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Response of `GET demo/users`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemoUsers {
    #[serde(default)]
    pub demo_users: Vec<Value>,
}

/// Response of `POST demo/load-users`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemoLoadResult {
    #[serde(default)]
    pub created_count: Option<u64>,
    #[serde(default)]
    pub message: Option<String>,
}

impl DemoLoadResult {
    /// The loader answered with at least one of its two summary fields
    pub fn is_acknowledged(&self) -> bool {
        self.created_count.is_some() || self.message.is_some()
    }
}
