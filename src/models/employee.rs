//! Employee record model

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fields every employee record in a list response must carry
pub const REQUIRED_EMPLOYEE_FIELDS: [&str; 4] = ["full_name", "email", "employee_id", "status"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub employee_id: Option<Value>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub designation: Option<String>,
}

/// Names of required fields absent from a raw employee record
pub fn missing_employee_fields(record: &Value) -> Vec<&'static str> {
    REQUIRED_EMPLOYEE_FIELDS
        .iter()
        .copied()
        .filter(|field| record.get(field).is_none())
        .collect()
}
