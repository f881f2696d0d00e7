//! Attendance payloads

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response of `GET attendance/today`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodayAttendance {
    pub checked_in: bool,
    #[serde(default)]
    pub checked_out: Option<bool>,
    #[serde(default)]
    pub record: Option<Value>,
}

/// Server message when a second check-in is attempted on the same day
pub const ALREADY_CHECKED_IN: &str = "Already checked in today";

/// Server message when checking out without an open check-in
pub const NO_ACTIVE_CHECK_IN: &str = "No active check-in found";
