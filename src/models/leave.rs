//! Leave request model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Body of `POST leaves`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveApplication {
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
}

impl LeaveApplication {
    /// The fixed two-day annual leave the tally tester applies for
    pub fn christmas() -> Self {
        Self {
            leave_type: "Annual".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 12, 25).expect("valid calendar date"),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 26).expect("valid calendar date"),
            reason: "Christmas holiday".to_string(),
        }
    }
}
