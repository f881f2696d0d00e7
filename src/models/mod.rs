//! Payload models module
//!
//! Transient request and response shapes of the HR API. Fields the harness
//! never asserts on are optional so unrelated server changes do not break parsing.

pub mod user;
pub mod employee;
pub mod attendance;
pub mod leave;
pub mod system;

// Re-export commonly used models
pub use user::{Credentials, LoginResponse, UserProfile, Role};
pub use employee::{Employee, missing_employee_fields, REQUIRED_EMPLOYEE_FIELDS};
pub use attendance::{TodayAttendance, ALREADY_CHECKED_IN, NO_ACTIVE_CHECK_IN};
pub use leave::LeaveApplication;
pub use system::{HealthStatus, DemoUsers, DemoLoadResult};
