//! DLLC HR API probe
//!
//! Black-box integration harness for the DLLC HR & Payroll REST API.
//! This library provides the request helper, login handling and the
//! tally-style tester; the assertion-style suite lives under `tests/`.

pub mod config;
pub mod models;
pub mod services;
pub mod tester;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{ProbeError, Result};

// Re-export main components for easy access
pub use services::{ApiClient, AuthService, Outcome, Payload, ServiceFactory};
pub use tester::{Tally, Tester};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
