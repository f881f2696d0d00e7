//! DLLC HR API probe
//!
//! Runs the tally-style checks against the configured deployment and exits
//! 0 when all of them pass, 1 otherwise. Startup failures exit with 2.

use std::process::ExitCode;

use anyhow::Context;
use tracing::{error, info};

use hr_api_probe::{
    config::Settings,
    utils::logging,
    ServiceFactory, Tester,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            error!(error = %e, "HR API probe failed to start");
            eprintln!("hr-api-probe: {:#}", e);
            ExitCode::from(2)
        }
    }
}

async fn run() -> anyhow::Result<u8> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("loading settings")?;
    settings.validate().context("validating settings")?;

    // Initialize logging; the guard flushes the log file on drop
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {} against {}", hr_api_probe::info(), settings.api.base_url);

    let services = ServiceFactory::new(&settings)?;
    let mut tester = Tester::new(services.api.clone(), &settings);

    Ok(tester.run_all_tests().await)
}
