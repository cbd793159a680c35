//! CLI command implementations

pub mod aadhaar;
pub mod business;
pub mod certificate;
pub mod next;
pub mod open;
pub mod pan;
pub mod reset;
pub mod status;
pub mod wizard;

use anyhow::{Context, Result};
use kyc_demo_core::{KycConfig, KycError, Navigation, Route, Step, Wizard};
use std::path::Path;

use crate::ui;

/// Load the configuration and open the wizard stored in `storage_dir`
pub fn open_wizard(storage_dir: &Path) -> Result<Wizard> {
    let config = KycConfig::load(storage_dir).context("Failed to load configuration")?;
    Ok(Wizard::open_dir(storage_dir, &config))
}

/// Show user-facing errors as a notice; anything else is a real failure
pub fn report(err: KycError) -> Result<()> {
    if err.is_user_facing() {
        ui::notice(&err);
        Ok(())
    } else {
        Err(err.into())
    }
}

/// Apply the entry guard for `step`; prints the redirect when it is locked
pub fn entered(wizard: &Wizard, step: Step) -> bool {
    match wizard.open(&Route::Page(step)) {
        Navigation::Redirected { requested, to } => {
            ui::warning(&format!(
                "{} is locked until earlier steps are verified",
                requested
            ));
            ui::info(&format!("Redirected to {}", Route::path_of(to)));
            false
        }
        _ => true,
    }
}

/// Run a verification future behind a spinner
pub async fn with_spinner<T>(message: &str, fut: impl std::future::Future<Output = T>) -> T {
    let spinner = ui::spinner(message);
    let output = fut.await;
    spinner.finish_and_clear();
    output
}
