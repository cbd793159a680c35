//! Status command - the index page with overall progress

use anyhow::Result;
use kyc_demo_core::{Route, Step};
use std::path::Path;

use crate::ui;

pub async fn run(storage_dir: &Path, verbose: bool) -> Result<()> {
    let wizard = super::open_wizard(storage_dir)?;
    let progress = wizard.progress();

    ui::header("KYC Verification");

    if progress.is_complete() {
        ui::success("KYC Complete! All verification steps completed");
        ui::info("Run 'kyc-demo certificate' to view your certificate");
        return Ok(());
    }

    ui::info("Verification Progress:");
    ui::stepper(&progress);
    ui::key_value(
        "Progress",
        &format!("{}/{}", progress.completed(), progress.total()),
    );
    ui::separator();

    let next = wizard.next_incomplete_step();
    let action = if progress.started() {
        "Continue Verification"
    } else {
        "Start KYC Process"
    };
    ui::key_value(action, Route::path_of(next));
    ui::info(&format!("Run 'kyc-demo {}' to continue", command_for(next)));

    if verbose {
        ui::separator();
        ui::key_value("Storage", &storage_dir.display().to_string());
        println!("{}", serde_json::to_string_pretty(wizard.state())?);
    }

    Ok(())
}

fn command_for(step: Step) -> &'static str {
    match step {
        Step::Start | Step::Aadhaar => "aadhaar",
        Step::Pan => "pan",
        Step::Business => "business",
        Step::Success => "certificate",
    }
}
