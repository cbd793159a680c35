//! PAN command - second verification step

use anyhow::Result;
use kyc_demo_core::{Step, Wizard};
use std::path::Path;

use super::with_spinner;
use crate::ui;

pub async fn run(storage_dir: &Path, number: Option<String>) -> Result<()> {
    let mut wizard = super::open_wizard(storage_dir)?;

    if !super::entered(&wizard, Step::Pan) {
        return Ok(());
    }

    ui::header("PAN Verification");

    let pan = &wizard.state().pan;
    if pan.verified {
        ui::success("Verified");
        ui::key_value("PAN Number", pan.number.as_deref().unwrap_or_default());
        ui::info("Run 'kyc-demo next pan' to continue to business verification");
        return Ok(());
    }

    let number = match number {
        Some(n) => n,
        None => ui::input("Enter PAN (e.g. ABCDE1234F)")?,
    };
    verify(&mut wizard, number.trim()).await
}

pub(crate) async fn verify(wizard: &mut Wizard, number: &str) -> Result<()> {
    let outcome = with_spinner("Verifying PAN...", wizard.submit_pan(number)).await;
    match outcome {
        Ok(result) => {
            ui::success(&result.message);
            ui::key_value("PAN Number", number);
            Ok(())
        }
        Err(e) => super::report(e),
    }
}
