//! Aadhaar command - first verification step

use anyhow::Result;
use kyc_demo_core::Wizard;
use std::path::Path;

use super::with_spinner;
use crate::ui;

pub async fn run(storage_dir: &Path, number: Option<String>, digilocker: bool) -> Result<()> {
    let mut wizard = super::open_wizard(storage_dir)?;
    ui::header("Aadhaar Verification");

    if wizard.state().aadhaar.verified {
        show_verified(&wizard);
        ui::info("Run 'kyc-demo next aadhaar' to continue to PAN");
        return Ok(());
    }

    let use_digilocker = match (&number, digilocker) {
        (_, true) => true,
        (Some(_), false) => false,
        (None, false) => ui::confirm("Verify instantly with DigiLocker?", true)?,
    };

    if use_digilocker {
        verify_digilocker(&mut wizard).await
    } else {
        let number = match number {
            Some(n) => n,
            None => ui::input("Enter 12-digit Aadhaar number")?,
        };
        verify_number(&mut wizard, number.trim()).await
    }
}

pub(crate) async fn verify_digilocker(wizard: &mut Wizard) -> Result<()> {
    let outcome = with_spinner(
        "Connecting to DigiLocker...",
        wizard.verify_with_digilocker(),
    )
    .await;
    match outcome {
        Ok(result) => {
            ui::success(&result.message);
            Ok(())
        }
        Err(e) => super::report(e),
    }
}

pub(crate) async fn verify_number(wizard: &mut Wizard, number: &str) -> Result<()> {
    let outcome = with_spinner("Verifying Aadhaar...", wizard.submit_aadhaar(number)).await;
    match outcome {
        Ok(result) => {
            ui::success(&result.message);
            show_verified(wizard);
            Ok(())
        }
        Err(e) => super::report(e),
    }
}

fn show_verified(wizard: &Wizard) {
    let aadhaar = &wizard.state().aadhaar;
    if aadhaar.via_digilocker {
        ui::success("Verified via DigiLocker");
    } else if let Some(number) = &aadhaar.number {
        ui::success("Verified");
        ui::key_value("Aadhaar Number", number);
    }
}
