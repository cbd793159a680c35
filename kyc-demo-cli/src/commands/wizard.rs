//! Wizard command - interactive walk through every remaining step

use anyhow::Result;
use kyc_demo_core::{BusinessForm, Step, Wizard};
use std::path::Path;

use crate::ui;

pub async fn run(storage_dir: &Path, output: Option<std::path::PathBuf>) -> Result<()> {
    let mut wizard = super::open_wizard(storage_dir)?;
    ui::clear();
    ui::header("KYC Verification");

    loop {
        let step = wizard.next_incomplete_step();
        ui::separator();
        ui::stepper(&wizard.progress());

        match step {
            Step::Start | Step::Aadhaar => aadhaar_step(&mut wizard).await?,
            Step::Pan => pan_step(&mut wizard).await?,
            Step::Business => business_step(&mut wizard).await?,
            Step::Success => break,
        }

        // A failed step is retried; a verified one moves on through the gate
        if step.is_verified(wizard.state()) {
            let to = wizard.next(step)?;
            tracing::debug!(%step, %to, "advanced");
        } else if !ui::confirm("Try again?", true)? {
            ui::info("Progress saved. Run 'kyc-demo wizard' to resume");
            return Ok(());
        }
    }

    super::certificate::run(storage_dir, output).await
}

async fn aadhaar_step(wizard: &mut Wizard) -> Result<()> {
    ui::header("Aadhaar Verification");
    if ui::confirm("Verify instantly with DigiLocker?", true)? {
        super::aadhaar::verify_digilocker(wizard).await
    } else {
        let number = ui::input("Enter 12-digit Aadhaar number")?;
        super::aadhaar::verify_number(wizard, number.trim()).await
    }
}

async fn pan_step(wizard: &mut Wizard) -> Result<()> {
    ui::header("PAN Verification");
    let number = ui::input("Enter PAN (e.g. ABCDE1234F)")?;
    super::pan::verify(wizard, number.trim()).await
}

async fn business_step(wizard: &mut Wizard) -> Result<()> {
    ui::header("Business Verification");

    if wizard.pending_document().is_none() {
        let path = ui::input("Path to business proof document (PDF, JPG, PNG)")?;
        let document = match super::business::document_meta(Path::new(path.trim()), None) {
            Ok(document) => document,
            Err(e) => {
                ui::error(&format!("{:#}", e));
                return Ok(());
            }
        };
        if !super::business::upload(wizard, document).await? {
            return Ok(());
        }
    }

    let form = BusinessForm {
        name: ui::input("Business name")?,
        registration_number: ui::input("Registration number")?,
        gstin: ui::optional_input("GSTIN (optional)")?,
    };
    super::business::verify(wizard, form).await
}
