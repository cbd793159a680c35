//! Certificate command - the success page

use anyhow::{Context, Result};
use kyc_demo_core::Step;
use std::path::{Path, PathBuf};

use crate::ui;

pub async fn run(storage_dir: &Path, output: Option<PathBuf>) -> Result<()> {
    let wizard = super::open_wizard(storage_dir)?;

    if !super::entered(&wizard, Step::Success) {
        return Ok(());
    }

    let today = chrono::Local::now().date_naive();
    let certificate = match wizard.certificate(today) {
        Ok(certificate) => certificate,
        Err(e) => return super::report(e),
    };

    ui::header("KYC Completed Successfully!");
    ui::info("Verification Summary:");
    ui::key_value("Aadhaar", &certificate.aadhaar);
    ui::key_value("PAN", &certificate.pan);
    ui::key_value("Business", &certificate.business_name);
    ui::key_value("Registration", &certificate.registration_number);
    if let Some(gstin) = &certificate.gstin {
        ui::key_value("GSTIN", gstin);
    }
    ui::separator();

    let dir = match output {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to resolve current directory")?,
    };
    let path = certificate
        .write_to(&dir)
        .context("Failed to write certificate")?;
    ui::success(&format!("Certificate saved to {}", path.display()));
    ui::info(&format!(
        "Verification completed on {}",
        today.format("%-d %B %Y")
    ));

    Ok(())
}
