//! Reset command - start over

use anyhow::Result;
use std::path::Path;

use crate::ui;

pub async fn run(storage_dir: &Path, yes: bool) -> Result<()> {
    let mut wizard = super::open_wizard(storage_dir)?;

    if !yes && !ui::confirm("Discard all verification progress?", false)? {
        ui::info("Reset cancelled");
        return Ok(());
    }

    wizard.start_over()?;
    ui::success("Verification progress cleared");
    ui::info("Run 'kyc-demo status' to start again");
    Ok(())
}
