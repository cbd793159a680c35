//! Open command - navigate to a logical route

use anyhow::Result;
use kyc_demo_core::{Navigation, Route};
use std::path::Path;

use crate::ui;

pub async fn run(storage_dir: &Path, path: &str) -> Result<()> {
    let wizard = super::open_wizard(storage_dir)?;

    match wizard.open(&Route::parse(path)) {
        Navigation::Render(step) => {
            ui::success(&format!("{} page", step));
            ui::key_value("Route", Route::path_of(step));
            ui::key_value(
                "Verified",
                if step.is_verified(wizard.state()) {
                    "yes"
                } else {
                    "no"
                },
            );
        }
        Navigation::Redirected { requested, to } => {
            ui::warning(&format!(
                "{} is locked until earlier steps are verified",
                requested
            ));
            ui::key_value("Redirected to", Route::path_of(to));
        }
        Navigation::NotFound(path) => {
            ui::error(&format!("404: no page at '{}'", path));
            ui::info("Run 'kyc-demo open /' to return home");
        }
    }

    Ok(())
}
