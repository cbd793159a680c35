//! Next command - the "Next" button of a step

use anyhow::Result;
use kyc_demo_core::{Route, Step};
use std::path::Path;

use crate::ui;

pub async fn run(storage_dir: &Path, from: Step) -> Result<()> {
    let wizard = super::open_wizard(storage_dir)?;

    match wizard.next(from) {
        Ok(to) => {
            ui::success(&format!("{} → {}", from, to));
            ui::key_value("Route", Route::path_of(to));
            Ok(())
        }
        Err(e) => super::report(e),
    }
}
