//! Common test utilities for kyc-demo-cli integration tests

use kyc_demo_core::KycConfig;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test context with a temporary storage directory and zero mock latency
#[allow(dead_code)]
pub struct TestContext {
    pub temp_dir: TempDir,
    pub storage_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let storage_dir = temp_dir.path().join("storage");
        KycConfig::instant().save(&storage_dir).unwrap();

        Self {
            temp_dir,
            storage_dir,
        }
    }

    /// Run the CLI against this context's storage directory
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_kyc-demo"))
            .args(args)
            .env("KYC_DEMO_DIR", &self.storage_dir)
            .env("NO_COLOR", "1")
            .current_dir(self.temp_dir.path())
            .output()
            .expect("Failed to execute kyc-demo")
    }

    /// Write a dummy document of `size` bytes and return its path
    pub fn document(&self, name: &str, size: usize) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, vec![0u8; size]).unwrap();
        path
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }
}

/// Combined stdout and stderr of a run
#[allow(dead_code)]
pub fn combined(output: &Output) -> String {
    format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}
