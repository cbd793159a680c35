//! Demo configuration
//!
//! Stored as `config.json` in the storage directory. Every field has a
//! default, so a missing file or a partial file both load cleanly.

use crate::error::KycResult;
use crate::store::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

const CONFIG_FILE: &str = "config.json";

/// Top-level demo configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KycConfig {
    /// Key the verification snapshot is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Simulated latency of the mock verification calls
    #[serde(default)]
    pub latency: LatencyConfig,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for KycConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            latency: LatencyConfig::default(),
        }
    }
}

impl KycConfig {
    /// Configuration with every simulated delay set to zero
    pub fn instant() -> Self {
        Self {
            latency: LatencyConfig::none(),
            ..Self::default()
        }
    }

    /// Load configuration from `storage_dir`, or defaults if absent
    pub fn load(storage_dir: &Path) -> KycResult<Self> {
        let config_path = storage_dir.join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;
        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to `storage_dir`
    pub fn save(&self, storage_dir: &Path) -> KycResult<()> {
        std::fs::create_dir_all(storage_dir)?;
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(storage_dir.join(CONFIG_FILE), contents)?;
        Ok(())
    }
}

/// Per-operation mock latency, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    pub digilocker_ms: u64,
    pub aadhaar_ms: u64,
    pub pan_ms: u64,
    pub business_ms: u64,
    pub upload_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            digilocker_ms: 2000,
            aadhaar_ms: 1500,
            pan_ms: 1500,
            business_ms: 2000,
            upload_ms: 1000,
        }
    }
}

impl LatencyConfig {
    pub fn none() -> Self {
        Self {
            digilocker_ms: 0,
            aadhaar_ms: 0,
            pan_ms: 0,
            business_ms: 0,
            upload_ms: 0,
        }
    }

    pub fn digilocker(&self) -> Duration {
        Duration::from_millis(self.digilocker_ms)
    }

    pub fn aadhaar(&self) -> Duration {
        Duration::from_millis(self.aadhaar_ms)
    }

    pub fn pan(&self) -> Duration {
        Duration::from_millis(self.pan_ms)
    }

    pub fn business(&self) -> Duration {
        Duration::from_millis(self.business_ms)
    }

    pub fn upload(&self) -> Duration {
        Duration::from_millis(self.upload_ms)
    }
}
