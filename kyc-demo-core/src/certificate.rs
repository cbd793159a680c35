//! Plain-text completion certificate
//!
//! Only a complete [`VerificationState`] produces a certificate.

use crate::error::KycResult;
use crate::models::VerificationState;
use chrono::NaiveDate;
use std::fmt;
use std::path::{Path, PathBuf};

/// File name the certificate is offered under
pub const CERTIFICATE_FILE_NAME: &str = "kyc-certificate.txt";

/// KYC completion certificate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certificate {
    pub date: NaiveDate,
    /// "Verified via DigiLocker" or the Aadhaar number
    pub aadhaar: String,
    pub pan: String,
    pub business_name: String,
    pub registration_number: String,
    pub gstin: Option<String>,
}

impl Certificate {
    /// Build a certificate, or `None` while any step is unverified
    pub fn from_state(state: &VerificationState, date: NaiveDate) -> Option<Self> {
        if !state.is_complete() {
            return None;
        }

        let aadhaar = if state.aadhaar.via_digilocker {
            "Verified via DigiLocker".to_string()
        } else {
            state.aadhaar.number.clone().unwrap_or_default()
        };

        Some(Self {
            date,
            aadhaar,
            pan: state.pan.number.clone().unwrap_or_default(),
            business_name: state.business.name.clone().unwrap_or_default(),
            registration_number: state.business.registration_number.clone().unwrap_or_default(),
            gstin: state.business.gstin.clone().filter(|g| !g.is_empty()),
        })
    }

    /// Write to `dir/kyc-certificate.txt` and return the path
    pub fn write_to(&self, dir: &Path) -> KycResult<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(CERTIFICATE_FILE_NAME);
        std::fs::write(&path, self.to_string())?;
        Ok(path)
    }
}

impl fmt::Display for Certificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "KYC Verification Certificate")?;
        writeln!(f)?;
        writeln!(f, "Status: Verified ✓")?;
        writeln!(f, "Date: {}", self.date.format("%d/%m/%Y"))?;
        writeln!(f)?;
        writeln!(f, "Aadhaar: {}", self.aadhaar)?;
        writeln!(f, "PAN: {}", self.pan)?;
        writeln!(f, "Business: {}", self.business_name)?;
        writeln!(f, "Registration: {}", self.registration_number)?;
        if let Some(gstin) = &self.gstin {
            writeln!(f, "GSTIN: {}", gstin)?;
        }
        Ok(())
    }
}
