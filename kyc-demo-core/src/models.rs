//! Data models for the KYC demo
//!
//! This module defines the per-step verification records, the aggregate
//! state persisted between sessions, and the partial updates used to mutate
//! a single record.
//!
//! # Models
//!
//! - [`AadhaarRecord`] - Aadhaar number and how it was verified
//! - [`PanRecord`] - Permanent Account Number
//! - [`BusinessRecord`] - Business name, registration, GSTIN and proof document
//! - [`VerificationState`] - The three records together
//! - [`DocumentMeta`] - Metadata of an uploaded proof document
//!
//! # Examples
//!
//! ## Merging a partial update
//!
//! ```
//! use kyc_demo_core::{AadhaarUpdate, VerificationState};
//!
//! let mut state = VerificationState::default();
//! state.aadhaar.merge(AadhaarUpdate::manual("123456789012"));
//!
//! assert!(state.aadhaar.verified);
//! assert!(!state.is_complete());
//! ```

use serde::{Deserialize, Serialize};

/// Aadhaar verification record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AadhaarRecord {
    /// 12-digit Aadhaar number (absent when verified via DigiLocker)
    pub number: Option<String>,
    /// Whether the Aadhaar step has been verified
    pub verified: bool,
    /// Whether verification went through DigiLocker
    #[serde(rename = "viaDigiLocker")]
    pub via_digilocker: bool,
}

/// PAN verification record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PanRecord {
    /// 10-character PAN (AAAAA9999A)
    pub number: Option<String>,
    /// Whether the PAN step has been verified
    pub verified: bool,
}

/// Business verification record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BusinessRecord {
    pub name: Option<String>,
    pub registration_number: Option<String>,
    /// 15-character GSTIN, if the business supplied one
    pub gstin: Option<String>,
    /// Reference to the uploaded proof document
    pub document_ref: Option<String>,
    /// Whether the business step has been verified
    pub verified: bool,
}

/// Aggregate verification state
///
/// This is the snapshot persisted under a single storage key. Missing
/// records deserialize as empty, unverified records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationState {
    pub aadhaar: AadhaarRecord,
    pub pan: PanRecord,
    pub business: BusinessRecord,
}

impl VerificationState {
    /// All three steps verified
    pub fn is_complete(&self) -> bool {
        self.aadhaar.verified && self.pan.verified && self.business.verified
    }
}

/// Partial update for [`AadhaarRecord`]
///
/// `None` fields leave the current value untouched. The outer `Option` of
/// `number` selects whether to touch the field, the inner one is the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AadhaarUpdate {
    pub number: Option<Option<String>>,
    pub verified: Option<bool>,
    pub via_digilocker: Option<bool>,
}

impl AadhaarUpdate {
    /// Update recording a successful manual verification
    pub fn manual(number: impl Into<String>) -> Self {
        Self {
            number: Some(Some(number.into())),
            verified: Some(true),
            via_digilocker: Some(false),
        }
    }

    /// Update recording a successful DigiLocker verification
    pub fn digilocker() -> Self {
        Self {
            number: None,
            verified: Some(true),
            via_digilocker: Some(true),
        }
    }
}

impl AadhaarRecord {
    /// Shallow-merge a partial update into this record
    pub fn merge(&mut self, update: AadhaarUpdate) {
        if let Some(number) = update.number {
            self.number = number;
        }
        if let Some(verified) = update.verified {
            self.verified = verified;
        }
        if let Some(via_digilocker) = update.via_digilocker {
            self.via_digilocker = via_digilocker;
        }
    }
}

/// Partial update for [`PanRecord`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanUpdate {
    pub number: Option<Option<String>>,
    pub verified: Option<bool>,
}

impl PanUpdate {
    /// Update recording a successful PAN verification
    pub fn verified(number: impl Into<String>) -> Self {
        Self {
            number: Some(Some(number.into())),
            verified: Some(true),
        }
    }
}

impl PanRecord {
    /// Shallow-merge a partial update into this record
    pub fn merge(&mut self, update: PanUpdate) {
        if let Some(number) = update.number {
            self.number = number;
        }
        if let Some(verified) = update.verified {
            self.verified = verified;
        }
    }
}

/// Partial update for [`BusinessRecord`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusinessUpdate {
    pub name: Option<Option<String>>,
    pub registration_number: Option<Option<String>>,
    pub gstin: Option<Option<String>>,
    pub document_ref: Option<Option<String>>,
    pub verified: Option<bool>,
}

impl BusinessRecord {
    /// Shallow-merge a partial update into this record
    pub fn merge(&mut self, update: BusinessUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(registration_number) = update.registration_number {
            self.registration_number = registration_number;
        }
        if let Some(gstin) = update.gstin {
            self.gstin = gstin;
        }
        if let Some(document_ref) = update.document_ref {
            self.document_ref = document_ref;
        }
        if let Some(verified) = update.verified {
            self.verified = verified;
        }
    }
}

/// Business details as entered on the business step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusinessForm {
    pub name: String,
    pub registration_number: String,
    /// Empty or `None` means no GSTIN was supplied
    pub gstin: Option<String>,
}

impl BusinessForm {
    pub fn new(name: impl Into<String>, registration_number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            registration_number: registration_number.into(),
            gstin: None,
        }
    }

    pub fn with_gstin(mut self, gstin: impl Into<String>) -> Self {
        self.gstin = Some(gstin.into());
        self
    }

    /// GSTIN with empty input treated as absent
    pub fn gstin(&self) -> Option<&str> {
        self.gstin.as_deref().filter(|g| !g.is_empty())
    }
}

/// Metadata of an uploaded document
///
/// The contents of the file are never inspected; only these three fields
/// cross the upload boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMeta {
    pub name: String,
    pub size_bytes: u64,
    /// Declared media type, e.g. `application/pdf`
    pub media_type: String,
}

impl DocumentMeta {
    pub fn new(name: impl Into<String>, size_bytes: u64, media_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            media_type: media_type.into(),
        }
    }
}

/// Outcome of a mock verification call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationResult {
    pub success: bool,
    pub message: String,
}

impl VerificationResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
