//! Mock KYC verification service
//!
//! No call leaves the process: each operation waits for its configured
//! latency and then applies a format check. The rules are also available as
//! plain `validate_*` functions for callers that do not want the delay.

use crate::config::LatencyConfig;
use crate::error::{KycError, KycResult};
use crate::models::{DocumentMeta, VerificationResult};
use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::{debug, info};

/// Largest accepted document, 5 MiB
pub const MAX_DOCUMENT_BYTES: u64 = 5 * 1024 * 1024;

/// Accepted document media types; the short forms are aliases
pub const ALLOWED_MEDIA_TYPES: &[&str] = &[
    "application/pdf",
    "image/jpeg",
    "image/png",
    "image/jpg",
    "pdf",
    "jpeg",
    "png",
    "jpg",
];

static AADHAAR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{12}$").expect("Invalid Aadhaar regex"));

/// ABCDE1234F
static PAN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("Invalid PAN regex"));

/// State code, PAN, entity number, literal Z, checksum
static GSTIN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][1-9A-Z]Z[0-9A-Z]$").expect("Invalid GSTIN regex")
});

pub const MSG_DIGILOCKER_OK: &str = "Aadhaar verified successfully via DigiLocker";
pub const MSG_AADHAAR_OK: &str = "Aadhaar verified successfully";
pub const MSG_AADHAAR_INVALID: &str = "Invalid Aadhaar number. Must be 12 digits.";
pub const MSG_PAN_OK: &str = "PAN verified successfully";
pub const MSG_PAN_INVALID: &str = "Invalid PAN format. Expected format: ABCDE1234F";
pub const MSG_BUSINESS_OK: &str = "Business details verified successfully";
pub const MSG_BUSINESS_NAME_SHORT: &str = "Business name must be at least 3 characters";
pub const MSG_REGISTRATION_INVALID: &str = "Invalid registration number";
pub const MSG_GSTIN_INVALID: &str = "Invalid GSTIN format";
pub const MSG_UPLOAD_OK: &str = "Document uploaded successfully";
pub const MSG_FILE_TOO_LARGE: &str = "File size must be less than 5MB";
pub const MSG_FILE_TYPE: &str = "Only PDF and image files are allowed";

/// 12 ASCII digits
pub fn validate_aadhaar(number: &str) -> KycResult<()> {
    if AADHAAR_REGEX.is_match(number) {
        Ok(())
    } else {
        Err(KycError::Validation(MSG_AADHAAR_INVALID.to_string()))
    }
}

/// Five uppercase letters, four digits, one uppercase letter
pub fn validate_pan(number: &str) -> KycResult<()> {
    if PAN_REGEX.is_match(number) {
        Ok(())
    } else {
        Err(KycError::Validation(MSG_PAN_INVALID.to_string()))
    }
}

pub fn validate_gstin(gstin: &str) -> KycResult<()> {
    if GSTIN_REGEX.is_match(gstin) {
        Ok(())
    } else {
        Err(KycError::Validation(MSG_GSTIN_INVALID.to_string()))
    }
}

/// Name of at least 3 characters, registration of at least 5, and a
/// well-formed GSTIN when one is given. An empty GSTIN counts as absent.
pub fn validate_business(
    name: &str,
    registration_number: &str,
    gstin: Option<&str>,
) -> KycResult<()> {
    if name.chars().count() < 3 {
        return Err(KycError::Validation(MSG_BUSINESS_NAME_SHORT.to_string()));
    }
    if registration_number.chars().count() < 5 {
        return Err(KycError::Validation(MSG_REGISTRATION_INVALID.to_string()));
    }
    match gstin {
        Some(gstin) if !gstin.is_empty() => validate_gstin(gstin),
        _ => Ok(()),
    }
}

/// At most 5 MiB and a PDF or image media type
pub fn validate_document(document: &DocumentMeta) -> KycResult<()> {
    if document.size_bytes > MAX_DOCUMENT_BYTES {
        return Err(KycError::Validation(MSG_FILE_TOO_LARGE.to_string()));
    }
    let media_type = document.media_type.trim();
    if !ALLOWED_MEDIA_TYPES
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(media_type))
    {
        return Err(KycError::Validation(MSG_FILE_TYPE.to_string()));
    }
    Ok(())
}

fn into_result(outcome: KycResult<()>, success_message: &str) -> VerificationResult {
    match outcome {
        Ok(()) => VerificationResult::success(success_message),
        Err(e) => VerificationResult::failure(e.to_string()),
    }
}

/// Mock verification endpoints with simulated latency
#[derive(Debug, Clone, Default)]
pub struct KycService {
    latency: LatencyConfig,
}

impl KycService {
    pub fn new(latency: LatencyConfig) -> Self {
        Self { latency }
    }

    /// Service without any simulated delay
    pub fn instant() -> Self {
        Self::new(LatencyConfig::none())
    }

    pub fn latency(&self) -> &LatencyConfig {
        &self.latency
    }

    /// Aadhaar via DigiLocker; there is nothing to check, it always succeeds
    pub async fn verify_aadhaar_digilocker(&self) -> VerificationResult {
        debug!("verifying aadhaar via digilocker");
        simulate(self.latency.digilocker()).await;
        info!("aadhaar verified via digilocker");
        VerificationResult::success(MSG_DIGILOCKER_OK)
    }

    pub async fn verify_aadhaar(&self, number: &str) -> VerificationResult {
        debug!("verifying aadhaar number");
        simulate(self.latency.aadhaar()).await;
        log_outcome("aadhaar", into_result(validate_aadhaar(number), MSG_AADHAAR_OK))
    }

    pub async fn verify_pan(&self, number: &str) -> VerificationResult {
        debug!("verifying pan");
        simulate(self.latency.pan()).await;
        log_outcome("pan", into_result(validate_pan(number), MSG_PAN_OK))
    }

    pub async fn verify_business(
        &self,
        name: &str,
        registration_number: &str,
        gstin: Option<&str>,
    ) -> VerificationResult {
        debug!(has_gstin = gstin.is_some(), "verifying business");
        simulate(self.latency.business()).await;
        log_outcome(
            "business",
            into_result(
                validate_business(name, registration_number, gstin),
                MSG_BUSINESS_OK,
            ),
        )
    }

    /// Check document metadata; the contents are never read
    pub async fn upload_document(&self, document: &DocumentMeta) -> VerificationResult {
        debug!(
            name = %document.name,
            size = document.size_bytes,
            media_type = %document.media_type,
            "uploading document"
        );
        simulate(self.latency.upload()).await;
        log_outcome("document", into_result(validate_document(document), MSG_UPLOAD_OK))
    }
}

async fn simulate(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

fn log_outcome(operation: &str, result: VerificationResult) -> VerificationResult {
    if result.success {
        info!(operation, "verification succeeded");
    } else {
        debug!(operation, message = %result.message, "verification rejected");
    }
    result
}
