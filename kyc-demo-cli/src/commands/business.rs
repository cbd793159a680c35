//! Business command - third verification step

use anyhow::{Context, Result};
use kyc_demo_core::{BusinessForm, DocumentMeta, Step, Wizard};
use std::path::Path;

use super::with_spinner;
use crate::ui;

/// Business details collected from flags or prompts
pub struct BusinessArgs {
    pub name: Option<String>,
    pub registration: Option<String>,
    pub gstin: Option<String>,
    pub document: Option<String>,
    pub media_type: Option<String>,
}

pub async fn run(storage_dir: &Path, args: BusinessArgs) -> Result<()> {
    let mut wizard = super::open_wizard(storage_dir)?;

    if !super::entered(&wizard, Step::Business) {
        return Ok(());
    }

    ui::header("Business Verification");

    if wizard.state().business.verified {
        show_verified(&wizard);
        ui::info("Run 'kyc-demo next business' to complete KYC");
        return Ok(());
    }

    let document = match args.document {
        Some(path) => path,
        None => ui::input("Path to business proof document (PDF, JPG, PNG)")?,
    };
    let document = document_meta(Path::new(document.trim()), args.media_type.as_deref())?;
    if !upload(&mut wizard, document).await? {
        return Ok(());
    }

    // Flags were used, so the optional GSTIN is not prompted for
    let from_flags = args.name.is_some();
    let form = BusinessForm {
        name: match args.name {
            Some(name) => name,
            None => ui::input("Business name")?,
        },
        registration_number: match args.registration {
            Some(reg) => reg,
            None => ui::input("Registration number")?,
        },
        gstin: match args.gstin {
            Some(gstin) => Some(gstin),
            None if from_flags => None,
            None => ui::optional_input("GSTIN (optional)")?,
        },
    };
    verify(&mut wizard, form).await
}

/// Build upload metadata from a file on disk
///
/// Only the file's size is read from the file system; the media type comes
/// from `media_type` or, failing that, the file extension.
pub fn document_meta(path: &Path, media_type: Option<&str>) -> Result<DocumentMeta> {
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("Failed to read document metadata for {}", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let media_type = media_type
        .map(str::to_string)
        .unwrap_or_else(|| media_type_for(path).to_string());

    Ok(DocumentMeta::new(name, metadata.len(), media_type))
}

/// Media type implied by a file extension
pub fn media_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "pdf" => "application/pdf",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        _ => "application/octet-stream",
    }
}

pub(crate) async fn upload(wizard: &mut Wizard, document: DocumentMeta) -> Result<bool> {
    let outcome = with_spinner("Uploading document...", wizard.upload_document(document)).await;
    match outcome {
        Ok(result) => {
            ui::success(&result.message);
            Ok(true)
        }
        Err(e) => super::report(e).map(|()| false),
    }
}

pub(crate) async fn verify(wizard: &mut Wizard, form: BusinessForm) -> Result<()> {
    let outcome = with_spinner("Verifying business details...", wizard.submit_business(form)).await;
    match outcome {
        Ok(result) => {
            ui::success(&result.message);
            show_verified(wizard);
            Ok(())
        }
        Err(e) => super::report(e),
    }
}

fn show_verified(wizard: &Wizard) {
    let business = &wizard.state().business;
    ui::success("Verified");
    if let Some(name) = &business.name {
        ui::key_value("Business", name);
    }
    if let Some(reg) = &business.registration_number {
        ui::key_value("Registration", reg);
    }
    if let Some(gstin) = &business.gstin {
        ui::key_value("GSTIN", gstin);
    }
    if let Some(document) = &business.document_ref {
        ui::key_value("Document", document);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_meta_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("Proof.PDF");
        std::fs::write(&path, vec![0u8; 2048]).unwrap();

        let meta = document_meta(&path, None).unwrap();
        assert_eq!(meta.name, "Proof.PDF");
        assert_eq!(meta.size_bytes, 2048);
        assert_eq!(meta.media_type, "application/pdf");

        let meta = document_meta(&path, Some("image/png")).unwrap();
        assert_eq!(meta.media_type, "image/png");
    }

    #[test]
    fn test_missing_document_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(document_meta(&temp_dir.path().join("absent.pdf"), None).is_err());
    }

    #[test]
    fn test_media_type_for_extension() {
        assert_eq!(media_type_for(Path::new("a.jpeg")), "image/jpeg");
        assert_eq!(media_type_for(Path::new("a.JPG")), "image/jpeg");
        assert_eq!(media_type_for(Path::new("a.png")), "image/png");
        assert_eq!(media_type_for(Path::new("a.txt")), "application/octet-stream");
        assert_eq!(media_type_for(Path::new("noext")), "application/octet-stream");
    }
}
