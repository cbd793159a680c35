//! Wizard controller
//!
//! [`Wizard`] owns the [`VerificationStore`] and the [`KycService`] and
//! exposes one method per step action. Every call re-reads the current
//! state before deciding anything, and every successful verification is
//! persisted before the method returns.
//!
//! Step actions take `&mut self`, so a wizard never has more than one
//! verification in flight.
//!
//! # Examples
//!
//! ```
//! use kyc_demo_core::{BusinessForm, DocumentMeta, KycConfig, Step, Wizard};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> kyc_demo_core::KycResult<()> {
//! let mut wizard = Wizard::in_memory(&KycConfig::instant());
//!
//! wizard.submit_aadhaar("123456789012").await?;
//! assert_eq!(wizard.next(Step::Aadhaar)?, Step::Pan);
//!
//! wizard.submit_pan("ABCDE1234F").await?;
//! wizard
//!     .upload_document(DocumentMeta::new("proof.pdf", 1_048_576, "application/pdf"))
//!     .await?;
//! wizard
//!     .submit_business(BusinessForm::new("Acme Co", "REG12345"))
//!     .await?;
//!
//! assert!(wizard.is_complete());
//! # Ok(())
//! # }
//! ```

use crate::certificate::Certificate;
use crate::config::KycConfig;
use crate::error::{KycError, KycResult};
use crate::flow::{self, Entry, Progress, Route, Step};
use crate::models::{
    AadhaarUpdate, BusinessForm, BusinessUpdate, DocumentMeta, PanUpdate, VerificationResult,
    VerificationState,
};
use crate::service::KycService;
use crate::storage::{FileStore, KeyValueStore, MemoryStore};
use crate::store::VerificationStore;
use chrono::NaiveDate;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Where a navigation request ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// The requested page renders
    Render(Step),
    /// An entry guard sent the user elsewhere
    Redirected { requested: Step, to: Step },
    /// No such route
    NotFound(String),
}

impl Navigation {
    /// Page that ends up on screen, if any
    pub fn step(&self) -> Option<Step> {
        match self {
            Navigation::Render(step) | Navigation::Redirected { to: step, .. } => Some(*step),
            Navigation::NotFound(_) => None,
        }
    }
}

pub struct Wizard {
    store: VerificationStore,
    service: KycService,
    /// Document accepted on the business step, not yet submitted
    pending_document: Option<DocumentMeta>,
}

impl Wizard {
    pub fn new(store: VerificationStore, service: KycService) -> Self {
        Self {
            store,
            service,
            pending_document: None,
        }
    }

    /// Wizard backed by `backend`, hydrated from whatever it holds
    pub fn with_backend(backend: Arc<dyn KeyValueStore>, config: &KycConfig) -> Self {
        let store = VerificationStore::load(backend, config.storage_key.clone());
        Self::new(store, KycService::new(config.latency))
    }

    /// Wizard persisting to JSON files in `storage_dir`
    pub fn open_dir(storage_dir: &Path, config: &KycConfig) -> Self {
        Self::with_backend(Arc::new(FileStore::new(storage_dir)), config)
    }

    /// Wizard whose progress lives only as long as the process
    pub fn in_memory(config: &KycConfig) -> Self {
        Self::with_backend(Arc::new(MemoryStore::new()), config)
    }

    pub fn state(&self) -> &VerificationState {
        self.store.state()
    }

    pub fn is_complete(&self) -> bool {
        self.store.is_complete()
    }

    pub fn progress(&self) -> Progress {
        flow::progress(self.state())
    }

    /// Step the index page sends the user to
    pub fn next_incomplete_step(&self) -> Step {
        flow::next_incomplete_step(self.state())
    }

    pub fn pending_document(&self) -> Option<&DocumentMeta> {
        self.pending_document.as_ref()
    }

    /// Navigate to a logical route, applying entry guards
    pub fn open(&self, route: &Route) -> Navigation {
        match route {
            Route::NotFound(path) => {
                debug!(path = %path, "route not found");
                Navigation::NotFound(path.clone())
            }
            Route::Page(requested) => {
                let to = flow::resolve(*requested, self.state());
                if to == *requested {
                    Navigation::Render(to)
                } else {
                    debug!(%requested, %to, "entry guard redirect");
                    Navigation::Redirected {
                        requested: *requested,
                        to,
                    }
                }
            }
        }
    }

    /// "Next" button on `from`
    pub fn next(&self, from: Step) -> KycResult<Step> {
        flow::advance(from, self.state())
    }

    /// Manual Aadhaar verification
    pub async fn submit_aadhaar(&mut self, number: &str) -> KycResult<VerificationResult> {
        if number.is_empty() {
            return Err(KycError::MissingInput(
                "Please enter your Aadhaar number".to_string(),
            ));
        }

        let result = self.service.verify_aadhaar(number).await;
        let result = accepted(result)?;
        self.store.update_aadhaar(AadhaarUpdate::manual(number))?;
        info!("aadhaar step verified");
        Ok(result)
    }

    /// Aadhaar verification through the DigiLocker flow
    pub async fn verify_with_digilocker(&mut self) -> KycResult<VerificationResult> {
        let result = accepted(self.service.verify_aadhaar_digilocker().await)?;
        self.store.update_aadhaar(AadhaarUpdate::digilocker())?;
        info!("aadhaar step verified via digilocker");
        Ok(result)
    }

    pub async fn submit_pan(&mut self, number: &str) -> KycResult<VerificationResult> {
        self.require_reachable(Step::Pan)?;
        if number.is_empty() {
            return Err(KycError::MissingInput(
                "Please enter your PAN number".to_string(),
            ));
        }

        let result = accepted(self.service.verify_pan(number).await)?;
        self.store.update_pan(PanUpdate::verified(number))?;
        info!("pan step verified");
        Ok(result)
    }

    /// Check a proof document and hold it for the business submission
    pub async fn upload_document(&mut self, document: DocumentMeta) -> KycResult<VerificationResult> {
        self.require_reachable(Step::Business)?;
        let result = accepted(self.service.upload_document(&document).await)?;
        debug!(name = %document.name, "document accepted");
        self.pending_document = Some(document);
        Ok(result)
    }

    pub async fn submit_business(&mut self, form: BusinessForm) -> KycResult<VerificationResult> {
        self.require_reachable(Step::Business)?;
        if form.name.is_empty() || form.registration_number.is_empty() {
            return Err(KycError::MissingInput(
                "Please fill in all required fields".to_string(),
            ));
        }
        let Some(document) = self.pending_document.clone() else {
            return Err(KycError::MissingInput(
                "Please upload a business proof document".to_string(),
            ));
        };

        let gstin = form.gstin().map(str::to_string);
        let result = accepted(
            self.service
                .verify_business(&form.name, &form.registration_number, gstin.as_deref())
                .await,
        )?;

        self.store.update_business(BusinessUpdate {
            name: Some(Some(form.name)),
            registration_number: Some(Some(form.registration_number)),
            gstin: Some(gstin),
            document_ref: Some(Some(document.name)),
            verified: Some(true),
        })?;
        info!("business step verified");
        Ok(result)
    }

    /// Certificate for the success page
    pub fn certificate(&self, date: NaiveDate) -> KycResult<Certificate> {
        Certificate::from_state(self.state(), date).ok_or_else(|| {
            let step = self.next_incomplete_step();
            KycError::gating(step, step.verification_required_notice())
        })
    }

    /// Clear everything and go back to the index page
    pub fn start_over(&mut self) -> KycResult<Step> {
        self.pending_document = None;
        self.store.reset()?;
        info!("verification state reset");
        Ok(Step::Start)
    }

    fn require_reachable(&self, step: Step) -> KycResult<()> {
        match flow::enter(step, self.state()) {
            Entry::Render => Ok(()),
            Entry::Redirect(_) => {
                let missing = self.next_incomplete_step();
                Err(KycError::gating(
                    missing,
                    missing.verification_required_notice(),
                ))
            }
        }
    }
}

fn accepted(result: VerificationResult) -> KycResult<VerificationResult> {
    if result.success {
        Ok(result)
    } else {
        Err(KycError::Validation(result.message))
    }
}
