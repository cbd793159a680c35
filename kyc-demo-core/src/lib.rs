//! KYC Demo Core Library
//!
//! Shared logic for the KYC verification demo: the Aadhaar → PAN → Business
//! verification records, their persisted store, the step gating state
//! machine, the mock verification service and the completion certificate.

pub mod certificate;
pub mod config;
pub mod error;
pub mod flow;
pub mod models;
pub mod service;
pub mod storage;
pub mod store;
pub mod wizard;

pub use certificate::{Certificate, CERTIFICATE_FILE_NAME};
pub use config::{KycConfig, LatencyConfig};
pub use error::{KycError, KycResult};
pub use flow::{Entry, Progress, Route, Step};
pub use models::{
    AadhaarRecord, AadhaarUpdate, BusinessForm, BusinessRecord, BusinessUpdate, DocumentMeta,
    PanRecord, PanUpdate, VerificationResult, VerificationState,
};
pub use service::KycService;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use store::{VerificationStore, DEFAULT_STORAGE_KEY};
pub use wizard::{Navigation, Wizard};
