//! Verification state store
//!
//! Owns the [`VerificationState`] and writes the full snapshot to a
//! [`KeyValueStore`] after every mutation. A missing or unreadable snapshot
//! loads as the default state; a malformed record loads as that record's
//! default while the others are kept.

use crate::error::{KycError, KycResult};
use crate::models::{AadhaarUpdate, BusinessUpdate, PanUpdate, VerificationState};
use crate::storage::KeyValueStore;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, warn};

/// Storage key the snapshot is persisted under
pub const DEFAULT_STORAGE_KEY: &str = "kycData";

/// Holds the verification records and persists them on every change
pub struct VerificationStore {
    backend: Arc<dyn KeyValueStore>,
    key: String,
    state: VerificationState,
}

impl VerificationStore {
    /// Load the store from `backend`, falling back to defaults
    ///
    /// Absent and unparseable snapshots produce the default state. Records
    /// are decoded one by one, so a `null` or mistyped record only resets
    /// itself. Malformed data is logged, never returned as an error.
    pub fn load(backend: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let state = match read_snapshot(backend.as_ref(), &key) {
            Ok(Some(state)) => {
                debug!(key = %key, "restored verification state");
                state
            }
            Ok(None) => VerificationState::default(),
            Err(e) => {
                warn!(key = %key, error = %e, "discarding persisted verification state");
                VerificationState::default()
            }
        };

        Self {
            backend,
            key,
            state,
        }
    }

    /// Current verification state
    pub fn state(&self) -> &VerificationState {
        &self.state
    }

    /// Storage key this store persists under
    pub fn key(&self) -> &str {
        &self.key
    }

    /// All three steps verified
    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    pub fn update_aadhaar(&mut self, update: AadhaarUpdate) -> KycResult<()> {
        debug!(?update, "updating aadhaar record");
        self.state.aadhaar.merge(update);
        self.save()
    }

    pub fn update_pan(&mut self, update: PanUpdate) -> KycResult<()> {
        debug!(?update, "updating pan record");
        self.state.pan.merge(update);
        self.save()
    }

    pub fn update_business(&mut self, update: BusinessUpdate) -> KycResult<()> {
        debug!(?update, "updating business record");
        self.state.business.merge(update);
        self.save()
    }

    /// Restore default records and drop the persisted snapshot
    pub fn reset(&mut self) -> KycResult<()> {
        debug!(key = %self.key, "resetting verification state");
        self.backend.remove(&self.key)?;
        self.state = VerificationState::default();
        Ok(())
    }

    /// Write the full snapshot to the backend
    pub fn save(&self) -> KycResult<()> {
        let json = serde_json::to_string_pretty(&self.state)?;
        self.backend.set(&self.key, &json)
    }
}

fn read_snapshot(backend: &dyn KeyValueStore, key: &str) -> KycResult<Option<VerificationState>> {
    let Some(json) = backend.get(key)? else {
        return Ok(None);
    };
    let value: Value =
        serde_json::from_str(&json).map_err(|e| KycError::PersistenceRead(e.to_string()))?;
    let Value::Object(mut records) = value else {
        return Err(KycError::PersistenceRead(
            "snapshot is not a JSON object".to_string(),
        ));
    };

    Ok(Some(VerificationState {
        aadhaar: record(&mut records, "aadhaar"),
        pan: record(&mut records, "pan"),
        business: record(&mut records, "business"),
    }))
}

/// Decode one record, keeping its default when it is absent or malformed
fn record<T: DeserializeOwned + Default>(records: &mut Map<String, Value>, name: &str) -> T {
    match records.remove(name) {
        None => T::default(),
        Some(value) => serde_json::from_value(value).unwrap_or_else(|e| {
            warn!(record = name, error = %e, "discarding malformed record");
            T::default()
        }),
    }
}
