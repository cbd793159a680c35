//! Property-based tests for kyc-demo-core

use kyc_demo_core::models::{AadhaarUpdate, BusinessUpdate, PanUpdate};
use kyc_demo_core::service::{
    validate_aadhaar, validate_business, validate_document, validate_pan, MAX_DOCUMENT_BYTES,
};
use kyc_demo_core::{
    DocumentMeta, KeyValueStore, MemoryStore, VerificationState, VerificationStore,
    DEFAULT_STORAGE_KEY,
};
use proptest::prelude::*;
use std::sync::Arc;

proptest! {
    /// Test that every 12-digit string is a valid Aadhaar number
    #[test]
    fn test_twelve_digits_always_accepted(number in "[0-9]{12}") {
        prop_assert!(validate_aadhaar(&number).is_ok());
    }

    /// Test that digit strings of any other length are rejected
    #[test]
    fn test_wrong_length_aadhaar_rejected(number in "[0-9]{0,30}") {
        prop_assume!(number.len() != 12);
        let err = validate_aadhaar(&number).unwrap_err();
        prop_assert!(err.to_string().contains("12 digits"));
    }

    /// Test that a single non-digit anywhere fails the check
    #[test]
    fn test_non_digit_aadhaar_rejected(
        prefix in "[0-9]{0,11}",
        bad in "[^0-9]",
    ) {
        let mut number = prefix.clone();
        number.push_str(&bad);
        while number.chars().count() < 12 {
            number.push('1');
        }
        prop_assert!(validate_aadhaar(&number).is_err());
    }

    /// Test that every string of the PAN shape is accepted
    #[test]
    fn test_pan_pattern_accepted(pan in "[A-Z]{5}[0-9]{4}[A-Z]") {
        prop_assert!(validate_pan(&pan).is_ok());
    }

    /// Test that lowercasing a valid PAN makes it invalid
    #[test]
    fn test_lowercase_pan_rejected(pan in "[A-Z]{5}[0-9]{4}[A-Z]") {
        prop_assert!(validate_pan(&pan.to_lowercase()).is_err());
    }

    /// Test that strings outside the PAN shape are rejected
    #[test]
    fn test_arbitrary_pan_matches_pattern_or_fails(candidate in "\\PC{0,12}") {
        let shaped = candidate.len() == 10
            && candidate.chars().take(5).all(|c| c.is_ascii_uppercase())
            && candidate.chars().skip(5).take(4).all(|c| c.is_ascii_digit())
            && candidate.chars().nth(9).is_some_and(|c| c.is_ascii_uppercase());
        prop_assert_eq!(validate_pan(&candidate).is_ok(), shaped);
    }

    /// Test the business rule on name and registration lengths
    #[test]
    fn test_business_length_rule(
        name in "[a-zA-Z ]{0,8}",
        registration in "[A-Z0-9]{0,8}",
    ) {
        let expected = name.chars().count() >= 3 && registration.chars().count() >= 5;
        prop_assert_eq!(validate_business(&name, &registration, None).is_ok(), expected);
    }

    /// Test that well-formed GSTINs never block an otherwise valid business
    #[test]
    fn test_valid_gstin_accepted(
        gstin in "[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][1-9A-Z]Z[0-9A-Z]"
    ) {
        prop_assert!(validate_business("Acme Co", "REG12345", Some(&gstin)).is_ok());
    }

    /// Test that size and media type are checked independently
    #[test]
    fn test_document_rules_independent(
        size in 0u64..(2 * MAX_DOCUMENT_BYTES),
        media_type in prop::sample::select(vec![
            "application/pdf", "image/jpeg", "image/png", "image/jpg",
            "text/plain", "application/zip", "image/gif",
        ]),
    ) {
        let document = DocumentMeta::new("doc", size, media_type);
        let size_ok = size <= MAX_DOCUMENT_BYTES;
        let type_ok = !matches!(media_type, "text/plain" | "application/zip" | "image/gif");
        prop_assert_eq!(validate_document(&document).is_ok(), size_ok && type_ok);
    }

    /// Test that load after any sequence of updates restores the last values
    #[test]
    fn test_store_roundtrip(updates in prop::collection::vec(update_strategy(), 0..12)) {
        let backend: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let mut store = VerificationStore::load(backend.clone(), DEFAULT_STORAGE_KEY);
        let mut expected = VerificationState::default();

        for update in updates {
            match update {
                Update::Aadhaar(update) => {
                    expected.aadhaar.merge(update.clone());
                    store.update_aadhaar(update).unwrap();
                }
                Update::Pan(update) => {
                    expected.pan.merge(update.clone());
                    store.update_pan(update).unwrap();
                }
                Update::Business(update) => {
                    expected.business.merge(update.clone());
                    store.update_business(update).unwrap();
                }
            }
        }

        let reloaded = VerificationStore::load(backend, DEFAULT_STORAGE_KEY);
        prop_assert_eq!(store.state(), &expected);
        prop_assert_eq!(reloaded.state(), &expected);
    }

    /// Test that arbitrary garbage in storage never breaks loading
    #[test]
    fn test_garbage_snapshot_loads_default(garbage in "\\PC{0,64}") {
        prop_assume!(serde_json::from_str::<serde_json::Value>(&garbage).is_err());
        let backend: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        backend.set(DEFAULT_STORAGE_KEY, &garbage).unwrap();

        let store = VerificationStore::load(backend, DEFAULT_STORAGE_KEY);
        prop_assert_eq!(store.state(), &VerificationState::default());
    }
}

#[derive(Debug, Clone)]
enum Update {
    Aadhaar(AadhaarUpdate),
    Pan(PanUpdate),
    Business(BusinessUpdate),
}

/// Touch-or-leave for a nullable text field: leave, clear, or set
fn field_strategy(value: &'static str) -> impl Strategy<Value = Option<Option<String>>> {
    proptest::option::of(proptest::option::of(value))
}

fn update_strategy() -> impl Strategy<Value = Update> {
    let aadhaar = (
        field_strategy("[0-9]{12}"),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(|(number, verified, via_digilocker)| {
            Update::Aadhaar(AadhaarUpdate {
                number,
                verified,
                via_digilocker,
            })
        });
    let pan = (
        field_strategy("[A-Z]{5}[0-9]{4}[A-Z]"),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(|(number, verified)| Update::Pan(PanUpdate { number, verified }));
    let business = (
        field_strategy("[A-Za-z ]{3,20}"),
        field_strategy("[A-Z0-9]{5,12}"),
        field_strategy("[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][1-9A-Z]Z[0-9A-Z]"),
        field_strategy("[a-z]{1,8}\\.(pdf|png|jpg)"),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(|(name, registration_number, gstin, document_ref, verified)| {
            Update::Business(BusinessUpdate {
                name,
                registration_number,
                gstin,
                document_ref,
                verified,
            })
        });

    prop_oneof![aadhaar, pan, business]
}
