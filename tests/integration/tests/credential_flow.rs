//! Integration test: Full credential lifecycle across crates.
//!
//! Exercises the issuer → holder → verifier flow using attesta-credentials,
//! attesta-identity, and attesta-crypto together.

use attesta_core::CredentialData;
use attesta_credentials::{CredentialError, Holder, Issuer, Verifier};
use attesta_crypto::Digest;
use attesta_identity::Credential;

/// Helper: the three actors of one exchange.
fn create_actors() -> (Issuer, Holder, Verifier) {
    let issuer = Issuer::new("University of ABC").expect("issuer");
    let holder = Holder::new("Alice Johnson").expect("holder");
    let verifier = Verifier::new("Company XYZ").expect("verifier");
    (issuer, holder, verifier)
}

fn degree_claims() -> CredentialData {
    CredentialData::from_pairs([
        ("name", "Alice Johnson"),
        ("degree", "Bachelor of Science"),
        ("year", "2024"),
    ])
}

/// Flip the first hex character of a digest.
fn flipped(digest: &Digest) -> Digest {
    let mut hex = digest.to_hex();
    let replacement = if hex.starts_with('0') { "1" } else { "0" };
    hex.replace_range(0..1, replacement);
    Digest::from_hex(&hex).unwrap()
}

// =========================================================================
// Two-party flow: Issuer → Holder
// =========================================================================

#[test]
fn test_issue_store_and_retrieve() {
    let (issuer, mut holder, _verifier) = create_actors();

    let credential = issuer
        .issue(holder.did(), degree_claims())
        .expect("issuance should succeed");

    assert_eq!(&credential.issuer, issuer.did());
    assert_eq!(&credential.holder, holder.did());
    assert!(credential.verify_integrity());

    holder.receive(credential.clone());
    assert_eq!(holder.count(), 1);

    let stored = holder.get(0).expect("should find credential");
    assert_eq!(stored, &credential);
}

#[test]
fn test_holder_stores_credentials_in_arrival_order() {
    let (issuer, mut holder, _verifier) = create_actors();

    for year in ["2022", "2023", "2024"] {
        let credential = issuer
            .issue(
                holder.did(),
                CredentialData::from_pairs([("degree", "BSc"), ("year", year)]),
            )
            .unwrap();
        holder.receive(credential);
    }

    assert_eq!(holder.count(), 3);
    assert_eq!(holder.get(0).unwrap().data.get("year"), Some("2022"));
    assert_eq!(holder.get(2).unwrap().data.get("year"), Some("2024"));
}

// =========================================================================
// Three-party flow: Issuer → Holder → Verifier
// =========================================================================

#[test]
fn test_full_roundtrip_verification() {
    let (issuer, mut holder, verifier) = create_actors();

    // Step 1: Issuer issues a credential to the holder
    let credential = issuer.issue(holder.did(), degree_claims()).unwrap();

    // Step 2: Holder stores it
    holder.receive(credential.clone());

    // Step 3: Holder presents the first stored credential
    let presentation = holder.present(0).unwrap();
    assert_eq!(&presentation.holder_did, holder.did());

    // Step 4: Verifier checks against the original commitment
    assert!(verifier.verify(&presentation, &credential.commitment));
}

#[test]
fn test_verification_fails_for_tampered_hash() {
    let (issuer, mut holder, verifier) = create_actors();
    let credential = issuer.issue(holder.did(), degree_claims()).unwrap();
    holder.receive(credential.clone());

    let mut presentation = holder.present(0).unwrap();
    presentation.credential_hash = flipped(&presentation.credential_hash);

    assert!(!verifier.verify(&presentation, &credential.commitment));
}

#[test]
fn test_verification_fails_against_different_reference() {
    let (issuer, mut holder, verifier) = create_actors();
    let credential = issuer.issue(holder.did(), degree_claims()).unwrap();
    holder.receive(credential);

    let presentation = holder.present(0).unwrap();
    let unrelated = Digest::from_hex(&"42".repeat(32)).unwrap();

    assert!(!verifier.verify(&presentation, &unrelated));
}

#[test]
fn test_presentation_by_index_selects_credential() {
    let (issuer, mut holder, verifier) = create_actors();

    let first = issuer
        .issue(
            holder.did(),
            CredentialData::from_pairs([("degree", "BSc"), ("year", "2022")]),
        )
        .unwrap();
    let second = issuer
        .issue(
            holder.did(),
            CredentialData::from_pairs([("degree", "MSc"), ("year", "2024")]),
        )
        .unwrap();
    holder.receive(first.clone());
    holder.receive(second.clone());

    let presentation = holder.present(1).unwrap();
    assert_eq!(presentation.credential_hash, second.commitment);
    assert!(verifier.verify(&presentation, &second.commitment));
    assert!(!verifier.verify(&presentation, &first.commitment));
}

#[test]
fn test_present_out_of_range_is_an_error() {
    let (issuer, mut holder, _verifier) = create_actors();

    assert!(matches!(
        holder.present(0),
        Err(CredentialError::InvalidIndex { index: 0, count: 0 })
    ));

    let credential = issuer.issue(holder.did(), degree_claims()).unwrap();
    holder.receive(credential);

    assert!(matches!(
        holder.present(5),
        Err(CredentialError::InvalidIndex { index: 5, count: 1 })
    ));
}

// =========================================================================
// Documented gaps of the scheme
// =========================================================================

#[test]
fn test_receive_does_not_validate_incoming_digest() {
    let (issuer, mut holder, _verifier) = create_actors();
    let mut credential = issuer.issue(holder.did(), degree_claims()).unwrap();

    // Tamper after issuance; ingestion still accepts the record.
    credential.data = CredentialData::from_pairs([("degree", "Doctor of Philosophy")]);
    assert!(!credential.verify_integrity());

    holder.receive(credential);
    assert_eq!(holder.count(), 1);
    assert!(!holder.get(0).unwrap().verify_integrity());
}

#[test]
fn test_verifier_trusts_disclosed_data() {
    // The verifier never re-hashes the disclosed claims, so a forged
    // payload with an intact commitment still verifies.
    let (issuer, mut holder, verifier) = create_actors();
    let credential = issuer.issue(holder.did(), degree_claims()).unwrap();
    holder.receive(credential.clone());

    let mut presentation = holder.present(0).unwrap();
    presentation.disclosed = CredentialData::from_pairs([("degree", "Forged Degree")]);

    assert!(verifier.verify(&presentation, &credential.commitment));
}

// =========================================================================
// Interchange format
// =========================================================================

#[test]
fn test_credential_wire_field_names() {
    let (issuer, holder, _verifier) = create_actors();
    let credential = issuer.issue(holder.did(), degree_claims()).unwrap();

    let value = serde_json::to_value(&credential).unwrap();
    let keys: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(|k| k.as_str())
        .collect();
    assert_eq!(
        keys,
        vec!["data", "holder", "issued_at", "issuer", "proof", "type"]
    );
    assert_eq!(value["type"], "VerifiableCredential");
}

#[test]
fn test_presentation_wire_field_names() {
    let (issuer, mut holder, _verifier) = create_actors();
    let credential = issuer.issue(holder.did(), degree_claims()).unwrap();
    holder.receive(credential);

    let presentation = holder.present(0).unwrap();
    let value = serde_json::to_value(&presentation).unwrap();
    let keys: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(|k| k.as_str())
        .collect();
    assert_eq!(
        keys,
        vec!["credential_hash", "holder_did", "selective_disclosure"]
    );
}

#[test]
fn test_credential_json_roundtrip_still_verifies() {
    let (issuer, mut holder, verifier) = create_actors();
    let credential = issuer.issue(holder.did(), degree_claims()).unwrap();

    let json = serde_json::to_string(&credential).unwrap();
    let deserialized: Credential = serde_json::from_str(&json).unwrap();
    assert!(deserialized.verify_integrity());

    holder.receive(deserialized);
    let presentation = holder.present(0).unwrap();
    assert!(verifier.verify(&presentation, &credential.commitment));
}
