use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use attesta_core::{CredentialData, Did};
use attesta_crypto::{commit, Digest};

use crate::error::IdentityError;

/// Fixed type tag carried by every issued credential.
pub const CREDENTIAL_TYPE: &str = "VerifiableCredential";

/// An issued credential binding a claim set to a holder DID.
///
/// Append-once record: the commitment is computed over every other field at
/// construction and no field changes afterwards. The serialized field names
/// are the interchange format and must not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    /// DID of the issuing actor.
    pub issuer: Did,
    /// DID of the receiving holder.
    pub holder: Did,
    /// Fixed type tag.
    #[serde(rename = "type")]
    pub credential_type: String,
    /// Claims carried by this credential.
    pub data: CredentialData,
    /// Issuance instant (UTC).
    pub issued_at: DateTime<Utc>,
    /// Commitment digest over all preceding fields.
    #[serde(rename = "proof")]
    pub commitment: Digest,
}

impl Credential {
    /// Build a credential and append its commitment.
    pub fn new(
        issuer: Did,
        holder: Did,
        data: CredentialData,
        issued_at: DateTime<Utc>,
    ) -> Result<Self, IdentityError> {
        let commitment = commit(&commitment_payload(
            &issuer,
            &holder,
            CREDENTIAL_TYPE,
            &data,
            &issued_at,
        ))?;
        Ok(Self {
            issuer,
            holder,
            credential_type: CREDENTIAL_TYPE.to_string(),
            data,
            issued_at,
            commitment,
        })
    }

    /// Recompute the commitment from the credential's non-digest fields.
    pub fn recompute_commitment(&self) -> Result<Digest, IdentityError> {
        Ok(commit(&commitment_payload(
            &self.issuer,
            &self.holder,
            &self.credential_type,
            &self.data,
            &self.issued_at,
        ))?)
    }

    /// Check that the stored commitment matches the credential's contents.
    pub fn verify_integrity(&self) -> bool {
        self.recompute_commitment()
            .map(|digest| digest == self.commitment)
            .unwrap_or(false)
    }
}

/// Canonical commitment payload: the credential's fields without the digest.
fn commitment_payload(
    issuer: &Did,
    holder: &Did,
    credential_type: &str,
    data: &CredentialData,
    issued_at: &DateTime<Utc>,
) -> serde_json::Value {
    serde_json::json!({
        "issuer": issuer,
        "holder": holder,
        "type": credential_type,
        "data": data,
        "issued_at": issued_at,
    })
}
