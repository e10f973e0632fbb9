use serde::{Deserialize, Serialize};

use attesta_core::{CredentialData, Did};
use attesta_crypto::Digest;

use crate::credential::Credential;

/// Disclosure bundle a holder presents to a verifier.
///
/// Carries the stored credential's commitment and the full claim set. No
/// field-level redaction happens; the wire name `selective_disclosure` is
/// kept only for interchange compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presentation {
    /// DID of the presenting holder.
    pub holder_did: Did,
    /// Commitment digest copied from the presented credential.
    pub credential_hash: Digest,
    /// Disclosed claims (the full payload).
    #[serde(rename = "selective_disclosure")]
    pub disclosed: CredentialData,
}

impl Presentation {
    /// Derive a presentation of `credential` by the given holder.
    pub fn from_credential(holder_did: Did, credential: &Credential) -> Self {
        Self {
            holder_did,
            credential_hash: credential.commitment,
            disclosed: credential.data.clone(),
        }
    }
}
