use rand::RngCore;

use attesta_core::Did;
use attesta_crypto::Digest;
use attesta_identity::{generate_did, Presentation};

use crate::error::CredentialError;

/// Checks presented commitments against a reference digest.
pub struct Verifier {
    /// Display name of the verifying actor.
    name: String,
    /// DID assigned at construction.
    did: Did,
}

impl Verifier {
    /// Create a verifier with OS entropy.
    pub fn new(name: &str) -> Result<Self, CredentialError> {
        Self::with_rng(name, &mut rand::rngs::OsRng)
    }

    /// Create a verifier with an explicit entropy source.
    pub fn with_rng(name: &str, rng: &mut dyn RngCore) -> Result<Self, CredentialError> {
        let did = generate_did(name, rng)?;
        Ok(Self {
            name: name.to_string(),
            did,
        })
    }

    /// Display name of this verifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// DID of this verifier.
    pub fn did(&self) -> &Did {
        &self.did
    }

    /// True iff the presented commitment equals `reference`.
    ///
    /// Nothing else is checked: the disclosed claims are not re-hashed and
    /// the holder binding is not inspected, so this attests to digest
    /// transport integrity only. A mismatch is a normal `false`, not an
    /// error.
    pub fn verify(&self, presentation: &Presentation, reference: &Digest) -> bool {
        let valid = presentation.credential_hash == *reference;

        tracing::info!(
            verifier = %self.did,
            holder = %presentation.holder_did,
            valid,
            "presentation checked"
        );

        valid
    }
}
