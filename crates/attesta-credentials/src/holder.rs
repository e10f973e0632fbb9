use rand::RngCore;

use attesta_core::Did;
use attesta_identity::{generate_did, Credential, Presentation};

use crate::error::CredentialError;

/// Stores received credentials and derives presentations from them.
pub struct Holder {
    /// Display name of the holding actor.
    name: String,
    /// DID assigned at construction.
    did: Did,
    /// Received credentials in arrival order.
    credentials: Vec<Credential>,
}

impl Holder {
    /// Create a holder with OS entropy.
    pub fn new(name: &str) -> Result<Self, CredentialError> {
        Self::with_rng(name, &mut rand::rngs::OsRng)
    }

    /// Create a holder with an explicit entropy source.
    pub fn with_rng(name: &str, rng: &mut dyn RngCore) -> Result<Self, CredentialError> {
        let did = generate_did(name, rng)?;
        Ok(Self {
            name: name.to_string(),
            did,
            credentials: Vec::new(),
        })
    }

    /// Display name of this holder.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// DID of this holder.
    pub fn did(&self) -> &Did {
        &self.did
    }

    /// Store a credential at the end of the sequence.
    ///
    /// The incoming digest is not checked here; a caller that wants to fail
    /// fast on tampered input can run `Credential::verify_integrity` first.
    pub fn receive(&mut self, credential: Credential) {
        tracing::debug!(
            holder = %self.did,
            issuer = %credential.issuer,
            position = self.credentials.len(),
            "credential stored"
        );
        self.credentials.push(credential);
    }

    /// Present the stored credential at `index` (0 = first received).
    pub fn present(&self, index: usize) -> Result<Presentation, CredentialError> {
        let credential =
            self.credentials
                .get(index)
                .ok_or(CredentialError::InvalidIndex {
                    index,
                    count: self.credentials.len(),
                })?;

        tracing::debug!(
            holder = %self.did,
            commitment = %credential.commitment,
            "presentation derived"
        );

        Ok(Presentation::from_credential(self.did.clone(), credential))
    }

    /// Stored credential at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Credential> {
        self.credentials.get(index)
    }

    /// All stored credentials in arrival order.
    pub fn credentials(&self) -> &[Credential] {
        &self.credentials
    }

    /// Number of stored credentials.
    pub fn count(&self) -> usize {
        self.credentials.len()
    }

    /// Whether nothing has been received yet.
    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }
}
