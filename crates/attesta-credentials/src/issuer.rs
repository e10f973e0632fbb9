use std::sync::Arc;

use rand::RngCore;

use attesta_core::{Clock, CredentialData, Did, SystemClock};
use attesta_identity::{generate_did, Credential};

use crate::error::CredentialError;

/// Issues credentials bound to a holder DID.
///
/// Keeps no record of what it issued; every credential carries its own
/// commitment and leaves the issuer on return.
pub struct Issuer {
    /// Display name of the issuing actor.
    name: String,
    /// DID assigned at construction.
    did: Did,
    /// Timestamp source for issuance.
    clock: Arc<dyn Clock>,
}

impl Issuer {
    /// Create an issuer with OS entropy and the system clock.
    pub fn new(name: &str) -> Result<Self, CredentialError> {
        Self::with_sources(name, &mut rand::rngs::OsRng, Arc::new(SystemClock))
    }

    /// Create an issuer with explicit entropy and clock sources.
    pub fn with_sources(
        name: &str,
        rng: &mut dyn RngCore,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, CredentialError> {
        let did = generate_did(name, rng)?;
        Ok(Self {
            name: name.to_string(),
            did,
            clock,
        })
    }

    /// Display name of this issuer.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// DID of this issuer.
    pub fn did(&self) -> &Did {
        &self.did
    }

    /// Issue a credential for `holder` over the given claims.
    ///
    /// The returned credential's commitment is reproducible from its own
    /// non-digest fields; that reproducibility is the system's only
    /// integrity check.
    pub fn issue(
        &self,
        holder: &Did,
        data: CredentialData,
    ) -> Result<Credential, CredentialError> {
        let credential =
            Credential::new(self.did.clone(), holder.clone(), data, self.clock.now())?;

        tracing::info!(
            issuer = %self.did,
            holder = %holder,
            commitment = %credential.commitment,
            "credential issued"
        );

        Ok(credential)
    }
}
