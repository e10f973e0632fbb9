use std::sync::Arc;

use rand::RngCore;
use serde::Serialize;

use attesta_core::{Clock, Did, SystemClock};
use attesta_credentials::{Holder, Issuer, Verifier};
use attesta_identity::{Credential, Presentation};

use crate::error::SimError;
use crate::scenario::Scenario;

/// Everything one run produces, handed to the presentation layer as-is.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    /// DID of the issuing actor.
    pub issuer_did: Did,
    /// DID of the holding actor.
    pub holder_did: Did,
    /// DID of the verifying actor.
    pub verifier_did: Did,
    /// The issued credential.
    pub credential: Credential,
    /// The presentation derived from the stored credential.
    pub presentation: Presentation,
    /// Outcome of the digest check.
    pub valid: bool,
}

/// Run one exchange with OS entropy and the system clock.
pub fn run(scenario: &Scenario) -> Result<SimulationReport, SimError> {
    run_with_sources(scenario, &mut rand::rngs::OsRng, Arc::new(SystemClock))
}

/// Run one exchange with explicit entropy and clock sources.
///
/// The sequence is fixed and single-pass: construct the three actors, issue,
/// store, present the first stored credential, and verify it against the
/// original credential's commitment (the reference digest travels outside
/// the presentation channel).
pub fn run_with_sources(
    scenario: &Scenario,
    rng: &mut dyn RngCore,
    clock: Arc<dyn Clock>,
) -> Result<SimulationReport, SimError> {
    let issuer = Issuer::with_sources(&scenario.issuer_name, rng, clock)?;
    let mut holder = Holder::with_rng(&scenario.holder_name, rng)?;
    let verifier = Verifier::with_rng(&scenario.verifier_name, rng)?;

    tracing::info!(
        issuer = %issuer.did(),
        holder = %holder.did(),
        verifier = %verifier.did(),
        "actors created"
    );

    let credential = issuer.issue(holder.did(), scenario.credential_data())?;
    holder.receive(credential.clone());

    let presentation = holder.present(0)?;
    let valid = verifier.verify(&presentation, &credential.commitment);

    tracing::info!(valid, "exchange complete");

    Ok(SimulationReport {
        issuer_did: issuer.did().clone(),
        holder_did: holder.did().clone(),
        verifier_did: verifier.did().clone(),
        credential,
        presentation,
        valid,
    })
}
