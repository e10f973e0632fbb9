use serde::{Deserialize, Serialize};

use attesta_core::{Claim, CredentialData};

/// Input for one simulation run: the three actor names and the claim set
/// issued to the holder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Issuer display name.
    #[serde(default = "default_issuer_name")]
    pub issuer_name: String,
    /// Holder display name.
    #[serde(default = "default_holder_name")]
    pub holder_name: String,
    /// Verifier display name.
    #[serde(default = "default_verifier_name")]
    pub verifier_name: String,
    /// Claims issued to the holder.
    #[serde(default = "default_claims")]
    pub claims: Vec<Claim>,
}

impl Scenario {
    /// Claim set as credential data, insertion order preserved.
    pub fn credential_data(&self) -> CredentialData {
        let mut data = CredentialData::new();
        for claim in &self.claims {
            data.insert(claim.name.clone(), claim.value.clone());
        }
        data
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            issuer_name: default_issuer_name(),
            holder_name: default_holder_name(),
            verifier_name: default_verifier_name(),
            claims: default_claims(),
        }
    }
}

// Default value functions
fn default_issuer_name() -> String {
    "University of ABC".into()
}
fn default_holder_name() -> String {
    "Alice Johnson".into()
}
fn default_verifier_name() -> String {
    "Company XYZ".into()
}
fn default_claims() -> Vec<Claim> {
    vec![
        Claim::new("name", "Alice Johnson"),
        Claim::new("degree", "Bachelor of Science"),
        Claim::new("year", "2024"),
    ]
}
