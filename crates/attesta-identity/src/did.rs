use rand::RngCore;

use attesta_core::Did;

use crate::error::IdentityError;

/// Generate a DID for an actor display name using the given entropy source.
///
/// The name is normalized (lowercased, whitespace removed) into the DID
/// slug; a 64-bit random tag keeps identifiers distinct even for actors
/// sharing a display name. Empty and whitespace-only names are rejected.
pub fn generate_did(name: &str, rng: &mut dyn RngCore) -> Result<Did, IdentityError> {
    let slug = normalize(name);
    if slug.is_empty() {
        return Err(IdentityError::EmptyName);
    }
    let tag = rng.next_u64();
    Ok(Did::from_parts(&format!("{:016x}", tag), &slug))
}

/// Generate a DID from the operating system's entropy source.
pub fn random_did(name: &str) -> Result<Did, IdentityError> {
    generate_did(name, &mut rand::rngs::OsRng)
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
