/// Credential exchange errors.
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("no credential stored at index {index} ({count} held)")]
    InvalidIndex { index: usize, count: usize },

    #[error("identity error: {0}")]
    Identity(#[from] attesta_identity::IdentityError),
}
