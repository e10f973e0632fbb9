/// Simulation driver errors.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("credential error: {0}")]
    Credential(#[from] attesta_credentials::CredentialError),
}
