/// Errors from canonicalization and digest handling.
#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid digest: {0}")]
    InvalidDigest(String),
}
