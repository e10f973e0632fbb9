/// Identity layer errors.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("actor name is empty or whitespace-only")]
    EmptyName,

    #[error("crypto error: {0}")]
    Crypto(#[from] attesta_crypto::CryptoError),
}
