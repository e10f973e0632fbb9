pub mod digest;
pub mod error;
pub mod hashing;

pub use digest::Digest;
pub use error::CryptoError;
pub use hashing::{canonicalize, commit};
