//! Attesta Credentials — the three exchange actors: issuer, holder, and
//! verifier.

pub mod error;
pub mod holder;
pub mod issuer;
pub mod verifier;

pub use error::CredentialError;
pub use holder::Holder;
pub use issuer::Issuer;
pub use verifier::Verifier;
