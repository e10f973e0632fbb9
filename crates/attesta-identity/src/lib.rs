//! Attesta Identity Layer
//!
//! Identity primitives for the credential exchange:
//! - DID generation with injectable entropy
//! - Credential records carrying an append-once hash commitment
//! - Disclosure presentations derived from stored credentials

pub mod credential;
pub mod did;
pub mod error;
pub mod presentation;

pub use credential::{Credential, CREDENTIAL_TYPE};
pub use did::{generate_did, random_did};
pub use error::IdentityError;
pub use presentation::Presentation;
