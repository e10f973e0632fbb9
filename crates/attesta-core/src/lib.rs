//! Attesta Core — Fundamental types, errors, and the clock abstraction for
//! the Attesta credential exchange simulator.

pub mod clock;
pub mod error;
pub mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::CoreError;
pub use types::{Claim, CredentialData, Did};
