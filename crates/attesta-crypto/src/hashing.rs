use serde::Serialize;

use crate::digest::Digest;
use crate::error::CryptoError;

/// Serialize a record into its canonical byte form.
///
/// The record is first converted to a JSON value, whose object maps sort
/// keys lexicographically at every nesting level, then encoded compactly.
/// Field-for-field equal records produce identical bytes regardless of the
/// original key insertion order.
pub fn canonicalize<T: Serialize>(record: &T) -> Result<Vec<u8>, CryptoError> {
    let value = serde_json::to_value(record)?;
    Ok(serde_json::to_vec(&value)?)
}

/// Commit to a record: BLAKE3 over its canonical byte form.
pub fn commit<T: Serialize>(record: &T) -> Result<Digest, CryptoError> {
    let bytes = canonicalize(record)?;
    Ok(Digest::from_bytes(*blake3::hash(&bytes).as_bytes()))
}
