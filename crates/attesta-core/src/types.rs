use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

/// Decentralized Identifier (DID) naming an actor instance.
/// Format: `did:attesta:<tag>:<slug>`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Did(pub String);

impl Did {
    /// Create a DID from a full URI string.
    pub fn new(uri: String) -> Result<Self, CoreError> {
        if !uri.starts_with("did:attesta:") {
            return Err(CoreError::InvalidDid(format!(
                "DID must start with 'did:attesta:', got: {}",
                uri
            )));
        }
        let parts: Vec<&str> = uri.split(':').collect();
        if parts.len() < 4 {
            return Err(CoreError::InvalidDid(format!(
                "DID must have format 'did:attesta:<tag>:<slug>', got: {}",
                uri
            )));
        }
        Ok(Self(uri))
    }

    /// Create a DID from tag and slug components.
    pub fn from_parts(tag: &str, slug: &str) -> Self {
        Self(format!("did:attesta:{}:{}", tag, slug))
    }

    /// Get the full DID URI.
    pub fn uri(&self) -> &str {
        &self.0
    }

    /// Extract the random tag component.
    pub fn tag(&self) -> Option<&str> {
        self.0.split(':').nth(2)
    }

    /// Extract the name slug.
    pub fn slug(&self) -> Option<&str> {
        let parts: Vec<&str> = self.0.splitn(4, ':').collect();
        parts.get(3).copied()
    }
}

impl fmt::Display for Did {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single claim (name-value pair) carried by a credential.
///
/// Claims are string-valued; richer value types are unrepresentable here by
/// design, so a malformed claim payload cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Claim name (e.g., "degree", "year").
    pub name: String,
    /// Claim value.
    pub value: String,
}

impl Claim {
    /// Create a claim.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Claim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// The claim set issued inside a credential.
///
/// Behaves like a map (inserting an existing name replaces its value in
/// place) but keeps first-insertion order for display and wire output.
/// Serializes as a JSON object in that order; the commitment over a
/// credential is order-independent regardless (see `attesta-crypto`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CredentialData {
    claims: Vec<Claim>,
}

impl CredentialData {
    /// Create an empty claim set.
    pub fn new() -> Self {
        Self { claims: Vec::new() }
    }

    /// Build a claim set from (name, value) pairs, in order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut data = Self::new();
        for (name, value) in pairs {
            data.insert(name, value);
        }
        data
    }

    /// Insert a claim; an existing name keeps its position, value replaced.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.claims.iter_mut().find(|c| c.name == name) {
            Some(claim) => claim.value = value,
            None => self.claims.push(Claim { name, value }),
        }
    }

    /// Value of the named claim, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.claims
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.value.as_str())
    }

    /// Claims in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Claim> {
        self.claims.iter()
    }

    /// All claim names in insertion order.
    pub fn claim_names(&self) -> Vec<&str> {
        self.claims.iter().map(|c| c.name.as_str()).collect()
    }

    /// Number of claims.
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    /// Whether the claim set is empty.
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }
}

impl Serialize for CredentialData {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.claims.len()))?;
        for claim in &self.claims {
            map.serialize_entry(&claim.name, &claim.value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CredentialData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct ClaimsVisitor;

        impl<'de> serde::de::Visitor<'de> for ClaimsVisitor {
            type Value = CredentialData;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of claim names to string values")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut data = CredentialData::new();
                while let Some((name, value)) = access.next_entry::<String, String>()? {
                    data.insert(name, value);
                }
                Ok(data)
            }
        }

        deserializer.deserialize_map(ClaimsVisitor)
    }
}
