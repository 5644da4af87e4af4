// crates/arbor-core/src/address.rs
//
// Account addresses for the Arbor ledger.
//
// An address is an opaque 32-byte identifier. The all-zero value is the
// reserved "null address": it may never receive value or be granted a role.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

use crate::error::ArborError;

/// A participant on the Arbor ledger.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; 32]);

impl Address {
    /// The reserved null address (all zero bytes).
    pub const NULL: Address = Address([0u8; 32]);

    /// Wrap raw address bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Derive a deterministic address from a human-readable label.
    ///
    /// The address is the SHA-256 digest of the UTF-8 label. Handy for
    /// operators and tests that want to say `alice` instead of 64 hex chars.
    ///
    /// # Example
    /// ```
    /// use arbor_core::Address;
    /// let alice = Address::from_label("alice");
    /// assert_eq!(alice, Address::from_label("alice"));
    /// assert!(!alice.is_null());
    /// ```
    pub fn from_label(label: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(label.as_bytes());
        let digest = hasher.finalize();
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&digest);
        Self(bytes)
    }

    /// Raw address bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns true for the reserved null address.
    pub fn is_null(&self) -> bool {
        *self == Self::NULL
    }

    /// Lowercase hex encoding (64 chars, no prefix).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Abbreviated form for tables and log lines: `0x1a2b3c4d..`.
    pub fn short(&self) -> String {
        format!("0x{}..", &self.to_hex()[..8])
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.short())
    }
}

impl FromStr for Address {
    type Err = ArborError;

    /// Parse a 64-character hex string, with or without a `0x` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.strip_prefix("0x").unwrap_or(s);
        if trimmed.len() != 64 {
            return Err(ArborError::InvalidAddress(format!(
                "expected 64 hex characters, got {}",
                trimmed.len()
            )));
        }
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(trimmed, &mut bytes)
            .map_err(|e| ArborError::InvalidAddress(format!("{}: {}", s, e)))?;
        Ok(Self(bytes))
    }
}

// Addresses serialize as hex strings so they can key JSON objects.
impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AddressVisitor;

        impl Visitor<'_> for AddressVisitor {
            type Value = Address;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a 64-character hex address")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Address, E> {
                Address::from_str(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(AddressVisitor)
    }
}
