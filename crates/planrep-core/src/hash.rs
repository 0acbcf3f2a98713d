//! Plan fingerprints.
//!
//! A fingerprint is the blake3 digest of a value's JSON encoding. Explain
//! output is compared by fingerprint, so any ordered container works; map
//! fields need a deterministic order (`BTreeMap`).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Hex digits shown by [`Hash256::short`].
const SHORT_HEX_LEN: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hash256(pub [u8; 32]);

impl Hash256 {
    pub fn of_bytes(bytes: &[u8]) -> Self {
        Self(*blake3::hash(bytes).as_bytes())
    }

    pub fn of_serde<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        let encoded = serde_json::to_vec(value).map_err(|e| Error::Hash(e.to_string()))?;
        Ok(Self::of_bytes(&encoded))
    }

    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Abbreviated form for plan headers, like a short commit id.
    pub fn short(&self) -> String {
        let mut hex = self.to_hex();
        hex.truncate(SHORT_HEX_LEN);
        hex
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
