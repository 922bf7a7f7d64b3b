//! pbxproj object identifiers.
//!
//! Xcode keys every record in a `project.pbxproj` with 24 hexadecimal
//! characters (96 bits). Xcode derives them from hashed GUID material; for
//! newly added records any unique value works, so fresh identifiers are
//! minted from random UUID bytes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::PatchError;

/// Raw length of an identifier in bytes; 24 hex characters.
const ID_LEN: usize = 12;

/// A 24-hex-digit identifier keying one pbxproj record.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId([u8; ID_LEN]);

impl ObjectId {
    /// Mint a fresh identifier from random UUID material.
    pub fn generate() -> Self {
        let uuid = Uuid::new_v4();
        let mut bytes = [0u8; ID_LEN];
        bytes.copy_from_slice(&uuid.as_bytes()[..ID_LEN]);
        Self(bytes)
    }

    /// Parse from a hex string. Accepts either case; 24 characters required.
    pub fn from_hex(s: &str) -> Result<Self, PatchError> {
        let bytes = hex::decode(s).map_err(|e| PatchError::InvalidHex(e.to_string()))?;
        if bytes.len() != ID_LEN {
            return Err(PatchError::InvalidLength {
                expected: ID_LEN * 2,
                actual: s.len(),
            });
        }
        let mut arr = [0u8; ID_LEN];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// The 24-character uppercase form used verbatim inside project files.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0)
    }

    /// The raw 12 bytes.
    pub fn as_bytes(&self) -> &[u8; ID_LEN] {
        &self.0
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({})", self.to_hex())
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for ObjectId {
    type Err = PatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}
