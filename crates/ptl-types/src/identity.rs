use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Material used to derive a [`PrincipalId`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrincipalMaterial {
    /// A standard principal backed by an ed25519 public key (32 bytes).
    PublicKey([u8; 32]),
    /// A contract principal: a named contract under a deployer principal.
    Contract { deployer: [u8; 32], name: String },
}

/// Opaque comparable identity for any actor touching the ledger.
///
/// A `PrincipalId` is derived deterministically from [`PrincipalMaterial`]
/// using BLAKE3. The same material always produces the same identity, and
/// equality is byte equality on the derived hash, never on a string
/// encoding. Owners, verifiers, and the authority are all `PrincipalId`s.
///
/// The all-zero value is reserved as the burn principal ([`Self::burn`]):
/// it can never be derived from material and is never a valid owner or
/// authority.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PrincipalId {
    hash: [u8; 32],
}

impl PrincipalId {
    /// Derive a `PrincipalId` from principal material.
    pub fn derive(material: &PrincipalMaterial) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(b"ptl-principal-v1:");
        match material {
            PrincipalMaterial::PublicKey(pk) => {
                hasher.update(b"pubkey:");
                hasher.update(pk);
            }
            PrincipalMaterial::Contract { deployer, name } => {
                hasher.update(b"contract:");
                hasher.update(deployer);
                hasher.update(b":");
                hasher.update(name.as_bytes());
            }
        }
        Self {
            hash: *hasher.finalize().as_bytes(),
        }
    }

    /// Create an ephemeral (random) principal for tests and demos.
    pub fn ephemeral() -> Self {
        let mut bytes = [0u8; 32];
        rand::Rng::fill(&mut rand::thread_rng(), &mut bytes);
        Self::derive(&PrincipalMaterial::PublicKey(bytes))
    }

    /// The reserved burn principal (all zeros). Never a valid owner.
    pub const fn burn() -> Self {
        Self { hash: [0u8; 32] }
    }

    /// Returns `true` if this is the reserved burn principal.
    pub fn is_burn(&self) -> bool {
        self.hash == [0u8; 32]
    }

    /// The raw 32-byte hash.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.hash
    }

    /// Full hex-encoded string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.hash)
    }

    /// Short identifier (first 8 hex characters).
    pub fn short_id(&self) -> String {
        format!("pr:{}", hex::encode(&self.hash[..4]))
    }

    /// Parse from a hex string (64 hex characters).
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let s = s.strip_prefix("pr:").unwrap_or(s);
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        if bytes.len() != 32 {
            return Err(TypeError::InvalidLength {
                expected: 32,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self { hash: arr })
    }

    /// Create from a raw 32-byte hash. Use `derive()` for production code.
    pub fn from_raw(hash: [u8; 32]) -> Self {
        Self { hash }
    }
}

impl fmt::Debug for PrincipalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrincipalId({})", self.short_id())
    }
}

impl fmt::Display for PrincipalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_id())
    }
}
