use serde::{Deserialize, Serialize};

use ptl_types::{ContentDigest, LedgerHeight, PrincipalId};

/// Identifier for a registered product. Zero is rejected at registration.
pub type ProductId = u64;

/// Per-product stage identifier, dense and sequential from 1.
pub type StageId = u32;

/// Per-product audit identifier, dense and sequential from 1.
pub type AuditId = u32;

pub const MAX_DESCRIPTION_CHARS: usize = 256;
pub const MAX_CERTIFICATION_CHARS: usize = 100;
pub const MAX_STAGE_NAME_CHARS: usize = 100;
pub const MAX_LOCATION_CHARS: usize = 100;
pub const MAX_METADATA_CHARS: usize = 512;
pub const MAX_FINDINGS_CHARS: usize = 512;

/// A registered product and its lifecycle flags.
///
/// `owner` changes only through ownership transfer, and only while the
/// product is not finalized. `finalized` transitions false to true exactly
/// once and is never cleared. Deletion is not supported.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub owner: PrincipalId,
    pub hash: ContentDigest,
    pub description: String,
    pub quantity: u64,
    pub certification: String,
    /// Set at registration; no transition clears it.
    pub status: bool,
    pub finalized: bool,
    pub created_at: LedgerHeight,
}

/// One immutable handling event in a product's provenance chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    pub stage_name: String,
    pub location: String,
    pub metadata: String,
    pub recorded_at: LedgerHeight,
    /// The product owner at the time the stage was recorded. Ownership
    /// transfers do not rewrite this attribution.
    pub recorded_by: PrincipalId,
}

/// A third-party attestation recorded against a product.
///
/// The verifier is never the product owner at recording time, and pays the
/// configured audit fee to the authority.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Audit {
    pub verifier: PrincipalId,
    pub performed_at: LedgerHeight,
    pub findings: String,
    pub passed: bool,
}
