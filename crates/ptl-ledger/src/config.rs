use serde::{Deserialize, Serialize};

use ptl_types::PrincipalId;

/// Default cap on stages per product.
pub const DEFAULT_MAX_STAGES: u32 = 50;

/// Default fee transferred from verifier to authority per audit.
pub const DEFAULT_AUDIT_FEE: u64 = 500;

/// Ledger-wide configuration.
///
/// The authority slot is set-once: `None` until the first successful
/// `set_authority`, immutable afterwards for the life of the ledger. The
/// cap and fee are overwritable and apply only to future operations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// The singleton authority principal, if configured.
    pub authority: Option<PrincipalId>,
    /// Upper bound on stages per product.
    pub max_stages_per_product: u32,
    /// Fee charged to the verifier on every audit.
    pub audit_fee: u64,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            authority: None,
            max_stages_per_product: DEFAULT_MAX_STAGES,
            audit_fee: DEFAULT_AUDIT_FEE,
        }
    }
}
