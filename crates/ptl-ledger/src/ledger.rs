use std::collections::HashMap;

use tracing::{debug, info};

use ptl_types::{ContentDigest, PrincipalId};

use crate::config::LedgerConfig;
use crate::error::LedgerError;
use crate::records::{
    Audit, AuditId, Product, ProductId, Stage, StageId, MAX_CERTIFICATION_CHARS,
    MAX_DESCRIPTION_CHARS, MAX_FINDINGS_CHARS, MAX_LOCATION_CHARS, MAX_METADATA_CHARS,
    MAX_STAGE_NAME_CHARS,
};
use crate::traits::{CallContext, ValueTransfer};

/// The authoritative provenance state machine.
///
/// Owns the five logical tables (products, stages, audits, and the two
/// per-product counters) plus configuration. Operations take `&mut self`,
/// so the borrow checker provides the one-operation-at-a-time exclusivity
/// the surrounding environment expects; there is no internal locking.
///
/// Each mutating operation validates every precondition first and only
/// then touches state, so a returned error always means "nothing
/// happened".
#[derive(Debug, Default)]
pub struct ProvenanceLedger {
    pub(crate) config: LedgerConfig,
    pub(crate) products: HashMap<ProductId, Product>,
    pub(crate) stages: HashMap<(ProductId, StageId), Stage>,
    pub(crate) audits: HashMap<(ProductId, AuditId), Audit>,
    pub(crate) stage_counts: HashMap<ProductId, u32>,
    pub(crate) audit_counts: HashMap<ProductId, u32>,
}

impl ProvenanceLedger {
    /// Create an empty ledger with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty ledger with explicit configuration.
    pub fn with_config(config: LedgerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    // -----------------------------------------------------------------
    // Configuration admin
    // -----------------------------------------------------------------

    /// Configure the authority principal. One-time: once set there is no
    /// update path for the life of the ledger.
    pub fn set_authority(&mut self, principal: PrincipalId) -> Result<(), LedgerError> {
        if principal.is_burn() {
            return Err(LedgerError::InvalidOwner);
        }
        if self.config.authority.is_some() {
            return Err(LedgerError::NotAuthorized);
        }
        self.config.authority = Some(principal);
        info!(authority = %principal, "authority configured");
        Ok(())
    }

    /// Overwrite the stage cap. Applies to future stage additions only;
    /// products already above a lowered cap keep their existing stages.
    pub fn set_max_stages(&mut self, new_max: u32) -> Result<(), LedgerError> {
        if new_max == 0 {
            return Err(LedgerError::InvalidStage);
        }
        if self.config.authority.is_none() {
            return Err(LedgerError::NotAuthorized);
        }
        self.config.max_stages_per_product = new_max;
        debug!(max_stages = new_max, "stage cap updated");
        Ok(())
    }

    /// Overwrite the audit fee, applied to future audits only. The fee is
    /// unsigned, so the non-negativity rule holds by construction.
    pub fn set_audit_fee(&mut self, new_fee: u64) -> Result<(), LedgerError> {
        if self.config.authority.is_none() {
            return Err(LedgerError::NotAuthorized);
        }
        self.config.audit_fee = new_fee;
        debug!(audit_fee = new_fee, "audit fee updated");
        Ok(())
    }

    // -----------------------------------------------------------------
    // Mutating operations
    // -----------------------------------------------------------------

    /// Register a product under the caller's ownership.
    ///
    /// The hash must be exactly 32 bytes. Product ids are never reused;
    /// registering an id twice fails and leaves the first registration
    /// untouched.
    pub fn initialize_product(
        &mut self,
        ctx: &CallContext,
        product_id: ProductId,
        hash: &[u8],
        description: &str,
        quantity: u64,
        certification: &str,
    ) -> Result<(), LedgerError> {
        if product_id == 0 {
            return Err(LedgerError::InvalidProductId);
        }
        let digest = ContentDigest::try_from_slice(hash).map_err(|_| LedgerError::InvalidHash)?;
        if char_len(description) > MAX_DESCRIPTION_CHARS {
            return Err(LedgerError::InvalidDescription);
        }
        if quantity == 0 {
            return Err(LedgerError::InvalidQuantity);
        }
        if char_len(certification) > MAX_CERTIFICATION_CHARS {
            return Err(LedgerError::InvalidCertification);
        }
        if self.products.contains_key(&product_id) {
            return Err(LedgerError::ProductAlreadyExists);
        }

        self.products.insert(
            product_id,
            Product {
                owner: ctx.caller,
                hash: digest,
                description: description.to_string(),
                quantity,
                certification: certification.to_string(),
                status: true,
                finalized: false,
                created_at: ctx.height,
            },
        );
        self.stage_counts.insert(product_id, 0);
        self.audit_counts.insert(product_id, 0);
        debug!(product_id, owner = %ctx.caller, "product registered");
        Ok(())
    }

    /// Append a stage to a product's provenance chain and return its id.
    ///
    /// Owner-only, blocked once the product is finalized or the stage cap
    /// is reached. Ids are assigned densely from 1 per product.
    pub fn add_stage(
        &mut self,
        ctx: &CallContext,
        product_id: ProductId,
        stage_name: &str,
        location: &str,
        metadata: &str,
    ) -> Result<StageId, LedgerError> {
        let product = self
            .products
            .get(&product_id)
            .ok_or(LedgerError::ProductNotFound)?;
        if product.owner != ctx.caller {
            return Err(LedgerError::NotAuthorized);
        }
        if product.finalized {
            return Err(LedgerError::ProductAlreadyFinalized);
        }
        let count = self.stage_counts.get(&product_id).copied().unwrap_or(0);
        if count >= self.config.max_stages_per_product {
            return Err(LedgerError::MaxStagesExceeded);
        }
        if stage_name.is_empty() || char_len(stage_name) > MAX_STAGE_NAME_CHARS {
            return Err(LedgerError::InvalidStage);
        }
        if location.is_empty() || char_len(location) > MAX_LOCATION_CHARS {
            return Err(LedgerError::InvalidLocation);
        }
        if char_len(metadata) > MAX_METADATA_CHARS {
            return Err(LedgerError::InvalidMetadata);
        }

        let stage_id = count + 1;
        self.stages.insert(
            (product_id, stage_id),
            Stage {
                stage_name: stage_name.to_string(),
                location: location.to_string(),
                metadata: metadata.to_string(),
                recorded_at: ctx.height,
                recorded_by: ctx.caller,
            },
        );
        self.stage_counts.insert(product_id, stage_id);
        debug!(product_id, stage_id, "stage recorded");
        Ok(stage_id)
    }

    /// Record a third-party audit and charge the audit fee.
    ///
    /// The caller must not be the product owner, and an authority must be
    /// configured to receive the fee. The fee moves through the
    /// environment's transfer primitive before the record lands; a fault
    /// there aborts the operation with the ledger untouched, so the fee
    /// and the record commit together or not at all. Finalized products
    /// still admit audits.
    pub fn perform_audit(
        &mut self,
        ctx: &CallContext,
        transfer: &mut dyn ValueTransfer,
        product_id: ProductId,
        findings: &str,
        passed: bool,
    ) -> Result<AuditId, LedgerError> {
        let product = self
            .products
            .get(&product_id)
            .ok_or(LedgerError::ProductNotFound)?;
        if ctx.caller == product.owner {
            return Err(LedgerError::NotAuthorized);
        }
        if char_len(findings) > MAX_FINDINGS_CHARS {
            return Err(LedgerError::InvalidMetadata);
        }
        let authority = self.config.authority.ok_or(LedgerError::NotAuthorized)?;

        transfer.transfer(self.config.audit_fee, &ctx.caller, &authority)?;

        let audit_id = self.audit_counts.get(&product_id).copied().unwrap_or(0) + 1;
        self.audits.insert(
            (product_id, audit_id),
            Audit {
                verifier: ctx.caller,
                performed_at: ctx.height,
                findings: findings.to_string(),
                passed,
            },
        );
        self.audit_counts.insert(product_id, audit_id);
        debug!(product_id, audit_id, passed, "audit recorded");
        Ok(audit_id)
    }

    /// Freeze a product permanently. Owner-only, idempotency guarded:
    /// finalizing twice fails the second time.
    pub fn finalize_product(
        &mut self,
        ctx: &CallContext,
        product_id: ProductId,
    ) -> Result<(), LedgerError> {
        let product = self
            .products
            .get_mut(&product_id)
            .ok_or(LedgerError::ProductNotFound)?;
        if product.owner != ctx.caller {
            return Err(LedgerError::NotAuthorized);
        }
        if product.finalized {
            return Err(LedgerError::ProductAlreadyFinalized);
        }
        product.finalized = true;
        info!(product_id, "product finalized");
        Ok(())
    }

    /// Hand a product to a new owner.
    ///
    /// Owner-only, rejected for the burn principal and for finalized
    /// products. Accumulated stages and audits persist unchanged and stay
    /// attributed to their original recorder.
    pub fn transfer_ownership(
        &mut self,
        ctx: &CallContext,
        product_id: ProductId,
        new_owner: PrincipalId,
    ) -> Result<(), LedgerError> {
        let product = self
            .products
            .get_mut(&product_id)
            .ok_or(LedgerError::ProductNotFound)?;
        if product.owner != ctx.caller {
            return Err(LedgerError::NotAuthorized);
        }
        if new_owner.is_burn() {
            return Err(LedgerError::InvalidOwner);
        }
        if product.finalized {
            return Err(LedgerError::TransferNotAllowed);
        }
        product.owner = new_owner;
        info!(product_id, new_owner = %new_owner, "ownership transferred");
        Ok(())
    }

    // -----------------------------------------------------------------
    // Read accessors
    // -----------------------------------------------------------------

    /// Look up a product record.
    pub fn product(&self, product_id: ProductId) -> Option<&Product> {
        self.products.get(&product_id)
    }

    /// Look up one stage of a product.
    pub fn stage(&self, product_id: ProductId, stage_id: StageId) -> Option<&Stage> {
        self.stages.get(&(product_id, stage_id))
    }

    /// Look up one audit of a product.
    pub fn audit(&self, product_id: ProductId, audit_id: AuditId) -> Option<&Audit> {
        self.audits.get(&(product_id, audit_id))
    }

    /// Number of stages recorded for a product (0 for unknown products).
    pub fn stage_count(&self, product_id: ProductId) -> u32 {
        self.stage_counts.get(&product_id).copied().unwrap_or(0)
    }

    /// Number of audits recorded for a product (0 for unknown products).
    pub fn audit_count(&self, product_id: ProductId) -> u32 {
        self.audit_counts.get(&product_id).copied().unwrap_or(0)
    }

    /// Number of registered products.
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// All registered product ids, ascending.
    pub fn product_ids(&self) -> Vec<ProductId> {
        let mut ids: Vec<_> = self.products.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}
