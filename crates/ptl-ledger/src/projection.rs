use ptl_types::PrincipalId;

use crate::ledger::ProvenanceLedger;
use crate::records::{Audit, AuditId, Product, ProductId, Stage, StageId};

/// Complete provenance view of one product: the record itself, its stages
/// and audits in id order, and audit tallies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProvenanceTrail {
    pub product_id: ProductId,
    pub product: Product,
    pub stages: Vec<(StageId, Stage)>,
    pub audits: Vec<(AuditId, Audit)>,
    pub passed_audits: u32,
    pub failed_audits: u32,
}

/// One row in the per-product summary listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductSummary {
    pub product_id: ProductId,
    pub owner: PrincipalId,
    pub finalized: bool,
    pub stage_count: u32,
    pub audit_count: u32,
}

/// Deterministic projection builders over the ledger tables.
pub struct TrailBuilder;

impl TrailBuilder {
    /// Assemble the full trail for one product, or `None` if unregistered.
    pub fn provenance_trail(
        ledger: &ProvenanceLedger,
        product_id: ProductId,
    ) -> Option<ProvenanceTrail> {
        let product = ledger.product(product_id)?.clone();

        let stages: Vec<(StageId, Stage)> = (1..=ledger.stage_count(product_id))
            .filter_map(|id| ledger.stage(product_id, id).cloned().map(|s| (id, s)))
            .collect();
        let audits: Vec<(AuditId, Audit)> = (1..=ledger.audit_count(product_id))
            .filter_map(|id| ledger.audit(product_id, id).cloned().map(|a| (id, a)))
            .collect();

        let passed_audits = audits.iter().filter(|(_, a)| a.passed).count() as u32;
        let failed_audits = audits.len() as u32 - passed_audits;

        Some(ProvenanceTrail {
            product_id,
            product,
            stages,
            audits,
            passed_audits,
            failed_audits,
        })
    }

    /// Summarize every registered product, ascending by id.
    pub fn summaries(ledger: &ProvenanceLedger) -> Vec<ProductSummary> {
        ledger
            .product_ids()
            .into_iter()
            .filter_map(|product_id| {
                ledger.product(product_id).map(|product| ProductSummary {
                    product_id,
                    owner: product.owner,
                    finalized: product.finalized,
                    stage_count: ledger.stage_count(product_id),
                    audit_count: ledger.audit_count(product_id),
                })
            })
            .collect()
    }
}
