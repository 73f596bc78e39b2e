use crate::ledger::ProvenanceLedger;
use crate::records::ProductId;

/// Result of an integrity sweep over the ledger tables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntegrityReport {
    pub product_count: usize,
    pub stage_count: usize,
    pub audit_count: usize,
    pub violations: Vec<Violation>,
}

impl IntegrityReport {
    /// Returns `true` if all checks passed.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// A specific invariant violation detected during the sweep.
///
/// `product_id` is 0 for ledger-wide violations (a valid product id is
/// never 0).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    pub product_id: ProductId,
    pub kind: ViolationKind,
    pub description: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViolationKind {
    CounterMissing,
    StageGap,
    OrphanStage,
    AuditGap,
    OrphanAudit,
    BurnPrincipal,
}

/// Cross-table invariant checker.
///
/// Read-only: never called by the mutating path. A ledger driven purely
/// through the public operations always passes; a failing report means the
/// embedding host corrupted state it should not have touched.
pub struct IntegrityChecker;

impl IntegrityChecker {
    /// Sweep every table and report all violations found.
    pub fn check(ledger: &ProvenanceLedger) -> IntegrityReport {
        let mut violations = Vec::new();

        if ledger.config.authority.map(|a| a.is_burn()).unwrap_or(false) {
            violations.push(Violation {
                product_id: 0,
                kind: ViolationKind::BurnPrincipal,
                description: "authority is the burn principal".into(),
            });
        }

        for product_id in ledger.product_ids() {
            let Some(product) = ledger.products.get(&product_id) else {
                continue;
            };

            if product.owner.is_burn() {
                violations.push(Violation {
                    product_id,
                    kind: ViolationKind::BurnPrincipal,
                    description: "product owner is the burn principal".into(),
                });
            }

            if !ledger.stage_counts.contains_key(&product_id) {
                violations.push(Violation {
                    product_id,
                    kind: ViolationKind::CounterMissing,
                    description: "stage counter missing for product".into(),
                });
            }
            if !ledger.audit_counts.contains_key(&product_id) {
                violations.push(Violation {
                    product_id,
                    kind: ViolationKind::CounterMissing,
                    description: "audit counter missing for product".into(),
                });
            }

            for stage_id in 1..=ledger.stage_count(product_id) {
                if !ledger.stages.contains_key(&(product_id, stage_id)) {
                    violations.push(Violation {
                        product_id,
                        kind: ViolationKind::StageGap,
                        description: format!("stage {stage_id} missing from dense range"),
                    });
                }
            }
            for audit_id in 1..=ledger.audit_count(product_id) {
                if !ledger.audits.contains_key(&(product_id, audit_id)) {
                    violations.push(Violation {
                        product_id,
                        kind: ViolationKind::AuditGap,
                        description: format!("audit {audit_id} missing from dense range"),
                    });
                }
            }
        }

        for (&(product_id, stage_id), stage) in &ledger.stages {
            if !ledger.products.contains_key(&product_id) {
                violations.push(Violation {
                    product_id,
                    kind: ViolationKind::OrphanStage,
                    description: format!("stage {stage_id} keyed to unknown product"),
                });
            } else if stage_id == 0 || stage_id > ledger.stage_count(product_id) {
                violations.push(Violation {
                    product_id,
                    kind: ViolationKind::OrphanStage,
                    description: format!("stage {stage_id} outside recorded count"),
                });
            }
            if stage.recorded_by.is_burn() {
                violations.push(Violation {
                    product_id,
                    kind: ViolationKind::BurnPrincipal,
                    description: format!("stage {stage_id} recorded by the burn principal"),
                });
            }
        }

        for (&(product_id, audit_id), audit) in &ledger.audits {
            if !ledger.products.contains_key(&product_id) {
                violations.push(Violation {
                    product_id,
                    kind: ViolationKind::OrphanAudit,
                    description: format!("audit {audit_id} keyed to unknown product"),
                });
            } else if audit_id == 0 || audit_id > ledger.audit_count(product_id) {
                violations.push(Violation {
                    product_id,
                    kind: ViolationKind::OrphanAudit,
                    description: format!("audit {audit_id} outside recorded count"),
                });
            }
            if audit.verifier.is_burn() {
                violations.push(Violation {
                    product_id,
                    kind: ViolationKind::BurnPrincipal,
                    description: format!("audit {audit_id} verified by the burn principal"),
                });
            }
        }

        IntegrityReport {
            product_count: ledger.products.len(),
            stage_count: ledger.stages.len(),
            audit_count: ledger.audits.len(),
            violations,
        }
    }
}
