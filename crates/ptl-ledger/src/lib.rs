//! Core state machine for the Provenance Trace Ledger (PTL).
//!
//! This crate is the heart of PTL. It provides:
//! - Product, stage, and audit record types with per-product sequential ids
//! - The [`ProvenanceLedger`] state container with every mutating operation
//! - The [`ValueTransfer`] boundary to the host environment's fee primitive
//! - Integrity checking across the ledger tables
//! - Trail projection (full provenance view of one product)
//!
//! Every mutation validates its preconditions against current state and the
//! caller identity, then applies an atomic update or returns the failing
//! code. Operations are irreversible once accepted: there is no edit or
//! delete path for stages or audits, and finalization is permanent.

pub mod config;
pub mod error;
pub mod ledger;
pub mod projection;
pub mod records;
pub mod traits;
pub mod validation;

pub use config::LedgerConfig;
pub use error::{LedgerError, TransferFault};
pub use ledger::ProvenanceLedger;
pub use projection::{ProductSummary, ProvenanceTrail, TrailBuilder};
pub use records::{Audit, AuditId, Product, ProductId, Stage, StageId};
pub use traits::{CallContext, RecordingTransfer, TransferRecord, ValueTransfer};
pub use validation::{IntegrityChecker, IntegrityReport, Violation, ViolationKind};
