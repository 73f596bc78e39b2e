//! Foundation types for the Provenance Trace Ledger (PTL).
//!
//! This crate provides the identity, digest, and temporal types used
//! throughout the PTL system. Every other PTL crate depends on `ptl-types`.
//!
//! # Key Types
//!
//! - [`PrincipalId`] — Opaque comparable identity derived from principal material
//! - [`ContentDigest`] — 32-byte content digest (BLAKE3 hash)
//! - [`LedgerHeight`] — Logical time supplied by the host environment

pub mod digest;
pub mod error;
pub mod identity;
pub mod temporal;

pub use digest::ContentDigest;
pub use error::TypeError;
pub use identity::{PrincipalId, PrincipalMaterial};
pub use temporal::LedgerHeight;
