use ptl_types::{LedgerHeight, PrincipalId};

use crate::error::TransferFault;

/// Environment-supplied call context: who is acting, and at what logical
/// time.
///
/// The surrounding ledger environment serializes all calls and guarantees
/// that heights are non-decreasing across them.
#[derive(Clone, Copy, Debug)]
pub struct CallContext {
    pub caller: PrincipalId,
    pub height: LedgerHeight,
}

impl CallContext {
    pub fn new(caller: PrincipalId, height: LedgerHeight) -> Self {
        Self { caller, height }
    }
}

/// Value-transfer boundary supplied by the host environment.
///
/// Used only by audit recording, to move the audit fee from the verifier to
/// the authority. A returned fault aborts the surrounding operation before
/// any state mutation, so charge-and-record stay atomic.
pub trait ValueTransfer {
    fn transfer(
        &mut self,
        amount: u64,
        from: &PrincipalId,
        to: &PrincipalId,
    ) -> Result<(), TransferFault>;
}

/// A single executed transfer, as observed by [`RecordingTransfer`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferRecord {
    pub amount: u64,
    pub from: PrincipalId,
    pub to: PrincipalId,
}

/// In-memory [`ValueTransfer`] for tests, local demos, and embedding.
///
/// Records every successful transfer. An injected failure reason makes all
/// subsequent transfers fault, to exercise the abort path.
#[derive(Debug, Default)]
pub struct RecordingTransfer {
    records: Vec<TransferRecord>,
    failure: Option<String>,
}

impl RecordingTransfer {
    /// Create a transfer backend that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every transfer executed so far, in order.
    pub fn records(&self) -> &[TransferRecord] {
        &self.records
    }

    /// Make every subsequent transfer fault with the given reason.
    pub fn fail_with(&mut self, reason: &str) {
        self.failure = Some(reason.to_string());
    }

    /// Clear an injected failure.
    pub fn recover(&mut self) {
        self.failure = None;
    }
}

impl ValueTransfer for RecordingTransfer {
    fn transfer(
        &mut self,
        amount: u64,
        from: &PrincipalId,
        to: &PrincipalId,
    ) -> Result<(), TransferFault> {
        if let Some(reason) = &self.failure {
            return Err(TransferFault {
                amount,
                reason: reason.clone(),
            });
        }
        self.records.push(TransferRecord {
            amount,
            from: *from,
            to: *to,
        });
        Ok(())
    }
}
