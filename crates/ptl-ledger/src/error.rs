use thiserror::Error;

/// Fatal fault raised by the environment's value-transfer primitive.
///
/// Not part of the domain code taxonomy: a fault here means the host could
/// not move value at all, and the surrounding operation aborts with no
/// state change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("value transfer of {amount} failed: {reason}")]
pub struct TransferFault {
    pub amount: u64,
    pub reason: String,
}

/// Errors produced by ledger operations.
///
/// The domain variants form a closed taxonomy, one per validation rule;
/// embedding hosts read the stable numeric code via [`LedgerError::code`].
/// `TransferFailed` is the single cross-cutting environment fault and
/// carries no domain code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("caller is not authorized for this operation")]
    NotAuthorized,

    #[error("product id must be a positive integer")]
    InvalidProductId,

    #[error("stage name or stage cap is invalid")]
    InvalidStage,

    #[error("location is empty or too long")]
    InvalidLocation,

    #[error("product not found")]
    ProductNotFound,

    #[error("product hash must be exactly 32 bytes")]
    InvalidHash,

    #[error("stage limit reached for this product")]
    MaxStagesExceeded,

    #[error("description exceeds the maximum length")]
    InvalidDescription,

    #[error("quantity must be a positive integer")]
    InvalidQuantity,

    #[error("certification exceeds the maximum length")]
    InvalidCertification,

    #[error("product is already finalized")]
    ProductAlreadyFinalized,

    #[error("metadata exceeds the maximum length")]
    InvalidMetadata,

    #[error("principal is not a valid owner")]
    InvalidOwner,

    #[error("ownership of a finalized product cannot be transferred")]
    TransferNotAllowed,

    #[error("product id is already registered")]
    ProductAlreadyExists,

    #[error(transparent)]
    TransferFailed(#[from] TransferFault),
}

impl LedgerError {
    /// Stable numeric code for the domain taxonomy.
    ///
    /// Returns `None` for [`LedgerError::TransferFailed`], which is an
    /// environment fault rather than a validation outcome.
    pub fn code(&self) -> Option<u16> {
        match self {
            Self::NotAuthorized => Some(100),
            Self::InvalidProductId => Some(101),
            Self::InvalidStage => Some(102),
            Self::InvalidLocation => Some(104),
            Self::ProductNotFound => Some(106),
            Self::InvalidHash => Some(109),
            Self::MaxStagesExceeded => Some(110),
            Self::InvalidDescription => Some(111),
            Self::InvalidQuantity => Some(112),
            Self::InvalidCertification => Some(113),
            Self::ProductAlreadyFinalized => Some(115),
            Self::InvalidMetadata => Some(118),
            Self::InvalidOwner => Some(119),
            Self::TransferNotAllowed => Some(120),
            Self::ProductAlreadyExists => Some(121),
            Self::TransferFailed(_) => None,
        }
    }
}
