//! Domain errors for the loyalty engine.
//!
//! All variants except [`LoyaltyError::Database`] are recoverable at the call
//! boundary and carry enough context to render a specific message. Storage
//! unavailability is passed through unchanged.

use thiserror::Error;

use crate::wheel::WheelType;

#[derive(Error, Debug)]
pub enum LoyaltyError {
    #[error("customer not found")]
    CustomerNotFound,

    #[error("voucher not found")]
    VoucherNotFound,

    /// The uniqueness key (customer + wheel [+ year]) already has a spin
    /// record. Concurrent duplicate inserts surface here as well.
    #[error("wheel already spun")]
    AlreadySpun,

    /// Catalog misconfiguration: operator-visible, not user-recoverable.
    #[error("no active prizes configured for wheel '{wheel}'")]
    NoActivePrizes { wheel: WheelType },

    #[error("voucher is not usable (already used or expired)")]
    VoucherNotUsable,

    #[error("invalid amount: must be a non-negative integer")]
    InvalidAmount,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl LoyaltyError {
    /// Stable machine-readable code for API boundaries.
    pub fn code(&self) -> &'static str {
        match self {
            LoyaltyError::CustomerNotFound | LoyaltyError::VoucherNotFound => "not_found",
            LoyaltyError::AlreadySpun => "already_spun",
            LoyaltyError::NoActivePrizes { .. } => "no_active_prizes",
            LoyaltyError::VoucherNotUsable => "not_usable",
            LoyaltyError::InvalidAmount => "invalid_amount",
            LoyaltyError::Database(_) => "storage_error",
        }
    }
}
