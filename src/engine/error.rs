//! Error types for engine operations.

use thiserror::Error;

use crate::Amount;
use crate::model::{OrderId, UserId};
use crate::rating::RatingError;

/// Top-level error returned by [`Engine`](super::Engine) operations.
///
/// All variants are terminal, user-visible failures; the engine never
/// retries on the caller's behalf, and no variant leaves partial state.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{0}")]
    Rating(#[from] RatingError),

    #[error("no rate list configured for user {0}")]
    RateListNotFound(UserId),

    #[error("no wallet found for user {0}")]
    WalletNotFound(UserId),

    #[error("insufficient funds for user {0}: balance {1}, order total {2}")]
    InsufficientFunds(UserId, Amount, Amount),

    #[error("order {0} not found or not in BOOKED status")]
    OrderNotFound(OrderId),

    #[error("user {0} is already registered")]
    UserExists(UserId),

    #[error("top-up for user {0} must be positive, got {1}")]
    InvalidTopUp(UserId, Amount),
}
