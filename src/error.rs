use thiserror::Error;

/// Payment-method validation failures, one variant per sub-check.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid card type or number")]
    CardType,
    #[error("card is expired or has invalid expiry date")]
    Expiry,
    #[error("invalid CVV number")]
    Cvv,
}

/// Failures at the payment-provider seam.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("unsupported payment method")]
    UnsupportedMethod,
}

/// Everything the payment processor can report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaymentError {
    #[error("payment amount must be greater than zero")]
    NonPositiveAmount,
    #[error("currency must be specified")]
    MissingCurrency,
    #[error("payment validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("invalid payment method")]
    InvalidPaymentMethod,
    #[error("payment processing failed: {0}")]
    Provider(#[from] ProviderError),
}

/// Tier transition rejections, matched by variant rather than identity.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("user cannot be upgraded")]
    UpgradeBlocked,
    #[error("user cannot be downgraded")]
    DowngradeBlocked,
    #[error("user status cannot be changed unknown status provided")]
    UnknownOperation,
    /// Reserved for a future remote status-change call; nothing produces it yet.
    #[error("network error while changing the user status")]
    Network,
}

/// Failures in the user-update store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("unknown update id: {0}")]
    UnknownUpdateId(String),
}
