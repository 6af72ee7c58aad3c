use super::payment::{PaymentAmount, PaymentMethodInfo};
use super::user::User;
use crate::error::{ProviderError, StoreError, ValidationError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Capability of validating a payment method's fields.
///
/// The concrete validator never returns `Ok(false)`, but the tri-state
/// contract is kept so test doubles can exercise the processor's
/// "invalid payment method" path separately from validation errors.
pub trait ValidatePaymentMethod: Send + Sync {
    fn validate(&self, info: &PaymentMethodInfo) -> Result<bool, ValidationError>;
}

/// Seam for the external payment gateway. Async because a real
/// implementation would go over the network; the bundled stub does not.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    async fn submit(
        &self,
        info: &PaymentMethodInfo,
        amount: &PaymentAmount,
    ) -> Result<bool, ProviderError>;
}

/// Records user-info updates so they can be reverted later.
#[async_trait]
pub trait UserUpdateStore: Send + Sync {
    /// Stores an update snapshot and returns an update id.
    async fn update_user_info(
        &self,
        updated_at: DateTime<Utc>,
        user_id: &str,
        user: User,
    ) -> Result<String, StoreError>;

    /// Reverts a previously recorded update.
    async fn revert_update(&self, update_id: &str) -> Result<(), StoreError>;
}

/// Source of "now" for expiry checks, injected so the validator stays pure.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub type ValidatorBox = Box<dyn ValidatePaymentMethod>;
pub type ProviderBox = Box<dyn PaymentProvider>;
pub type UserUpdateStoreBox = Box<dyn UserUpdateStore>;
pub type ClockBox = Box<dyn Clock>;
