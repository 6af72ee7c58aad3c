use crate::domain::payment::{PaymentAmount, PaymentMethodInfo};
use crate::domain::ports::{PaymentProvider, ProviderBox, ValidatePaymentMethod, ValidatorBox};
use crate::error::PaymentError;
use rust_decimal::Decimal;

/// Orchestrates a payment attempt: precondition checks, method validation,
/// then submission through the provider seam.
///
/// Owns its collaborators as boxed ports so any validator or provider
/// implementation (including test doubles) can be wired in.
pub struct PaymentProcessor {
    validator: ValidatorBox,
    provider: ProviderBox,
}

impl PaymentProcessor {
    pub fn new(validator: ValidatorBox, provider: ProviderBox) -> Self {
        Self {
            validator,
            provider,
        }
    }

    /// Runs the full pipeline. Steps short-circuit in fixed order:
    /// positive amount, non-empty currency, method validation, provider
    /// submission.
    pub async fn execute(
        &self,
        info: &PaymentMethodInfo,
        amount: &PaymentAmount,
    ) -> Result<bool, PaymentError> {
        if amount.value <= Decimal::ZERO {
            return Err(PaymentError::NonPositiveAmount);
        }
        if amount.currency.is_empty() {
            return Err(PaymentError::MissingCurrency);
        }

        match self.validator.validate(info) {
            Ok(true) => {}
            Ok(false) => {
                tracing::warn!(method = %info.payment_method, "payment method rejected");
                return Err(PaymentError::InvalidPaymentMethod);
            }
            Err(err) => {
                tracing::warn!(method = %info.payment_method, error = %err, "payment validation failed");
                return Err(PaymentError::Validation(err));
            }
        }

        let success = self.provider.submit(info, amount).await?;
        tracing::debug!(
            method = %info.payment_method,
            amount = %amount.value,
            currency = %amount.currency,
            success,
            "payment submitted"
        );
        Ok(success)
    }
}
