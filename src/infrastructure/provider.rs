use crate::domain::payment::{PaymentAmount, PaymentMethodInfo};
use crate::domain::ports::PaymentProvider;
use crate::error::ProviderError;
use async_trait::async_trait;

/// Deterministic stand-in for a real payment gateway.
///
/// Accepts exactly the "CARD" and "CREDIT_CARD" method labels
/// (case-sensitive) and rejects everything else. A real gateway client
/// would replace this adapter behind the same port.
pub struct StubPaymentProvider;

#[async_trait]
impl PaymentProvider for StubPaymentProvider {
    async fn submit(
        &self,
        info: &PaymentMethodInfo,
        _amount: &PaymentAmount,
    ) -> Result<bool, ProviderError> {
        if info.payment_method == "CARD" || info.payment_method == "CREDIT_CARD" {
            return Ok(true);
        }
        Err(ProviderError::UnsupportedMethod)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_stub_provider_accepts_card_labels() {
        let provider = StubPaymentProvider;
        let amount = PaymentAmount::new(dec!(10.0), "USD");

        for method in ["CARD", "CREDIT_CARD"] {
            let info = PaymentMethodInfo {
                payment_method: method.to_string(),
                ..Default::default()
            };
            assert_eq!(provider.submit(&info, &amount).await, Ok(true));
        }
    }

    #[tokio::test]
    async fn test_stub_provider_is_case_sensitive() {
        let provider = StubPaymentProvider;
        let amount = PaymentAmount::new(dec!(10.0), "USD");

        for method in ["card", "Credit_Card", "BTC", ""] {
            let info = PaymentMethodInfo {
                payment_method: method.to_string(),
                ..Default::default()
            };
            assert_eq!(
                provider.submit(&info, &amount).await,
                Err(ProviderError::UnsupportedMethod),
                "method {method:?}"
            );
        }
    }
}
