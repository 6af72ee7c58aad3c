use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Everything a caller hands over to describe a payment method.
///
/// Transient value object, never persisted. Field contents are validated by
/// the card validator use case, not at construction.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct PaymentMethodInfo {
    /// Method label, e.g. "CARD" or "CREDIT_CARD".
    pub payment_method: String,
    pub card_number: String,
    /// Expected form "MM/YY".
    pub card_expiry_date: String,
    /// Network label, e.g. "VISA", "MASTERCARD", "AMEX".
    pub card_type: String,
    pub card_cvv: String,
    pub card_holder_name: String,
}

/// A requested charge: decimal amount plus currency code.
///
/// Positivity and a non-empty currency are preconditions checked by the
/// processor, so an out-of-range value here fails at processing time rather
/// than at construction.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PaymentAmount {
    pub value: Decimal,
    pub currency: String,
}

impl PaymentAmount {
    pub fn new(value: Decimal, currency: impl Into<String>) -> Self {
        Self {
            value,
            currency: currency.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amount_serialization_round_trip() {
        let amount = PaymentAmount::new(dec!(100.50), "USD");
        let json = serde_json::to_string(&amount).unwrap();
        let back: PaymentAmount = serde_json::from_str(&json).unwrap();
        assert_eq!(back, amount);
        assert_eq!(back.value, dec!(100.50));
    }
}
