use super::processor::PaymentProcessor;
use super::validator::CardValidator;
use crate::domain::payment::{PaymentAmount, PaymentMethodInfo};
use crate::domain::ports::{ValidatePaymentMethod, ValidatorBox};
use crate::error::{PaymentError, ValidationError};
use crate::infrastructure::provider::StubPaymentProvider;

/// Facade bundling the two payment capabilities (validate, process) behind
/// one type, replacing the original design's interface embedding with an
/// explicit composition.
pub struct PaymentService {
    validator: ValidatorBox,
    processor: PaymentProcessor,
}

impl PaymentService {
    pub fn new(validator: ValidatorBox, processor: PaymentProcessor) -> Self {
        Self {
            validator,
            processor,
        }
    }

    /// Wires the default card validator and the stub provider.
    pub fn with_defaults() -> Self {
        let processor = PaymentProcessor::new(
            Box::new(CardValidator::new()),
            Box::new(StubPaymentProvider),
        );
        Self::new(Box::new(CardValidator::new()), processor)
    }

    pub fn validate(&self, info: &PaymentMethodInfo) -> Result<bool, ValidationError> {
        self.validator.validate(info)
    }

    pub async fn process(
        &self,
        info: &PaymentMethodInfo,
        amount: &PaymentAmount,
    ) -> Result<bool, PaymentError> {
        self.processor.execute(info, amount).await
    }
}

impl Default for PaymentService {
    fn default() -> Self {
        Self::with_defaults()
    }
}
