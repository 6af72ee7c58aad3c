use crate::domain::payment::PaymentMethodInfo;
use crate::domain::ports::{Clock, ClockBox, ValidatePaymentMethod};
use crate::error::ValidationError;
use crate::infrastructure::clock::SystemClock;
use chrono::Datelike;
use once_cell::sync::Lazy;
use regex::Regex;

static VISA_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^4[0-9]{12}(?:[0-9]{3})?$").expect("hard-coded pattern"));
static MASTERCARD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^5[1-5][0-9]{14}$").expect("hard-coded pattern"));
static AMEX_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^3[47][0-9]{13}$").expect("hard-coded pattern"));

/// Validates card payment methods against static format rules.
///
/// Checks run in fixed order (card type/number, expiry, CVV) and the first
/// failure wins. Time is read through the injected [`Clock`] so the expiry
/// check stays deterministic under test.
pub struct CardValidator {
    clock: ClockBox,
}

impl CardValidator {
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    pub fn with_clock(clock: ClockBox) -> Self {
        Self { clock }
    }

    /// Matches the card type label (case-insensitive) against its fixed
    /// number pattern. Unknown labels fail.
    pub fn check_card_type(&self, info: &PaymentMethodInfo) -> bool {
        let pattern = match info.card_type.to_ascii_uppercase().as_str() {
            "VISA" => &VISA_PATTERN,
            "MASTERCARD" => &MASTERCARD_PATTERN,
            "AMEX" => &AMEX_PATTERN,
            _ => return false,
        };
        pattern.is_match(&info.card_number)
    }

    /// Expects exactly "MM/YY". A card expiring this month is still valid;
    /// the year has no upper bound.
    pub fn check_expiry_date(&self, info: &PaymentMethodInfo) -> bool {
        let mut parts = info.card_expiry_date.split('/');
        let (Some(month_part), Some(year_part), None) =
            (parts.next(), parts.next(), parts.next())
        else {
            return false;
        };

        let Ok(month) = month_part.parse::<i32>() else {
            return false;
        };
        if !(1..=12).contains(&month) {
            return false;
        }
        let Ok(year) = year_part.parse::<i32>() else {
            return false;
        };

        let now = self.clock.now();
        let current_year = now.year() % 100;
        let current_month = now.month() as i32;

        !(year < current_year || (year == current_year && month < current_month))
    }

    /// AMEX takes a 4-digit CVV, every other label 3 digits.
    pub fn check_cvv(&self, info: &PaymentMethodInfo) -> bool {
        let expected_len = if info.card_type.eq_ignore_ascii_case("AMEX") {
            4
        } else {
            3
        };
        info.card_cvv.len() == expected_len
            && info.card_cvv.chars().all(|c| c.is_ascii_digit())
    }
}

impl Default for CardValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidatePaymentMethod for CardValidator {
    fn validate(&self, info: &PaymentMethodInfo) -> Result<bool, ValidationError> {
        if !self.check_card_type(info) {
            return Err(ValidationError::CardType);
        }
        if !self.check_expiry_date(info) {
            return Err(ValidationError::Expiry);
        }
        if !self.check_cvv(info) {
            return Err(ValidationError::Cvv);
        }
        Ok(true)
    }
}
