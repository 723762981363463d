use rust_decimal::Decimal;

pub const AMOUNT_NOT_POSITIVE_MSG: &str = "The amount must be greater than zero.";

/// **Basic input validation for a deposit or withdrawal amount**
///
/// Checks for:
/// - A zero or negative amount.
///
/// Returns a message describing the problem, or `None` if the amount is fine.
pub fn is_valid_amount(amount: Decimal) -> Option<&'static str> {
    if amount <= Decimal::ZERO {
        Some(AMOUNT_NOT_POSITIVE_MSG)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_amount_passes() {
        assert_eq!(None, is_valid_amount(Decimal::new(1, 2)));
    }

    #[test]
    fn zero_and_negative_amounts_fail() {
        assert_eq!(Some(AMOUNT_NOT_POSITIVE_MSG), is_valid_amount(Decimal::ZERO));
        assert_eq!(
            Some(AMOUNT_NOT_POSITIVE_MSG),
            is_valid_amount(Decimal::from(-5))
        );
    }
}
