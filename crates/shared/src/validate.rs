use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use validator::ValidationError;

pub static LOGIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9!$&*+=?^_`{|}~.-]+@[a-zA-Z0-9-]+(?:\.[a-zA-Z0-9-]+)*$|^[_.@A-Za-z0-9-]+$",
    )
    .expect("valid login pattern")
});

pub static BUDGET_ITEM_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(menu|activity|transport|accommodation)$").expect("valid item type pattern")
});

pub fn non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(
            ValidationError::new("range").with_message("must be greater than or equal to 0".into()),
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn money_must_not_be_negative() {
        assert!(non_negative(&Decimal::ZERO).is_ok());
        assert!(non_negative(&Decimal::from_str("-0.00").unwrap()).is_ok());
        assert!(non_negative(&Decimal::from_str("12.50").unwrap()).is_ok());
        assert!(non_negative(&Decimal::from_str("-0.01").unwrap()).is_err());
    }

    #[test]
    fn patterns() {
        assert!(LOGIN.is_match("logistics_01"));
        assert!(!LOGIN.is_match("white space"));
        assert!(BUDGET_ITEM_TYPE.is_match("transport"));
        assert!(!BUDGET_ITEM_TYPE.is_match("Transport"));
    }
}
