//! Validation of raw terminal input before it reaches the shop.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum InputError {
    #[error("Please enter a valid product ID")]
    EmptyProductId,
    #[error("Product IDs cannot contain spaces")]
    MalformedProductId,
    #[error("Please enter a valid quantity")]
    NotANumber,
    #[error("Quantity must be greater than zero")]
    NonPositive,
    #[error("Quantity is too large")]
    TooLarge,
}

pub fn parse_product_id(raw: &str) -> Result<String, InputError> {
    let id = raw.trim();
    if id.is_empty() {
        return Err(InputError::EmptyProductId);
    }
    if id.contains(char::is_whitespace) {
        return Err(InputError::MalformedProductId);
    }
    Ok(id.to_string())
}

pub fn parse_quantity(raw: &str) -> Result<u32, InputError> {
    let value: i64 = raw.trim().parse().map_err(|_| InputError::NotANumber)?;
    if value <= 0 {
        return Err(InputError::NonPositive);
    }
    u32::try_from(value).map_err(|_| InputError::TooLarge)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_id_is_trimmed() {
        assert_eq!(parse_product_id("  XL001 \n"), Ok("XL001".to_string()));
    }

    #[test]
    fn product_id_rejects_blank_and_spaced_input() {
        assert_eq!(parse_product_id("   "), Err(InputError::EmptyProductId));
        assert_eq!(parse_product_id("XL 001"), Err(InputError::MalformedProductId));
    }

    #[test]
    fn quantity_must_be_a_positive_integer() {
        assert_eq!(parse_quantity("5"), Ok(5));
        assert_eq!(parse_quantity(" 12 "), Ok(12));
        assert_eq!(parse_quantity("0"), Err(InputError::NonPositive));
        assert_eq!(parse_quantity("-3"), Err(InputError::NonPositive));
        assert_eq!(parse_quantity("two"), Err(InputError::NotANumber));
        assert_eq!(parse_quantity("2.5"), Err(InputError::NotANumber));
        assert_eq!(parse_quantity("99999999999"), Err(InputError::TooLarge));
    }
}
