//! Conversion between the display denomination and the contract's base unit.

use crate::errors::CoreError;
use ethers::types::U256;
use ethers::utils::format_ether;

/// Number of fractional digits in one ether.
pub const ETHER_DECIMALS: usize = 18;

/// Converts a decimal ether amount into wei.
///
/// Rejects signs, anything but ASCII digits around a single `.`, more than
/// [`ETHER_DECIMALS`] fractional digits, and values that do not fit a uint256.
pub fn parse_amount(amount: &str) -> Result<U256, CoreError> {
    let invalid = |reason: &str| CoreError::InvalidAmount {
        amount: amount.to_string(),
        reason: reason.to_string(),
    };

    let trimmed = amount.trim();
    let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));

    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid("no digits"));
    }
    if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(invalid("not a non-negative decimal number"));
    }
    if fraction.len() > ETHER_DECIMALS {
        return Err(invalid("too many decimals"));
    }

    let digits = format!("{}{:0<width$}", whole, fraction, width = ETHER_DECIMALS);
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(U256::zero());
    }
    U256::from_dec_str(digits).map_err(|_| invalid("overflow"))
}

/// Converts a wei amount into a decimal ether string without trailing zeros.
pub fn format_amount(amount: U256) -> String {
    let formatted = format_ether(amount);
    match formatted.split_once('.') {
        Some((whole, fraction)) => {
            let fraction = fraction.trim_end_matches('0');
            if fraction.is_empty() {
                whole.to_string()
            } else {
                format!("{}.{}", whole, fraction)
            }
        }
        None => formatted,
    }
}
