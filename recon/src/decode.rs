use num_bigint::BigUint;
use num_traits::Zero;

use crate::errors::DecodeError;

/// Smallest base the positional alphabet supports.
pub const MIN_BASE: u32 = 2;
/// Largest base the positional alphabet supports (digits 0-9 then a-z).
pub const MAX_BASE: u32 = 36;

/// Decodes [digits] interpreted in [base] into an unsigned integer.
///
/// Digits above 9 are the letters a-z in either case; each digit value must
/// be strictly below [base]. The accumulator is arbitrary precision, so
/// inputs of any length decode without loss.
pub fn decode_digits(digits: &str, base: u32) -> Result<BigUint, DecodeError> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(DecodeError::UnsupportedBase(base));
    }
    if digits.is_empty() {
        return Err(DecodeError::EmptyDigits);
    }

    let mut acc = BigUint::zero();
    for c in digits.chars() {
        let d = c
            .to_digit(base)
            .ok_or(DecodeError::InvalidDigit { digit: c, base })?;
        acc = acc * base + d;
    }
    Ok(acc)
}
