//! Arbitrary-base digit-string decoding into exact integers.

use num_bigint::BigInt;
use num_traits::Zero;

use crate::error::{RecoverError, Result};

pub const MIN_BASE: u32 = 2;
pub const MAX_BASE: u32 = 36;

/// Decode a digit string in the given base (2..=36) into an exact integer.
///
/// Digits `0`-`9` map to 0-9 and letters map to 10-35, case-insensitive.
/// No sign, fractional part, or whitespace is accepted. The accumulator is a
/// `BigInt`, so the decoded value is exact regardless of length; an empty
/// string decodes to zero.
pub fn decode(digits: &str, base: u32) -> Result<BigInt> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(RecoverError::UnsupportedBase(base));
    }
    let big_base = BigInt::from(base);
    let mut num = BigInt::zero();
    for ch in digits.chars() {
        let value = digit_value(ch).filter(|&v| v < base).ok_or(
            RecoverError::InvalidDigit { digit: ch, base },
        )?;
        num = num * &big_base + BigInt::from(value);
    }
    Ok(num)
}

fn digit_value(ch: char) -> Option<u32> {
    match ch {
        '0'..='9' => Some(ch as u32 - '0' as u32),
        'a'..='z' => Some(ch as u32 - 'a' as u32 + 10),
        'A'..='Z' => Some(ch as u32 - 'A' as u32 + 10),
        _ => None,
    }
}
