// SPDX-License-Identifier: AGPL-3.0

//! Numeric parsing and formatting helpers shared by the value crates

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Num;

use zwrap_exceptions::{ValueError, ValueResult};

mod decimal;

pub use decimal::{pow10, Decimal, DEFAULT_DECIMAL_SCALE};

/// Normalize a format specifier for matching (trimmed, upper-case)
pub fn canonical_spec(spec: &str) -> String {
    spec.trim().to_ascii_uppercase()
}

/// Strip a radix prefix such as `0x`, ignoring ASCII case
pub fn strip_prefix_ci<'a>(text: &'a str, prefix: &str) -> &'a str {
    match text.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => &text[prefix.len()..],
        _ => text,
    }
}

/// Split an optional leading sign off a literal
pub fn split_sign(text: &str) -> (bool, &str) {
    match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    }
}

/// Whether `text` is a non-empty run of ASCII decimal digits
pub fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a signed base-10 integer literal of arbitrary size.
///
/// Surrounding whitespace is ignored, a single leading `+` or `-` is allowed,
/// everything else must be ASCII digits.
pub fn parse_bigint(text: &str) -> ValueResult<BigInt> {
    let (negative, digits) = split_sign(text.trim());
    if !is_digits(digits) {
        return Err(ValueError::parse("integer format", text));
    }

    let magnitude = BigUint::from_str_radix(digits, 10)
        .map_err(|_| ValueError::parse("integer format", text))?;
    let sign = if negative { Sign::Minus } else { Sign::Plus };
    Ok(BigInt::from_biguint(sign, magnitude))
}

/// Parse unsigned digits in the given radix (no prefix, no sign)
pub fn parse_radix_digits(text: &str, radix: u32) -> Option<BigUint> {
    if text.is_empty() || !text.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    BigUint::from_str_radix(text, radix).ok()
}

/// Binary digits of `value`, most significant first, zero-padded to `width`
pub fn to_binary_padded(value: &BigUint, width: u32) -> String {
    format!("{:0>width$}", value.to_str_radix(2), width = width as usize)
}

/// Upper-case hexadecimal digits of `value` without leading zeros
pub fn to_hex_upper(value: &BigUint) -> String {
    format!("{:X}", value)
}
