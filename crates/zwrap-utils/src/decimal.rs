// SPDX-License-Identifier: AGPL-3.0

//! Exact fixed-scale decimal numbers
//!
//! A `Decimal` is `sign * mantissa / 10^scale`. It only ever comes from
//! decimal text or exact integer arithmetic, never from binary floats, so
//! converting it to a rational is exact.

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Pow, Zero};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use zwrap_exceptions::{ValueError, ValueResult};

use crate::{is_digits, split_sign};

/// Number of fractional digits used when a fraction has no finite decimal expansion
pub const DEFAULT_DECIMAL_SCALE: u32 = 28;

#[derive(Debug, Clone)]
pub struct Decimal {
    negative: bool,
    mantissa: BigUint,
    scale: u32,
}

impl Decimal {
    pub fn new(negative: bool, mantissa: BigUint, scale: u32) -> Self {
        let negative = negative && !mantissa.is_zero();
        Self {
            negative,
            mantissa,
            scale,
        }
    }

    pub fn from_integer(value: &BigInt) -> Self {
        Self::new(value.sign() == Sign::Minus, value.magnitude().clone(), 0)
    }

    /// Fixed-point division `numerator / denominator` with `scale` fractional digits.
    ///
    /// The last digit is rounded half to even and trailing zeros are dropped.
    /// `denominator` must be non-zero.
    pub fn from_ratio(numerator: &BigInt, denominator: &BigUint, scale: u32) -> Self {
        debug_assert!(!denominator.is_zero());

        let scaled = numerator.magnitude() * pow10(scale);
        let (mut quotient, remainder) = scaled.div_rem(denominator);

        let twice = &remainder << 1usize;
        if twice > *denominator || (twice == *denominator && quotient.is_odd()) {
            quotient += 1u32;
        }

        Self::new(numerator.sign() == Sign::Minus, quotient, scale).normalized()
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    pub fn mantissa(&self) -> &BigUint {
        &self.mantissa
    }

    /// Number of fractional digits
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Mantissa with the sign applied
    pub fn signed_mantissa(&self) -> BigInt {
        let sign = if self.negative { Sign::Minus } else { Sign::Plus };
        BigInt::from_biguint(sign, self.mantissa.clone())
    }

    /// Same value with trailing fractional zeros removed
    pub fn normalized(&self) -> Self {
        let ten = BigUint::from(10u32);
        let mut mantissa = self.mantissa.clone();
        let mut scale = self.scale;

        while scale > 0 {
            let (quotient, remainder) = mantissa.div_rem(&ten);
            if !remainder.is_zero() {
                break;
            }
            mantissa = quotient;
            scale -= 1;
        }

        Self::new(self.negative, mantissa, scale)
    }
}

/// `10^exponent` as an unsigned big integer
pub fn pow10(exponent: u32) -> BigUint {
    if exponent == 0 {
        return BigUint::one();
    }
    Pow::pow(BigUint::from(10u32), exponent)
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Self::from_integer(&BigInt::from(value))
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        let lhs = self.normalized();
        let rhs = other.normalized();
        lhs.negative == rhs.negative && lhs.scale == rhs.scale && lhs.mantissa == rhs.mantissa
    }
}

impl Eq for Decimal {}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let normalized = self.normalized();
        normalized.negative.hash(state);
        normalized.mantissa.hash(state);
        normalized.scale.hash(state);
    }
}

impl FromStr for Decimal {
    type Err = ValueError;

    /// Accepts `[+-]digits[.digits]`, with either side of the point allowed to
    /// be empty but not both.
    fn from_str(text: &str) -> ValueResult<Self> {
        let invalid = || ValueError::parse("decimal format", text);

        let (negative, body) = split_sign(text.trim());
        let (integer_part, fraction_part) = match body.find('.') {
            Some(index) => (&body[..index], &body[index + 1..]),
            None => (body, ""),
        };

        if integer_part.is_empty() && fraction_part.is_empty() {
            return Err(invalid());
        }
        if !(integer_part.is_empty() || is_digits(integer_part)) {
            return Err(invalid());
        }
        if !(fraction_part.is_empty() || is_digits(fraction_part)) {
            return Err(invalid());
        }

        let digits = format!("{}{}", integer_part, fraction_part);
        let mantissa = BigUint::parse_bytes(digits.as_bytes(), 10).ok_or_else(invalid)?;
        let scale = u32::try_from(fraction_part.len()).map_err(|_| invalid())?;

        Ok(Self::new(negative, mantissa, scale))
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.mantissa.to_str_radix(10);
        let scale = self.scale as usize;

        if self.negative {
            f.write_str("-")?;
        }
        if scale == 0 {
            return f.write_str(&digits);
        }

        let padded = format!("{:0>width$}", digits, width = scale + 1);
        let (integer, fraction) = padded.split_at(padded.len() - scale);
        write!(f, "{}.{}", integer, fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(text: &str) -> Decimal {
        text.parse().unwrap()
    }

    #[test]
    fn test_parse_decimal() {
        let value = dec("3.14");
        assert!(!value.is_negative());
        assert_eq!(value.mantissa(), &BigUint::from(314u32));
        assert_eq!(value.scale(), 2);

        let value = dec("-0.050");
        assert!(value.is_negative());
        assert_eq!(value.mantissa(), &BigUint::from(50u32));
        assert_eq!(value.scale(), 3);
    }

    #[test]
    fn test_parse_decimal_edge_forms() {
        assert_eq!(dec(".5"), dec("0.5"));
        assert_eq!(dec("5."), dec("5"));
        assert_eq!(dec("+2.5"), dec("2.5"));
        assert!(!dec("-0.0").is_negative());
    }

    #[test]
    fn test_parse_decimal_invalid() {
        for text in ["", ".", "-", "1.2.3", "abc", "1,5", "1e5", "--1.0"] {
            assert!(text.parse::<Decimal>().is_err(), "{}", text);
        }
    }

    #[test]
    fn test_display_keeps_scale() {
        assert_eq!(dec("3.140").to_string(), "3.140");
        assert_eq!(dec("-0.05").to_string(), "-0.05");
        assert_eq!(dec("42").to_string(), "42");
        assert_eq!(Decimal::new(false, BigUint::from(5u32), 3).to_string(), "0.005");
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(dec("1.50"), dec("1.5"));
        assert_eq!(dec("0.000"), dec("0"));
        assert_ne!(dec("1.5"), dec("-1.5"));
        assert_ne!(dec("1.5"), dec("15"));
    }

    #[test]
    fn test_normalized() {
        let value = dec("12.3400").normalized();
        assert_eq!(value.scale(), 2);
        assert_eq!(value.to_string(), "12.34");
        assert_eq!(dec("0.00").normalized().scale(), 0);
    }

    #[test]
    fn test_from_ratio_terminating() {
        let value = Decimal::from_ratio(&BigInt::from(157), &BigUint::from(50u32), 28);
        assert_eq!(value.to_string(), "3.14");
    }

    #[test]
    fn test_from_ratio_rounds_half_even() {
        let one_third = Decimal::from_ratio(&BigInt::from(1), &BigUint::from(3u32), 4);
        assert_eq!(one_third.to_string(), "0.3333");

        let two_thirds = Decimal::from_ratio(&BigInt::from(-2), &BigUint::from(3u32), 4);
        assert_eq!(two_thirds.to_string(), "-0.6667");

        // 0.125 at two digits is an exact tie, 0.12 keeps the even digit
        let tie = Decimal::from_ratio(&BigInt::from(1), &BigUint::from(8u32), 2);
        assert_eq!(tie.to_string(), "0.12");
    }

    #[test]
    fn test_from_integer() {
        let value = Decimal::from_integer(&BigInt::from(-12));
        assert_eq!(value.to_string(), "-12");
        assert_eq!(value.signed_mantissa(), BigInt::from(-12));
        assert_eq!(Decimal::from(7), dec("7.0"));
    }
}
