// SPDX-License-Identifier: AGPL-3.0

//! Literal parsing and lossless construction from other numeric types

use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::One;
use tracing::{debug, trace};

use zwrap_exceptions::{ValueError, ValueResult};
use zwrap_utils::{parse_bigint, pow10, Decimal};

use crate::Real;

impl Real {
    /// Parse a rational literal.
    ///
    /// Accepted forms, after trimming: `"<int>/<int>"`, a decimal such as
    /// `"-3.14"`, or a plain integer.
    pub fn parse(text: &str) -> ValueResult<Real> {
        let literal = text.trim();
        if literal.is_empty() {
            return Err(ValueError::parse("rational literal", text));
        }

        if let Some((numerator, denominator)) = literal.split_once('/') {
            trace!(literal, "parsing fraction literal");
            let numerator = parse_bigint(numerator)
                .map_err(|_| ValueError::parse("numerator", numerator.trim()))?;
            let denominator = parse_bigint(denominator)
                .map_err(|_| ValueError::parse("denominator", denominator.trim()))?;
            return Real::new(numerator, denominator);
        }

        if literal.contains('.') {
            trace!(literal, "parsing decimal literal");
            let decimal: Decimal = literal.parse()?;
            return Ok(Real::from_decimal(&decimal));
        }

        trace!(literal, "parsing integer literal");
        Ok(Real::from_integer(parse_bigint(literal)?))
    }

    /// Non-failing variant of [`Real::parse`]
    pub fn try_parse(text: &str) -> Option<Real> {
        match Real::parse(text) {
            Ok(value) => Some(value),
            Err(err) => {
                debug!(input = text, error = %err, "rejected rational literal");
                None
            }
        }
    }

    /// Exact value of a fixed-scale decimal
    pub fn from_decimal(value: &Decimal) -> Real {
        Real::canonical(value.signed_mantissa(), BigInt::from(pow10(value.scale())))
    }
}

impl FromStr for Real {
    type Err = ValueError;

    fn from_str(s: &str) -> ValueResult<Self> {
        Real::parse(s)
    }
}

impl TryFrom<String> for Real {
    type Error = ValueError;

    fn try_from(value: String) -> ValueResult<Self> {
        Real::parse(&value)
    }
}

impl From<Real> for String {
    fn from(value: Real) -> Self {
        value.to_string()
    }
}

impl From<&Decimal> for Real {
    fn from(value: &Decimal) -> Self {
        Real::from_decimal(value)
    }
}

impl From<Decimal> for Real {
    fn from(value: Decimal) -> Self {
        Real::from_decimal(&value)
    }
}

impl TryFrom<f64> for Real {
    type Error = ValueError;

    /// Every finite binary float is a dyadic rational, so this is exact
    fn try_from(value: f64) -> ValueResult<Self> {
        if !value.is_finite() {
            return Err(ValueError::argument(format!(
                "Cannot convert non-finite value {} to Real",
                value
            )));
        }
        if value == 0.0 {
            return Ok(Real::zero());
        }

        let bits = value.to_bits();
        let negative = bits >> 63 == 1;
        let biased_exponent = ((bits >> 52) & 0x7ff) as i32;
        let fraction = bits & ((1u64 << 52) - 1);

        // subnormals have no implicit leading bit
        let (mantissa, exponent) = if biased_exponent == 0 {
            (fraction, -1074)
        } else {
            (fraction | (1u64 << 52), biased_exponent - 1075)
        };

        let mut numerator = BigInt::from(mantissa);
        if negative {
            numerator = -numerator;
        }

        if exponent >= 0 {
            Ok(Real::from_integer(numerator << exponent as usize))
        } else {
            let denominator = BigInt::one() << exponent.unsigned_abs() as usize;
            Ok(Real::canonical(numerator, denominator))
        }
    }
}
