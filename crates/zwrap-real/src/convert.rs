// SPDX-License-Identifier: AGPL-3.0

use num_bigint::BigInt;
use num_traits::ToPrimitive;

use zwrap_exceptions::{ValueError, ValueResult};
use zwrap_utils::{Decimal, DEFAULT_DECIMAL_SCALE};

use crate::Real;

impl Real {
    fn integer_value(&self, target: &str) -> ValueResult<&BigInt> {
        if !self.is_integer() {
            return Err(ValueError::invalid_operation(format!(
                "Cannot convert non-integer value {} to {}",
                self, target
            )));
        }
        Ok(self.numerator())
    }

    pub fn to_bigint(&self) -> ValueResult<BigInt> {
        self.integer_value("BigInt").cloned()
    }

    pub fn to_i32(&self) -> ValueResult<i32> {
        self.integer_value("i32")?
            .to_i32()
            .ok_or_else(|| ValueError::overflow(format!("{} does not fit in i32", self)))
    }

    pub fn to_i64(&self) -> ValueResult<i64> {
        self.integer_value("i64")?
            .to_i64()
            .ok_or_else(|| ValueError::overflow(format!("{} does not fit in i64", self)))
    }

    /// Decimal expansion with up to [`DEFAULT_DECIMAL_SCALE`] fractional digits
    pub fn to_decimal(&self) -> Decimal {
        self.to_decimal_with_scale(DEFAULT_DECIMAL_SCALE)
    }

    /// Decimal expansion rounded half to even at `scale` fractional digits,
    /// with trailing zeros removed
    pub fn to_decimal_with_scale(&self, scale: u32) -> Decimal {
        if self.is_integer() {
            return Decimal::from_integer(self.numerator());
        }
        Decimal::from_ratio(self.numerator(), self.denominator().magnitude(), scale)
    }

    /// Nearest `f64`, or an infinity when the magnitude is out of range
    pub fn to_f64(&self) -> f64 {
        match (self.numerator().to_f64(), self.denominator().to_f64()) {
            (Some(numerator), Some(denominator))
                if numerator.is_finite() && denominator.is_finite() =>
            {
                numerator / denominator
            }
            _ => self.to_decimal().to_string().parse().unwrap_or(f64::NAN),
        }
    }
}

impl TryFrom<&Real> for BigInt {
    type Error = ValueError;

    fn try_from(value: &Real) -> ValueResult<Self> {
        value.to_bigint()
    }
}

impl TryFrom<&Real> for i32 {
    type Error = ValueError;

    fn try_from(value: &Real) -> ValueResult<Self> {
        value.to_i32()
    }
}

impl TryFrom<&Real> for i64 {
    type Error = ValueError;

    fn try_from(value: &Real) -> ValueResult<Self> {
        value.to_i64()
    }
}
