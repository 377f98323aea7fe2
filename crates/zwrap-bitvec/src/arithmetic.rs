// SPDX-License-Identifier: AGPL-3.0

//! Modular arithmetic
//!
//! Unsigned operations work on the magnitudes and wrap at `2^size`. The signed
//! division family goes through the two's-complement reading and re-masks
//! its result.

use std::ops::Neg;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};

use zwrap_exceptions::{ValueError, ValueResult};

use crate::BitVec;

impl BitVec {
    pub fn add(&self, other: &BitVec) -> ValueResult<BitVec> {
        self.check_same_size(other)?;
        Ok(BitVec::from_masked(self.value() + other.value(), self.size()))
    }

    pub fn sub(&self, other: &BitVec) -> ValueResult<BitVec> {
        self.check_same_size(other)?;
        let difference = self.to_unsigned_bigint() - other.to_unsigned_bigint();
        Ok(BitVec::from_signed(&difference, self.size()))
    }

    pub fn mul(&self, other: &BitVec) -> ValueResult<BitVec> {
        self.check_same_size(other)?;
        Ok(BitVec::from_masked(self.value() * other.value(), self.size()))
    }

    /// Unsigned quotient
    pub fn udiv(&self, other: &BitVec) -> ValueResult<BitVec> {
        self.check_divisor(other)?;
        Ok(BitVec::from_masked(self.value() / other.value(), self.size()))
    }

    /// Unsigned remainder
    pub fn urem(&self, other: &BitVec) -> ValueResult<BitVec> {
        self.check_divisor(other)?;
        Ok(BitVec::from_masked(self.value() % other.value(), self.size()))
    }

    /// Signed quotient, truncated toward zero
    pub fn sdiv(&self, other: &BitVec) -> ValueResult<BitVec> {
        self.check_divisor(other)?;
        let quotient = self.to_signed_bigint() / other.to_signed_bigint();
        Ok(BitVec::from_signed(&quotient, self.size()))
    }

    /// Signed remainder, sign follows the dividend
    pub fn srem(&self, other: &BitVec) -> ValueResult<BitVec> {
        self.check_divisor(other)?;
        let remainder = self.to_signed_bigint() % other.to_signed_bigint();
        Ok(BitVec::from_signed(&remainder, self.size()))
    }

    /// Signed modulo, sign follows the divisor
    pub fn smod(&self, other: &BitVec) -> ValueResult<BitVec> {
        self.check_divisor(other)?;
        let divisor = other.to_signed_bigint();
        let mut remainder = self.to_signed_bigint() % &divisor;
        if !remainder.is_zero() && remainder.is_negative() != divisor.is_negative() {
            remainder += &divisor;
        }
        Ok(BitVec::from_signed(&remainder, self.size()))
    }

    fn check_divisor(&self, other: &BitVec) -> ValueResult<()> {
        self.check_same_size(other)?;
        if other.is_zero() {
            return Err(ValueError::division(format!(
                "Cannot divide {}-bit vector by zero",
                self.size()
            )));
        }
        Ok(())
    }

    /// Quotient and remainder of the unsigned magnitudes in one step
    pub fn udiv_rem(&self, other: &BitVec) -> ValueResult<(BitVec, BitVec)> {
        self.check_divisor(other)?;
        let (quotient, remainder) = self.value().div_rem(other.value());
        Ok((
            BitVec::from_masked(quotient, self.size()),
            BitVec::from_masked(remainder, self.size()),
        ))
    }
}

impl Neg for &BitVec {
    type Output = BitVec;

    /// Two's-complement negation
    fn neg(self) -> BitVec {
        BitVec::from_signed(&-BigInt::from(self.value().clone()), self.size())
    }
}

impl Neg for BitVec {
    type Output = BitVec;

    fn neg(self) -> BitVec {
        -&self
    }
}
