// SPDX-License-Identifier: AGPL-3.0

//! Bit slicing, width changes and concatenation

use num_bigint::BigUint;
use num_traits::Zero;

use zwrap_exceptions::{ValueError, ValueResult};

use crate::bitvec::check_size;
use crate::BitVec;

fn widened(size: u32, extra: u32) -> ValueResult<u32> {
    size.checked_add(extra).ok_or_else(|| {
        ValueError::argument(format!("Bit vector size {} + {} is too large", size, extra))
    })
}

impl BitVec {
    /// Bits `high..=low` as a vector of width `high - low + 1`
    pub fn extract(&self, high: u32, low: u32) -> ValueResult<BitVec> {
        if high >= self.size() {
            return Err(ValueError::argument(format!(
                "Extract high bit {} is out of range for {}-bit vector",
                high,
                self.size()
            )));
        }
        if low > high {
            return Err(ValueError::argument(format!(
                "Extract low bit {} is above high bit {}",
                low, high
            )));
        }
        Ok(BitVec::from_masked(self.value() >> low as usize, high - low + 1))
    }

    /// Zero-extend by `additional` bits
    pub fn extend(&self, additional: u32) -> ValueResult<BitVec> {
        let size = widened(self.size(), additional)?;
        Ok(BitVec::from_masked(self.value().clone(), size))
    }

    /// Sign-extend by `additional` bits
    pub fn signed_extend(&self, additional: u32) -> ValueResult<BitVec> {
        let size = widened(self.size(), additional)?;
        Ok(BitVec::from_signed(&self.to_signed_bigint(), size))
    }

    /// Change the width, zero-extending or truncating to the low bits
    pub fn resize(&self, new_size: u32) -> ValueResult<BitVec> {
        check_size(new_size)?;
        Ok(BitVec::from_masked(self.value().clone(), new_size))
    }

    /// Change the width, sign-extending or truncating to the low bits
    pub fn signed_resize(&self, new_size: u32) -> ValueResult<BitVec> {
        check_size(new_size)?;
        if new_size <= self.size() {
            return Ok(BitVec::from_masked(self.value().clone(), new_size));
        }
        Ok(BitVec::from_signed(&self.to_signed_bigint(), new_size))
    }

    /// `self` in the high bits, `low` in the low bits
    pub fn concat(&self, low: &BitVec) -> ValueResult<BitVec> {
        let size = widened(self.size(), low.size())?;
        let value = (self.value() << low.size() as usize) | low.value();
        Ok(BitVec::from_masked(value, size))
    }

    /// `count` copies of `self` side by side
    pub fn repeat(&self, count: u32) -> ValueResult<BitVec> {
        if count == 0 {
            return Err(ValueError::argument("Repeat count must be at least one"));
        }
        let size = self.size().checked_mul(count).ok_or_else(|| {
            ValueError::argument(format!(
                "Repeating {}-bit vector {} times is too large",
                self.size(),
                count
            ))
        })?;

        let mut value = BigUint::zero();
        for _ in 0..count {
            value = (value << self.size() as usize) | self.value();
        }
        Ok(BitVec::from_masked(value, size))
    }
}
