// SPDX-License-Identifier: AGPL-3.0

use std::ops::Not;

use num_bigint::BigUint;
use num_traits::Zero;

use zwrap_exceptions::{ValueError, ValueResult};

use crate::{mask, BitVec};

/// Validate a shift or rotation amount
fn check_amount(amount: i32, what: &str) -> ValueResult<u32> {
    u32::try_from(amount).map_err(|_| {
        ValueError::argument(format!("{} amount must be non-negative, got {}", what, amount))
    })
}

impl BitVec {
    pub fn and(&self, other: &BitVec) -> ValueResult<BitVec> {
        self.check_same_size(other)?;
        Ok(BitVec::from_masked(self.value() & other.value(), self.size()))
    }

    pub fn or(&self, other: &BitVec) -> ValueResult<BitVec> {
        self.check_same_size(other)?;
        Ok(BitVec::from_masked(self.value() | other.value(), self.size()))
    }

    pub fn xor(&self, other: &BitVec) -> ValueResult<BitVec> {
        self.check_same_size(other)?;
        Ok(BitVec::from_masked(self.value() ^ other.value(), self.size()))
    }

    /// Shift left by `amount` bits, discarding bits shifted past the top
    pub fn shl(&self, amount: i32) -> ValueResult<BitVec> {
        let amount = check_amount(amount, "Shift")?;
        if amount >= self.size() {
            return Ok(BitVec::from_masked(BigUint::zero(), self.size()));
        }
        Ok(BitVec::from_masked(self.value() << amount as usize, self.size()))
    }

    /// Shift right by `amount` bits.
    ///
    /// A logical shift fills with zeros; an arithmetic (`signed`) shift
    /// replicates the sign bit.
    pub fn shr(&self, amount: i32, signed: bool) -> ValueResult<BitVec> {
        let amount = check_amount(amount, "Shift")?;
        if signed {
            // floor shift on the signed reading keeps the sign
            let shifted = self.to_signed_bigint() >> amount.min(self.size()) as usize;
            return Ok(BitVec::from_signed(&shifted, self.size()));
        }
        if amount >= self.size() {
            return Ok(BitVec::from_masked(BigUint::zero(), self.size()));
        }
        Ok(BitVec::from_masked(self.value() >> amount as usize, self.size()))
    }

    pub fn rotate_left(&self, amount: i32) -> ValueResult<BitVec> {
        let amount = check_amount(amount, "Rotation")? % self.size();
        if amount == 0 {
            return Ok(self.clone());
        }
        let rotated =
            (self.value() << amount as usize) | (self.value() >> (self.size() - amount) as usize);
        Ok(BitVec::from_masked(rotated, self.size()))
    }

    pub fn rotate_right(&self, amount: i32) -> ValueResult<BitVec> {
        let amount = check_amount(amount, "Rotation")? % self.size();
        if amount == 0 {
            return Ok(self.clone());
        }
        let rotated =
            (self.value() >> amount as usize) | (self.value() << (self.size() - amount) as usize);
        Ok(BitVec::from_masked(rotated, self.size()))
    }

    /// Number of set bits
    pub fn popcount(&self) -> u32 {
        self.value().count_ones() as u32
    }

    pub fn count_leading_zeros(&self) -> u32 {
        self.size() - self.value().bits() as u32
    }

    pub fn count_trailing_zeros(&self) -> u32 {
        match self.value().trailing_zeros() {
            Some(count) => count as u32,
            None => self.size(),
        }
    }
}

impl Not for &BitVec {
    type Output = BitVec;

    fn not(self) -> BitVec {
        BitVec::from_masked(self.value() ^ mask(self.size()), self.size())
    }
}

impl Not for BitVec {
    type Output = BitVec;

    fn not(self) -> BitVec {
        !&self
    }
}
