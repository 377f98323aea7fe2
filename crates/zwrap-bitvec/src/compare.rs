// SPDX-License-Identifier: AGPL-3.0

use std::cmp::Ordering;

use zwrap_exceptions::ValueResult;

use crate::BitVec;

impl BitVec {
    /// Compare unsigned magnitudes
    pub fn cmp_unsigned(&self, other: &BitVec) -> ValueResult<Ordering> {
        self.check_same_size(other)?;
        Ok(self.value().cmp(other.value()))
    }

    /// Compare two's-complement readings
    pub fn cmp_signed(&self, other: &BitVec) -> ValueResult<Ordering> {
        self.check_same_size(other)?;
        Ok(self.to_signed_bigint().cmp(&other.to_signed_bigint()))
    }

    pub fn ult(&self, other: &BitVec) -> ValueResult<bool> {
        Ok(self.cmp_unsigned(other)?.is_lt())
    }

    pub fn ule(&self, other: &BitVec) -> ValueResult<bool> {
        Ok(self.cmp_unsigned(other)?.is_le())
    }

    pub fn ugt(&self, other: &BitVec) -> ValueResult<bool> {
        Ok(self.cmp_unsigned(other)?.is_gt())
    }

    pub fn uge(&self, other: &BitVec) -> ValueResult<bool> {
        Ok(self.cmp_unsigned(other)?.is_ge())
    }

    pub fn slt(&self, other: &BitVec) -> ValueResult<bool> {
        Ok(self.cmp_signed(other)?.is_lt())
    }

    pub fn sle(&self, other: &BitVec) -> ValueResult<bool> {
        Ok(self.cmp_signed(other)?.is_le())
    }

    pub fn sgt(&self, other: &BitVec) -> ValueResult<bool> {
        Ok(self.cmp_signed(other)?.is_gt())
    }

    pub fn sge(&self, other: &BitVec) -> ValueResult<bool> {
        Ok(self.cmp_signed(other)?.is_ge())
    }

    /// Smaller of two equally sized vectors
    pub fn min(&self, other: &BitVec, signed: bool) -> ValueResult<BitVec> {
        let ordering = self.compare(other, signed)?;
        Ok(if ordering.is_le() { self.clone() } else { other.clone() })
    }

    /// Larger of two equally sized vectors
    pub fn max(&self, other: &BitVec, signed: bool) -> ValueResult<BitVec> {
        let ordering = self.compare(other, signed)?;
        Ok(if ordering.is_ge() { self.clone() } else { other.clone() })
    }

    fn compare(&self, other: &BitVec, signed: bool) -> ValueResult<Ordering> {
        if signed {
            self.cmp_signed(other)
        } else {
            self.cmp_unsigned(other)
        }
    }
}

/// Unsigned order; vectors of different widths are unordered
impl PartialOrd for BitVec {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.cmp_unsigned(other).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bv(value: i64, size: u32) -> BitVec {
        BitVec::from_i64(value, size).unwrap()
    }

    #[test]
    fn test_unsigned_comparisons() {
        assert!(bv(1, 8).ult(&bv(2, 8)).unwrap());
        assert!(bv(2, 8).ule(&bv(2, 8)).unwrap());
        assert!(bv(-1, 8).ugt(&bv(1, 8)).unwrap());
        assert!(bv(0, 8).uge(&bv(0, 8)).unwrap());
    }

    #[test]
    fn test_signed_comparisons() {
        assert!(bv(-1, 8).slt(&bv(1, 8)).unwrap());
        assert!(bv(-128, 8).sle(&bv(127, 8)).unwrap());
        assert!(bv(5, 8).sgt(&bv(-5, 8)).unwrap());
        assert!(bv(-3, 8).sge(&bv(-3, 8)).unwrap());
    }

    #[test]
    fn test_comparison_size_mismatch() {
        assert!(bv(1, 8).ult(&bv(1, 16)).is_err());
        assert!(bv(1, 8).cmp_signed(&bv(1, 16)).is_err());
    }

    #[test]
    fn test_partial_ord() {
        assert!(bv(3, 8) < bv(4, 8));
        assert!(bv(-1, 8) > bv(4, 8));
        assert_eq!(bv(3, 8).partial_cmp(&bv(3, 16)), None);
    }

    #[test]
    fn test_min_max() {
        assert_eq!(bv(-1, 8).min(&bv(1, 8), false).unwrap(), bv(1, 8));
        assert_eq!(bv(-1, 8).min(&bv(1, 8), true).unwrap(), bv(-1, 8));
        assert_eq!(bv(-1, 8).max(&bv(1, 8), false).unwrap(), bv(-1, 8));
        assert_eq!(bv(-1, 8).max(&bv(1, 8), true).unwrap(), bv(1, 8));
        assert!(bv(1, 8).max(&bv(1, 4), false).is_err());
    }
}
