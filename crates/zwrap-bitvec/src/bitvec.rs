// SPDX-License-Identifier: AGPL-3.0

use std::fmt;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use zwrap_exceptions::{ValueError, ValueResult};
use zwrap_utils::parse_bigint;

use crate::{bigint_to_twos_complement, mask, normalize_biguint, to_signed_bigint};

/// Fixed-width two's-complement bit vector
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BitVecRepr", into = "BitVecRepr")]
pub struct BitVec {
    value: BigUint,
    size: u32,
}

/// Wire form: the magnitude travels as a decimal string so widths beyond
/// 64 bits survive formats without big integers
#[derive(Serialize, Deserialize)]
struct BitVecRepr {
    value: String,
    size: u32,
}

pub(crate) fn check_size(size: u32) -> ValueResult<()> {
    if size == 0 {
        return Err(ValueError::argument("Bit vector size must be greater than zero"));
    }
    Ok(())
}

impl BitVec {
    /// Create a `size`-bit vector holding `value mod 2^size`.
    ///
    /// Negative values wrap to their two's-complement pattern.
    pub fn new(value: impl Into<BigInt>, size: u32) -> ValueResult<Self> {
        check_size(size)?;
        Ok(Self {
            value: bigint_to_twos_complement(&value.into(), size),
            size,
        })
    }

    pub fn from_biguint(value: BigUint, size: u32) -> ValueResult<Self> {
        check_size(size)?;
        Ok(Self::from_masked(value, size))
    }

    pub fn from_i32(value: i32, size: u32) -> ValueResult<Self> {
        Self::new(value, size)
    }

    pub fn from_i64(value: i64, size: u32) -> ValueResult<Self> {
        Self::new(value, size)
    }

    pub fn from_u32(value: u32, size: u32) -> ValueResult<Self> {
        Self::new(value, size)
    }

    pub fn from_u64(value: u64, size: u32) -> ValueResult<Self> {
        Self::new(value, size)
    }

    /// Build from a magnitude of any width once `size` is known to be valid
    pub(crate) fn from_masked(value: BigUint, size: u32) -> Self {
        Self {
            value: normalize_biguint(value, size),
            size,
        }
    }

    /// Same as [`BitVec::from_masked`] for a signed intermediate result
    pub(crate) fn from_signed(value: &BigInt, size: u32) -> Self {
        Self {
            value: bigint_to_twos_complement(value, size),
            size,
        }
    }

    pub fn zero(size: u32) -> ValueResult<Self> {
        Self::from_biguint(BigUint::zero(), size)
    }

    pub fn one(size: u32) -> ValueResult<Self> {
        Self::from_biguint(BigUint::one(), size)
    }

    /// All bits set
    pub fn max_value(size: u32) -> ValueResult<Self> {
        check_size(size)?;
        Ok(Self::from_masked(mask(size), size))
    }

    /// Only the most significant bit set
    pub fn sign_bit(size: u32) -> ValueResult<Self> {
        check_size(size)?;
        Ok(Self::from_masked(BigUint::one() << (size as usize - 1), size))
    }

    /// Width in bits
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Unsigned magnitude
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    pub fn into_biguint(self) -> BigUint {
        self.value
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Whether the most significant bit is set
    pub fn is_sign_bit_set(&self) -> bool {
        self.value.bit(u64::from(self.size) - 1)
    }

    /// Bit at `index`, counting from the least significant bit
    pub fn bit(&self, index: u32) -> bool {
        index < self.size && self.value.bit(u64::from(index))
    }

    /// Two's-complement reading of the bit pattern
    pub fn to_signed_bigint(&self) -> BigInt {
        to_signed_bigint(&self.value, self.size)
    }

    pub fn to_unsigned_bigint(&self) -> BigInt {
        BigInt::from(self.value.clone())
    }

    pub fn to_bigint(&self, signed: bool) -> BigInt {
        if signed {
            self.to_signed_bigint()
        } else {
            self.to_unsigned_bigint()
        }
    }

    /// Error unless `other` has the same width
    pub(crate) fn check_same_size(&self, other: &BitVec) -> ValueResult<()> {
        if self.size != other.size {
            return Err(ValueError::SizeMismatch {
                left: self.size,
                right: other.size,
            });
        }
        Ok(())
    }
}

impl fmt::Debug for BitVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitVec({}, {})", self.value, self.size)
    }
}

impl TryFrom<BitVecRepr> for BitVec {
    type Error = ValueError;

    fn try_from(repr: BitVecRepr) -> ValueResult<Self> {
        let value = parse_bigint(&repr.value)?;
        if value.sign() == Sign::Minus {
            return Err(ValueError::parse("bit vector magnitude", repr.value));
        }
        BitVec::new(value, repr.size)
    }
}

impl From<BitVec> for BitVecRepr {
    fn from(bv: BitVec) -> Self {
        Self {
            value: bv.value.to_string(),
            size: bv.size,
        }
    }
}
