// SPDX-License-Identifier: AGPL-3.0

//! Fixed-width bit vectors
//!
//! A [`BitVec`] stores an unsigned magnitude in `[0, 2^size)`. The signed
//! two's-complement reading is derived on demand, never stored. Binary
//! operations require both operands to have the same width; a mismatch is an
//! error and is never resolved by resizing.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

mod arithmetic;
mod bitvec;
mod bitwise;
mod compare;
mod convert;
mod format;
mod manipulation;

pub use bitvec::BitVec;
pub use convert::Endianness;
pub use format::BitVecFormat;

pub use zwrap_exceptions::{ValueError, ValueResult};

/// `2^bit_size - 1`
fn mask(bit_size: u32) -> BigUint {
    modulus(bit_size) - BigUint::one()
}

/// `2^bit_size`
fn modulus(bit_size: u32) -> BigUint {
    BigUint::one() << bit_size as usize
}

fn normalize_biguint(value: BigUint, bit_size: u32) -> BigUint {
    if value.bits() <= u64::from(bit_size) {
        value
    } else {
        value & mask(bit_size)
    }
}

/// Signed reading of a `bit_size`-bit pattern
fn to_signed_bigint(value: &BigUint, bit_size: u32) -> BigInt {
    if bit_size == 0 || !value.bit(u64::from(bit_size) - 1) {
        return BigInt::from(value.clone());
    }
    BigInt::from_biguint(Sign::Minus, modulus(bit_size) - value)
}

/// Reduce any integer into `[0, 2^bit_size)` with non-negative modulo
fn bigint_to_twos_complement(value: &BigInt, bit_size: u32) -> BigUint {
    let magnitude = normalize_biguint(value.magnitude().clone(), bit_size);
    match value.sign() {
        Sign::Minus if !magnitude.is_zero() => modulus(bit_size) - magnitude,
        _ => magnitude,
    }
}
