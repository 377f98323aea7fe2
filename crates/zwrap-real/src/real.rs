// SPDX-License-Identifier: AGPL-3.0

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use serde::{Deserialize, Serialize};

use zwrap_exceptions::{ValueError, ValueResult};

/// Arbitrary-precision rational number in canonical form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Real {
    numerator: BigInt,
    denominator: BigInt,
}

impl Real {
    /// Create `numerator / denominator`, reduced to lowest terms.
    ///
    /// A zero denominator is a division error.
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> ValueResult<Self> {
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(ValueError::division("Denominator must be non-zero"));
        }
        Ok(Self::canonical(numerator.into(), denominator))
    }

    /// Reduce a fraction whose denominator is already known to be non-zero
    pub(crate) fn canonical(mut numerator: BigInt, mut denominator: BigInt) -> Self {
        debug_assert!(!denominator.is_zero());

        if numerator.is_zero() {
            return Self::zero();
        }
        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }

        let gcd = numerator.gcd(&denominator);
        if !gcd.is_one() {
            numerator /= &gcd;
            denominator /= &gcd;
        }

        Self {
            numerator,
            denominator,
        }
    }

    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self {
            numerator: value.into(),
            denominator: BigInt::one(),
        }
    }

    pub fn zero() -> Self {
        Self::from_integer(0)
    }

    pub fn one() -> Self {
        Self::from_integer(1)
    }

    pub fn minus_one() -> Self {
        Self::from_integer(-1)
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    /// Always strictly positive
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.numerator, self.denominator)
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    pub fn is_positive(&self) -> bool {
        self.numerator.is_positive()
    }

    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    pub fn signum(&self) -> Sign {
        self.numerator.sign()
    }
}

impl Default for Real {
    fn default() -> Self {
        Self::zero()
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Real {
                fn from(value: $t) -> Self {
                    Self::from_integer(value)
                }
            }
        )*
    };
}

impl_from_integer!(i32, i64, u32, u64, BigInt);
