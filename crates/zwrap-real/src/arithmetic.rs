// SPDX-License-Identifier: AGPL-3.0

//! Field operations on [`Real`]
//!
//! Addition, subtraction, multiplication and negation cannot fail and are
//! exposed through the operator traits. Division and everything built on it
//! return a [`ValueResult`].

use std::cmp::Ordering;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{One, Zero};

use zwrap_exceptions::{ValueError, ValueResult};

use crate::Real;

fn add(lhs: &Real, rhs: &Real) -> Real {
    Real::canonical(
        lhs.numerator() * rhs.denominator() + rhs.numerator() * lhs.denominator(),
        lhs.denominator() * rhs.denominator(),
    )
}

fn sub(lhs: &Real, rhs: &Real) -> Real {
    Real::canonical(
        lhs.numerator() * rhs.denominator() - rhs.numerator() * lhs.denominator(),
        lhs.denominator() * rhs.denominator(),
    )
}

fn mul(lhs: &Real, rhs: &Real) -> Real {
    Real::canonical(
        lhs.numerator() * rhs.numerator(),
        lhs.denominator() * rhs.denominator(),
    )
}

/// Implement a binary operator for every owned/borrowed operand combination
macro_rules! forward_binop {
    ($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident, $func:ident) => {
        impl $imp<&Real> for &Real {
            type Output = Real;

            fn $method(self, rhs: &Real) -> Real {
                $func(self, rhs)
            }
        }

        impl $imp<Real> for Real {
            type Output = Real;

            fn $method(self, rhs: Real) -> Real {
                $func(&self, &rhs)
            }
        }

        impl $imp<&Real> for Real {
            type Output = Real;

            fn $method(self, rhs: &Real) -> Real {
                $func(&self, rhs)
            }
        }

        impl $imp<Real> for &Real {
            type Output = Real;

            fn $method(self, rhs: Real) -> Real {
                $func(self, &rhs)
            }
        }

        impl $assign_imp<&Real> for Real {
            fn $assign_method(&mut self, rhs: &Real) {
                *self = $func(self, rhs);
            }
        }

        impl $assign_imp<Real> for Real {
            fn $assign_method(&mut self, rhs: Real) {
                *self = $func(self, &rhs);
            }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign, add);
forward_binop!(Sub, sub, SubAssign, sub_assign, sub);
forward_binop!(Mul, mul, MulAssign, mul_assign, mul);

impl Neg for Real {
    type Output = Real;

    fn neg(self) -> Real {
        let (numerator, denominator) = self.into_parts();
        Real::canonical(-numerator, denominator)
    }
}

impl Neg for &Real {
    type Output = Real;

    fn neg(self) -> Real {
        Real::canonical(-self.numerator(), self.denominator().clone())
    }
}

impl Real {
    /// `self / rhs`, failing on a zero divisor
    pub fn div(&self, rhs: &Real) -> ValueResult<Real> {
        if rhs.is_zero() {
            return Err(ValueError::division("Division by zero is not allowed"));
        }
        Ok(Real::canonical(
            self.numerator() * rhs.denominator(),
            self.denominator() * rhs.numerator(),
        ))
    }

    /// `1 / self`
    pub fn reciprocal(&self) -> ValueResult<Real> {
        if self.is_zero() {
            return Err(ValueError::division("Cannot take reciprocal of zero"));
        }
        Ok(Real::canonical(
            self.denominator().clone(),
            self.numerator().clone(),
        ))
    }

    pub fn abs(&self) -> Real {
        if self.is_negative() {
            -self
        } else {
            self.clone()
        }
    }

    /// Integer power. Negative exponents take the reciprocal, so `0^-n` fails.
    pub fn pow(&self, exponent: i32) -> ValueResult<Real> {
        let power = self.pow_unsigned(exponent.unsigned_abs());
        if exponent < 0 {
            power.reciprocal()
        } else {
            Ok(power)
        }
    }

    fn pow_unsigned(&self, mut exponent: u32) -> Real {
        let mut result = Real::one();
        let mut base = self.clone();

        while exponent > 0 {
            if exponent & 1 == 1 {
                result = &result * &base;
            }
            exponent >>= 1;
            if exponent > 0 {
                base = &base * &base;
            }
        }

        result
    }
}

impl Ord for Real {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.denominator() == other.denominator() {
            return self.numerator().cmp(other.numerator());
        }
        let lhs = self.numerator() * other.denominator();
        let rhs = other.numerator() * self.denominator();
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Real {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Zero for Real {
    fn zero() -> Self {
        Real::from_integer(0)
    }

    fn is_zero(&self) -> bool {
        self.numerator().is_zero()
    }
}

impl One for Real {
    fn one() -> Self {
        Real::from_integer(1)
    }
}

impl Sum for Real {
    fn sum<I: Iterator<Item = Real>>(iter: I) -> Real {
        iter.fold(Real::zero(), |acc, item| acc + item)
    }
}

impl<'a> Sum<&'a Real> for Real {
    fn sum<I: Iterator<Item = &'a Real>>(iter: I) -> Real {
        iter.fold(Real::zero(), |acc, item| acc + item)
    }
}

impl Product for Real {
    fn product<I: Iterator<Item = Real>>(iter: I) -> Real {
        iter.fold(Real::one(), |acc, item| acc * item)
    }
}

impl<'a> Product<&'a Real> for Real {
    fn product<I: Iterator<Item = &'a Real>>(iter: I) -> Real {
        iter.fold(Real::one(), |acc, item| acc * item)
    }
}
