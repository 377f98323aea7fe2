// SPDX-License-Identifier: AGPL-3.0

//! Exact rational numbers
//!
//! [`Real`] is an arbitrary-precision fraction kept in canonical form: the
//! denominator is positive, numerator and denominator are coprime and zero is
//! `0/1`. It is the concrete value behind real-sorted model entries and
//! real literals handed to the solver layer.

mod arithmetic;
mod convert;
mod format;
mod macros;
mod parse;
mod real;
mod rounding;

pub use format::RealFormat;
pub use real::Real;
pub use rounding::MidpointRounding;

pub use zwrap_exceptions::{ValueError, ValueResult};
pub use zwrap_utils::{Decimal, DEFAULT_DECIMAL_SCALE};
