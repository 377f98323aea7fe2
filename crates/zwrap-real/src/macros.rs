// SPDX-License-Identifier: AGPL-3.0

/// Shorthand for writing rational constants.
///
/// `real!(n)` is the integer `n`, `real!(n, d)` is `n / d`.
///
/// # Panics
///
/// When the denominator is zero.
#[macro_export]
macro_rules! real {
    ($value:expr) => {
        $crate::Real::from_integer($value)
    };
    ($numerator:expr, $denominator:expr) => {
        $crate::Real::new($numerator, $denominator).expect("real! denominator must be non-zero")
    };
}
