// SPDX-License-Identifier: AGPL-3.0

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed};
use serde::{Deserialize, Serialize};

use zwrap_exceptions::{ValueError, ValueResult};

use crate::Real;

/// Tie-breaking rule applied when a value lies exactly halfway between two integers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MidpointRounding {
    /// Banker's rounding
    #[default]
    ToEven,
    AwayFromZero,
    ToZero,
    ToNegativeInfinity,
    ToPositiveInfinity,
}

impl MidpointRounding {
    pub fn name(&self) -> &'static str {
        match self {
            MidpointRounding::ToEven => "ToEven",
            MidpointRounding::AwayFromZero => "AwayFromZero",
            MidpointRounding::ToZero => "ToZero",
            MidpointRounding::ToNegativeInfinity => "ToNegativeInfinity",
            MidpointRounding::ToPositiveInfinity => "ToPositiveInfinity",
        }
    }
}

impl fmt::Display for MidpointRounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MidpointRounding {
    type Err = ValueError;

    /// Case-insensitive; `-` and `_` separators are ignored, so `to-even`
    /// and `ToEven` name the same mode.
    fn from_str(s: &str) -> ValueResult<Self> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();

        match key.as_str() {
            "toeven" | "even" => Ok(MidpointRounding::ToEven),
            "awayfromzero" => Ok(MidpointRounding::AwayFromZero),
            "tozero" => Ok(MidpointRounding::ToZero),
            "tonegativeinfinity" | "floor" => Ok(MidpointRounding::ToNegativeInfinity),
            "topositiveinfinity" | "ceiling" => Ok(MidpointRounding::ToPositiveInfinity),
            _ => Err(ValueError::parse("rounding mode", s)),
        }
    }
}

impl Real {
    /// Round to the nearest integer, breaking exact ties with `mode`.
    ///
    /// Values that are not exactly halfway always go to the nearest integer,
    /// whatever the mode.
    pub fn round(&self, mode: MidpointRounding) -> BigInt {
        if self.is_integer() {
            return self.numerator().clone();
        }

        let negative = self.numerator().is_negative();
        let (quotient, remainder) = self.numerator().div_rem(self.denominator());
        let away = if negative {
            &quotient - BigInt::one()
        } else {
            &quotient + BigInt::one()
        };

        let twice_remainder = remainder.abs() << 1usize;
        match twice_remainder.cmp(self.denominator()) {
            Ordering::Less => quotient,
            Ordering::Greater => away,
            Ordering::Equal => match mode {
                MidpointRounding::ToEven => {
                    if quotient.is_even() {
                        quotient
                    } else {
                        away
                    }
                }
                MidpointRounding::AwayFromZero => away,
                MidpointRounding::ToZero => quotient,
                MidpointRounding::ToNegativeInfinity => {
                    if negative {
                        away
                    } else {
                        quotient
                    }
                }
                MidpointRounding::ToPositiveInfinity => {
                    if negative {
                        quotient
                    } else {
                        away
                    }
                }
            },
        }
    }
}
