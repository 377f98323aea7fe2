// SPDX-License-Identifier: AGPL-3.0

use std::fmt;
use std::str::FromStr;

use num_traits::One;

use zwrap_exceptions::{ValueError, ValueResult};
use zwrap_utils::canonical_spec;

use crate::Real;

/// Textual rendering of a [`Real`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RealFormat {
    /// `num/den`, or just `num` for integers
    #[default]
    Fraction,
    /// Decimal expansion, see [`Real::to_decimal`]
    Decimal,
    /// Same output as `Fraction`
    General,
}

impl RealFormat {
    /// Single-letter specifier
    pub fn code(&self) -> &'static str {
        match self {
            RealFormat::Fraction => "F",
            RealFormat::Decimal => "D",
            RealFormat::General => "G",
        }
    }
}

impl fmt::Display for RealFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for RealFormat {
    type Err = ValueError;

    fn from_str(s: &str) -> ValueResult<Self> {
        match canonical_spec(s).as_str() {
            "F" | "FRACTION" => Ok(RealFormat::Fraction),
            "D" | "DECIMAL" => Ok(RealFormat::Decimal),
            "G" | "GENERAL" => Ok(RealFormat::General),
            _ => Err(ValueError::format(s)),
        }
    }
}

impl Real {
    /// Render with a format specifier such as `"F"` or `"decimal"`
    pub fn format(&self, spec: &str) -> ValueResult<String> {
        Ok(self.format_with(spec.parse()?))
    }

    pub fn format_with(&self, format: RealFormat) -> String {
        match format {
            RealFormat::Fraction | RealFormat::General => self.to_string(),
            RealFormat::Decimal => self.to_decimal().to_string(),
        }
    }
}

impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator().is_one() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}
