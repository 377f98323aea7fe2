// SPDX-License-Identifier: AGPL-3.0

use std::fmt;
use std::str::FromStr;

use zwrap_exceptions::{ValueError, ValueResult};
use zwrap_utils::{canonical_spec, to_binary_padded, to_hex_upper};

use crate::BitVec;

/// Textual rendering of a [`BitVec`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BitVecFormat {
    /// `42 (8-bit)`
    Decimal,
    /// `0b00101010 (8-bit)`
    Binary,
    /// `0x2A (8-bit)`
    Hex,
    /// `42`
    #[default]
    Value,
}

impl BitVecFormat {
    /// Single-letter specifier
    pub fn code(&self) -> &'static str {
        match self {
            BitVecFormat::Decimal => "D",
            BitVecFormat::Binary => "B",
            BitVecFormat::Hex => "X",
            BitVecFormat::Value => "V",
        }
    }
}

impl fmt::Display for BitVecFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for BitVecFormat {
    type Err = ValueError;

    fn from_str(s: &str) -> ValueResult<Self> {
        match canonical_spec(s).as_str() {
            "D" | "DECIMAL" => Ok(BitVecFormat::Decimal),
            "B" | "BINARY" => Ok(BitVecFormat::Binary),
            "X" | "HEX" => Ok(BitVecFormat::Hex),
            "V" | "VALUE" => Ok(BitVecFormat::Value),
            _ => Err(ValueError::format(s)),
        }
    }
}

impl BitVec {
    /// MSB-first binary digits, exactly `size` characters
    pub fn to_binary_string(&self) -> String {
        to_binary_padded(self.value(), self.size())
    }

    /// Upper-case hex digits, zero-padded to `ceil(size / 4)` characters
    pub fn to_hex_string(&self) -> String {
        let width = (self.size() as usize + 3) / 4;
        format!("{:0>width$}", to_hex_upper(self.value()), width = width)
    }

    /// Render with a specifier such as `"X"` or `"binary"`
    pub fn format(&self, spec: &str) -> ValueResult<String> {
        Ok(self.format_with(spec.parse()?))
    }

    pub fn format_with(&self, format: BitVecFormat) -> String {
        match format {
            BitVecFormat::Decimal => format!("{} ({}-bit)", self.value(), self.size()),
            BitVecFormat::Binary => format!("0b{} ({}-bit)", self.to_binary_string(), self.size()),
            BitVecFormat::Hex => format!("0x{} ({}-bit)", to_hex_upper(self.value()), self.size()),
            BitVecFormat::Value => self.value().to_string(),
        }
    }
}

impl fmt::Display for BitVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.value(), f)
    }
}

impl fmt::Binary for BitVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(self.value(), f)
    }
}

impl fmt::LowerHex for BitVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self.value(), f)
    }
}

impl fmt::UpperHex for BitVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(self.value(), f)
    }
}
