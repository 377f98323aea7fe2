// SPDX-License-Identifier: AGPL-3.0

//! `zwrap bv ...`

use clap::Subcommand;
use std::cmp::Ordering;

use zwrap_bitvec::{BitVec, BitVecFormat};
use zwrap_exceptions::ValueResult;
use zwrap_utils::parse_bigint;

use crate::real_cmd::{Binary, Unary};

/// Width, signedness and output format shared by every operand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BvStyle {
    pub size: u32,
    pub signed: bool,
    pub format: BitVecFormat,
}

#[derive(Subcommand, Debug, Clone)]
pub enum BvCommand {
    /// lhs + rhs (wrapping)
    Add(Binary),
    /// lhs - rhs (wrapping)
    Sub(Binary),
    /// lhs * rhs (wrapping)
    Mul(Binary),
    /// Unsigned quotient
    Div(Binary),
    /// Unsigned remainder
    Rem(Binary),
    /// Signed quotient
    Sdiv(Binary),
    /// Signed remainder (sign of dividend)
    Srem(Binary),
    /// Signed modulo (sign of divisor)
    Smod(Binary),
    And(Binary),
    Or(Binary),
    Xor(Binary),
    /// Bitwise complement
    Not(Unary),
    /// Shift left
    Shl {
        #[arg(allow_hyphen_values = true)]
        value: String,
        #[arg(allow_hyphen_values = true)]
        amount: i32,
    },
    /// Shift right, arithmetic with --signed
    Shr {
        #[arg(allow_hyphen_values = true)]
        value: String,
        #[arg(allow_hyphen_values = true)]
        amount: i32,
    },
    /// Rotate left
    Rotl {
        #[arg(allow_hyphen_values = true)]
        value: String,
        #[arg(allow_hyphen_values = true)]
        amount: i32,
    },
    /// Rotate right
    Rotr {
        #[arg(allow_hyphen_values = true)]
        value: String,
        #[arg(allow_hyphen_values = true)]
        amount: i32,
    },
    /// Bits high..=low
    Extract {
        #[arg(allow_hyphen_values = true)]
        value: String,
        high: u32,
        low: u32,
    },
    /// Zero-extend by the given number of bits
    Extend {
        #[arg(allow_hyphen_values = true)]
        value: String,
        bits: u32,
    },
    /// Sign-extend by the given number of bits
    Sext {
        #[arg(allow_hyphen_values = true)]
        value: String,
        bits: u32,
    },
    /// Change the width (sign-extends with --signed)
    Resize {
        #[arg(allow_hyphen_values = true)]
        value: String,
        new_size: u32,
    },
    /// Prints <, = or > (signed with --signed)
    Cmp(Binary),
    /// Render with an explicit format specifier
    Fmt {
        #[arg(allow_hyphen_values = true)]
        value: String,
        spec: String,
    },
}

/// Parse a decimal, `0x` or `0b` literal as a `size`-bit vector
pub fn parse_operand(text: &str, size: u32) -> ValueResult<BitVec> {
    let literal = text.trim();
    let lower = literal.to_ascii_lowercase();
    if lower.starts_with("0x") {
        BitVec::from_hex(literal, size)
    } else if lower.starts_with("0b") {
        BitVec::from_binary(literal, size)
    } else {
        BitVec::new(parse_bigint(literal)?, size)
    }
}

pub fn render(value: &BitVec, style: &BvStyle) -> String {
    if !style.signed {
        return value.format_with(style.format);
    }
    match style.format {
        BitVecFormat::Value => value.to_signed_bigint().to_string(),
        BitVecFormat::Decimal => format!("{} ({}-bit)", value.to_signed_bigint(), value.size()),
        format => value.format_with(format),
    }
}

fn ordering_symbol(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}

pub fn run(command: &BvCommand, style: &BvStyle) -> ValueResult<String> {
    let operand = |text: &str| parse_operand(text, style.size);
    let pair = |args: &Binary| -> ValueResult<(BitVec, BitVec)> {
        Ok((operand(&args.lhs)?, operand(&args.rhs)?))
    };

    let value = match command {
        BvCommand::Add(args) => {
            let (lhs, rhs) = pair(args)?;
            lhs.add(&rhs)?
        }
        BvCommand::Sub(args) => {
            let (lhs, rhs) = pair(args)?;
            lhs.sub(&rhs)?
        }
        BvCommand::Mul(args) => {
            let (lhs, rhs) = pair(args)?;
            lhs.mul(&rhs)?
        }
        BvCommand::Div(args) => {
            let (lhs, rhs) = pair(args)?;
            lhs.udiv(&rhs)?
        }
        BvCommand::Rem(args) => {
            let (lhs, rhs) = pair(args)?;
            lhs.urem(&rhs)?
        }
        BvCommand::Sdiv(args) => {
            let (lhs, rhs) = pair(args)?;
            lhs.sdiv(&rhs)?
        }
        BvCommand::Srem(args) => {
            let (lhs, rhs) = pair(args)?;
            lhs.srem(&rhs)?
        }
        BvCommand::Smod(args) => {
            let (lhs, rhs) = pair(args)?;
            lhs.smod(&rhs)?
        }
        BvCommand::And(args) => {
            let (lhs, rhs) = pair(args)?;
            lhs.and(&rhs)?
        }
        BvCommand::Or(args) => {
            let (lhs, rhs) = pair(args)?;
            lhs.or(&rhs)?
        }
        BvCommand::Xor(args) => {
            let (lhs, rhs) = pair(args)?;
            lhs.xor(&rhs)?
        }
        BvCommand::Not(args) => !operand(&args.value)?,
        BvCommand::Shl { value, amount } => operand(value)?.shl(*amount)?,
        BvCommand::Shr { value, amount } => operand(value)?.shr(*amount, style.signed)?,
        BvCommand::Rotl { value, amount } => operand(value)?.rotate_left(*amount)?,
        BvCommand::Rotr { value, amount } => operand(value)?.rotate_right(*amount)?,
        BvCommand::Extract { value, high, low } => operand(value)?.extract(*high, *low)?,
        BvCommand::Extend { value, bits } => operand(value)?.extend(*bits)?,
        BvCommand::Sext { value, bits } => operand(value)?.signed_extend(*bits)?,
        BvCommand::Resize { value, new_size } => {
            let value = operand(value)?;
            if style.signed {
                value.signed_resize(*new_size)?
            } else {
                value.resize(*new_size)?
            }
        }
        BvCommand::Cmp(args) => {
            let (lhs, rhs) = pair(args)?;
            let ordering = if style.signed {
                lhs.cmp_signed(&rhs)?
            } else {
                lhs.cmp_unsigned(&rhs)?
            };
            return Ok(ordering_symbol(ordering).to_string());
        }
        BvCommand::Fmt { value, spec } => return operand(value)?.format(spec),
    };
    Ok(render(&value, style))
}
