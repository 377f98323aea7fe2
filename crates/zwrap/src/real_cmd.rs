// SPDX-License-Identifier: AGPL-3.0

//! `zwrap real ...`

use clap::{Args, Subcommand};
use std::cmp::Ordering;

use zwrap_exceptions::ValueResult;
use zwrap_real::{MidpointRounding, Real, RealFormat};

/// How rationals are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RealStyle {
    pub format: RealFormat,
    pub decimal_scale: u32,
    pub rounding: MidpointRounding,
}

#[derive(Args, Debug, Clone)]
pub struct Binary {
    #[arg(allow_hyphen_values = true)]
    pub lhs: String,
    #[arg(allow_hyphen_values = true)]
    pub rhs: String,
}

#[derive(Args, Debug, Clone)]
pub struct Unary {
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

#[derive(Subcommand, Debug, Clone)]
pub enum RealCommand {
    /// lhs + rhs
    Add(Binary),
    /// lhs - rhs
    Sub(Binary),
    /// lhs * rhs
    Mul(Binary),
    /// lhs / rhs
    Div(Binary),
    /// -value
    Neg(Unary),
    /// |value|
    Abs(Unary),
    /// 1 / value
    Recip(Unary),
    /// value ^ exponent
    Pow {
        #[arg(allow_hyphen_values = true)]
        value: String,
        #[arg(allow_hyphen_values = true)]
        exponent: i32,
    },
    /// Nearest integer, ties broken by --rounding
    Round(Unary),
    /// Prints <, = or >
    Cmp(Binary),
    /// Render with an explicit format specifier
    Fmt {
        #[arg(allow_hyphen_values = true)]
        value: String,
        spec: String,
    },
    /// Print the canonical form of a literal
    Parse(Unary),
}

fn parse(text: &str) -> ValueResult<Real> {
    text.parse()
}

pub fn render(value: &Real, style: &RealStyle) -> String {
    match style.format {
        RealFormat::Decimal => value.to_decimal_with_scale(style.decimal_scale).to_string(),
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

pub fn run(command: &RealCommand, style: &RealStyle) -> ValueResult<String> {
    let value = match command {
        RealCommand::Add(args) => parse(&args.lhs)? + parse(&args.rhs)?,
        RealCommand::Sub(args) => parse(&args.lhs)? - parse(&args.rhs)?,
        RealCommand::Mul(args) => parse(&args.lhs)? * parse(&args.rhs)?,
        RealCommand::Div(args) => parse(&args.lhs)?.div(&parse(&args.rhs)?)?,
        RealCommand::Neg(args) => -parse(&args.value)?,
        RealCommand::Abs(args) => parse(&args.value)?.abs(),
        RealCommand::Recip(args) => parse(&args.value)?.reciprocal()?,
        RealCommand::Pow { value, exponent } => parse(value)?.pow(*exponent)?,
        RealCommand::Round(args) => {
            return Ok(parse(&args.value)?.round(style.rounding).to_string());
        }
        RealCommand::Cmp(args) => {
            let ordering = parse(&args.lhs)?.cmp(&parse(&args.rhs)?);
            return Ok(ordering_symbol(ordering).to_string());
        }
        RealCommand::Fmt { value, spec } => return parse(value)?.format(spec),
        RealCommand::Parse(args) => parse(&args.value)?,
    };
    Ok(render(&value, style))
}
