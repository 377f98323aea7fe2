// SPDX-License-Identifier: AGPL-3.0

//! Configuration for the `zwrap` command line
//!
//! Options come from the command line and, optionally, a TOML file whose
//! `[global]` table uses the same option names. Command line values win.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use zwrap_bitvec::BitVecFormat;
use zwrap_real::{MidpointRounding, RealFormat, DEFAULT_DECIMAL_SCALE};

/// File picked up from the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "zwrap.toml";

/// Effective options after the config file and command line are combined
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub real_format: String,
    pub bitvec_format: String,
    pub rounding: String,
    pub decimal_scale: u32,
    pub size: u32,
    pub signed: bool,
    pub verbose: u8,
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            real_format: "F".to_string(),
            bitvec_format: "V".to_string(),
            rounding: "ToEven".to_string(),
            decimal_scale: DEFAULT_DECIMAL_SCALE,
            size: 32,
            signed: false,
            verbose: 0,
            log_json: false,
        }
    }
}

/// Command line options; `None` leaves the file (or built-in) value alone
#[derive(Debug, Clone, Default, PartialEq, Eq, Parser)]
#[clap(name = "zwrap", version, about = "Exact rational and bit-vector calculator")]
pub struct CliConfig {
    /// Path to the config file
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format for rationals (F, D, G) [default: F]
    #[clap(long, global = true)]
    pub real_format: Option<String>,

    /// Output format for bit vectors (D, B, X, V) [default: V]
    #[clap(long, global = true)]
    pub bitvec_format: Option<String>,

    /// Tie-breaking rule for `real round` [default: ToEven]
    #[clap(long, global = true)]
    pub rounding: Option<String>,

    /// Fractional digits when printing rationals in decimal form [default: 28]
    #[clap(long, global = true)]
    pub decimal_scale: Option<u32>,

    /// Bit width for `bv` operands [default: 32]
    #[clap(long, short = 's', global = true)]
    pub size: Option<u32>,

    /// Read and print `bv` values as signed (`--signed=false` to turn off)
    #[clap(
        long,
        global = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub signed: Option<bool>,

    /// Verbosity level (-v, -vv, -vvv)
    #[clap(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Emit logs as JSON (`--log-json=false` to turn off)
    #[clap(
        long,
        global = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub log_json: Option<bool>,
}

impl CliConfig {
    /// Explicit `--config`, else `zwrap.toml` in `dir` if present
    pub fn resolve_config_path(&self, dir: &Path) -> Option<PathBuf> {
        if let Some(config) = &self.config {
            return Some(config.clone());
        }
        let default_path = dir.join(DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            Some(default_path)
        } else {
            None
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let parsed: TomlConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        parsed
            .to_config()
            .with_context(|| format!("Invalid config file: {:?}", path))
    }

    /// Override with every value given on the command line
    pub fn merge(&mut self, cli: &CliConfig) {
        if let Some(real_format) = &cli.real_format {
            self.real_format = real_format.clone();
        }
        if let Some(bitvec_format) = &cli.bitvec_format {
            self.bitvec_format = bitvec_format.clone();
        }
        if let Some(rounding) = &cli.rounding {
            self.rounding = rounding.clone();
        }
        if let Some(decimal_scale) = cli.decimal_scale {
            self.decimal_scale = decimal_scale;
        }
        if let Some(size) = cli.size {
            self.size = size;
        }
        if let Some(signed) = cli.signed {
            self.signed = signed;
        }
        if cli.verbose > 0 {
            self.verbose = cli.verbose;
        }
        if let Some(log_json) = cli.log_json {
            self.log_json = log_json;
        }
    }

    pub fn parse_real_format(&self) -> Result<RealFormat> {
        self.real_format
            .parse()
            .with_context(|| format!("Invalid real_format: {}", self.real_format))
    }

    pub fn parse_bitvec_format(&self) -> Result<BitVecFormat> {
        self.bitvec_format
            .parse()
            .with_context(|| format!("Invalid bitvec_format: {}", self.bitvec_format))
    }

    pub fn parse_rounding(&self) -> Result<MidpointRounding> {
        self.rounding
            .parse()
            .with_context(|| format!("Invalid rounding: {}", self.rounding))
    }

    /// Check every option that has a restricted value set
    pub fn validate(&self) -> Result<()> {
        self.parse_real_format()?;
        self.parse_bitvec_format()?;
        self.parse_rounding()?;
        if self.size == 0 {
            anyhow::bail!("size must be greater than zero");
        }
        Ok(())
    }
}

/// TOML configuration structure (for parsing from file)
#[derive(Debug, Deserialize)]
struct TomlConfig {
    #[serde(default)]
    global: HashMap<String, toml::Value>,
}

impl TomlConfig {
    fn to_config(self) -> Result<Config> {
        let mut config = Config::default();

        for (key, value) in self.global {
            match key.replace('-', "_").as_str() {
                "real_format" => config.real_format = parse_toml_string(&value)?,
                "bitvec_format" => config.bitvec_format = parse_toml_string(&value)?,
                "rounding" => config.rounding = parse_toml_string(&value)?,
                "decimal_scale" => config.decimal_scale = parse_toml_u32(&value)?,
                "size" => config.size = parse_toml_u32(&value)?,
                "signed" => config.signed = parse_toml_bool(&value)?,
                "verbose" => config.verbose = parse_toml_u8(&value)?,
                "log_json" => config.log_json = parse_toml_bool(&value)?,
                _ => zwrap_logs::warn_unique(&format!("Ignoring unknown config key: {}", key)),
            }
        }

        Ok(config)
    }
}

fn parse_toml_string(value: &toml::Value) -> Result<String> {
    value
        .as_str()
        .map(|s| s.to_string())
        .ok_or_else(|| anyhow::anyhow!("Expected string, got {:?}", value))
}

fn parse_toml_bool(value: &toml::Value) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| anyhow::anyhow!("Expected bool, got {:?}", value))
}

fn parse_toml_u8(value: &toml::Value) -> Result<u8> {
    value
        .as_integer()
        .and_then(|i| u8::try_from(i).ok())
        .ok_or_else(|| anyhow::anyhow!("Expected u8, got {:?}", value))
}

fn parse_toml_u32(value: &toml::Value) -> Result<u32> {
    value
        .as_integer()
        .and_then(|i| u32::try_from(i).ok())
        .ok_or_else(|| anyhow::anyhow!("Expected u32, got {:?}", value))
}
