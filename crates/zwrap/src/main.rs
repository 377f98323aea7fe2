// SPDX-License-Identifier: AGPL-3.0

//! zwrap - exact rational and bit-vector calculator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use zwrap_config::{CliConfig, Config};

mod bv_cmd;
mod real_cmd;
mod report;

use bv_cmd::{BvCommand, BvStyle};
use real_cmd::{RealCommand, RealStyle};
use report::MainResult;

#[derive(Parser, Debug)]
#[command(name = "zwrap", version, about = "Exact rational and bit-vector calculator")]
struct Cli {
    #[command(flatten)]
    config: CliConfig,

    /// Print the result as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rational number operations
    #[command(subcommand)]
    Real(RealCommand),
    /// Bit-vector operations (width from --size)
    #[command(subcommand)]
    Bv(BvCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?;

    zwrap_logs::init_tracing(config.verbose, config.log_json);
    debug!(?config, "effective configuration");

    let result = evaluate(&cli.command, &config)?;
    print_result(&result, cli.json)?;
    std::process::exit(result.exitcode)
}

/// File configuration (if any) overridden by command line values
fn load_config(cli: &CliConfig) -> Result<Config> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let mut config = match cli.resolve_config_path(&cwd) {
        Some(path) => {
            info!(path = %path.display(), "loading config file");
            Config::from_file(&path)?
        }
        None => Config::default(),
    };
    config.merge(cli);
    config.validate()?;
    Ok(config)
}

fn evaluate(command: &Command, config: &Config) -> Result<MainResult> {
    let outcome = match command {
        Command::Real(command) => {
            let style = RealStyle {
                format: config.parse_real_format()?,
                decimal_scale: config.decimal_scale,
                rounding: config.parse_rounding()?,
            };
            real_cmd::run(command, &style)
        }
        Command::Bv(command) => {
            let style = BvStyle {
                size: config.size,
                signed: config.signed,
                format: config.parse_bitvec_format()?,
            };
            bv_cmd::run(command, &style)
        }
    };

    Ok(match outcome {
        Ok(output) => MainResult::success(output),
        Err(err) => {
            debug!(error = %err, kind = err.kind().name(), "evaluation failed");
            zwrap_logs::report_error(&err);
            MainResult::failure(&err)
        }
    })
}

fn print_result(result: &MainResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(result)?);
    } else if let Some(output) = &result.output {
        println!("{}", output);
    }
    Ok(())
}
