//! hamburger-cli — Query Hamburger swap fees, reserves and trade-mining rewards.
//!
//! Reads a JSON snapshot of the swap and mining contract tables and prints
//! the result of one lookup per invocation.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hamburger::{ChainSnapshot, Hamburger, LibraryConfig, StateReader};
use hamburger_core::asset::{Asset, Symbol};
use hamburger_core::clock::{FixedClock, SystemClock};
use hamburger_core::traits::Clock;
use tracing::{error, info};

/// Read-only queries over Hamburger contract state.
#[derive(Parser, Debug)]
#[command(name = "hamburger-cli", version, about = "Hamburger swap and trade-mining queries")]
struct Cli {
    /// JSON snapshot of the contract tables
    #[arg(long)]
    state: PathBuf,

    /// Config file (default: <config dir>/hamburger/config.toml, if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Evaluate at this Unix second instead of the wall clock
    #[arg(long)]
    now: Option<u32>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Log output format
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    log_format: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Print the total swap fee (trade + protocol), in basis points.
    #[command(name = "getfee")]
    GetFee,
    /// Print a pair's reserves, the one denominated in SORT first.
    #[command(name = "getreserves")]
    GetReserves {
        pair_id: u64,
        /// Sort symbol, e.g. "4,EOS"
        sort: Symbol,
    },
    /// Print the projected HBG reward for trading FROM into TO.
    #[command(name = "getrewards")]
    GetRewards {
        pair_id: u64,
        /// Amount given up, e.g. "1.0000 EOS"
        from: Asset,
        /// Amount received, e.g. "3.2100 USDT"
        to: Asset,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level, &cli.log_format);

    if let Err(e) = run(cli) {
        error!("{e:#}");
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = LibraryConfig::load(cli.config.as_deref()).context("failed to load config")?;
    let state = ChainSnapshot::load(&cli.state)
        .with_context(|| format!("failed to read snapshot {}", cli.state.display()))?
        .to_state(&config)
        .context("invalid snapshot")?;
    info!(
        swap = %config.swap_contract,
        mine = %config.mine_contract,
        pairs = state.pair_count(),
        pools = state.pool_count(),
        "state loaded"
    );

    match cli.now {
        Some(now) => execute(&Hamburger::with_clock(state, FixedClock(now)), cli.command),
        None => execute(&Hamburger::with_clock(state, SystemClock), cli.command),
    }
}

fn execute<S: StateReader, C: Clock>(lib: &Hamburger<S, C>, command: Command) -> Result<()> {
    match command {
        Command::GetFee => println!("{}", lib.get_fee()),
        Command::GetReserves { pair_id, sort } => {
            let (reserve_in, reserve_out) = lib.get_reserves(pair_id, &sort)?;
            println!("{reserve_in}");
            println!("{reserve_out}");
        }
        Command::GetRewards { pair_id, from, to } => {
            println!("{}", lib.get_rewards(pair_id, &from, &to));
        }
    }
    Ok(())
}

/// Initialize tracing on stderr; stdout carries query results.
///
/// `format = "json"` emits structured JSON lines. `RUST_LOG` overrides `level_str`.
fn init_logging(level_str: &str, format: &str) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_str));

    if format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
            .init();
    }
}
