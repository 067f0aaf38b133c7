#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use anyhow::{bail, Context, Result as AnyResult};
use clap::Parser;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "memdrift-agent", version, about = "Synthetic per-team memory consumption metrics")]
pub struct Cli {
    /// All of the teams to emit metrics for
    #[arg(long, env = "TEAMS", value_delimiter = ',')]
    pub teams: Vec<String>,

    /// The largest that the metric can grow
    #[arg(long, default_value_t = 100_000)]
    pub max_size: u64,

    /// The highest that the metric can be increased by
    #[arg(long, default_value_t = 10_000)]
    pub max_increase: i64,

    /// The interval at which the metric increases
    #[arg(long, value_parser = humantime::parse_duration, default_value = "5s")]
    pub interval: Duration,

    /// The name of the server
    #[arg(long)]
    pub server_name: Option<String>,
}

/// Validated startup configuration, immutable for the process lifetime.
#[derive(Clone, Debug)]
pub struct Settings {
    pub teams: Vec<String>,
    pub max_size: u64,
    pub max_increase: u64,
    pub interval: Duration,
    pub server_name: String,
}

impl Settings {
    pub fn from_cli(cli: Cli) -> AnyResult<Self> {
        if cli.max_increase <= 0 {
            bail!("--max-increase must be a positive integer");
        }
        let max_increase = cli.max_increase as u64;
        // The largest possible step must fit under the ceiling, or counters
        // could land above it on a wraparound cycle.
        if max_increase - 1 > cli.max_size {
            bail!("--max-increase may exceed --max-size by at most one");
        }
        if cli.interval.is_zero() {
            bail!("--interval must be greater than zero");
        }
        if cli.teams.iter().any(|team| team.trim().is_empty()) {
            bail!("team names must be non-empty");
        }
        let server_name = match cli.server_name {
            Some(name) if !name.is_empty() => name,
            _ => resolve_server_name()?,
        };
        Ok(Self {
            teams: cli.teams,
            max_size: cli.max_size,
            max_increase,
            interval: cli.interval,
            server_name,
        })
    }
}

fn resolve_server_name() -> AnyResult<String> {
    let name = hostname::get().context("resolve host name")?;
    Ok(name.to_string_lossy().into_owned())
}
