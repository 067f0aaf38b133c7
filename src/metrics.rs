#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use anyhow::{Context, Result as AnyResult};
use prometheus::{Encoder, GaugeVec, Opts, Registry, TextEncoder};

pub const MEMORY_GAUGE_NAME: &str = "process_memory_total_bytes";
const MEMORY_GAUGE_HELP: &str = "The total amount of memory being used by this process";

/// One currently-exposed gauge sample.
#[derive(Clone, Debug, PartialEq)]
pub struct TeamSample {
    pub server: String,
    pub team: String,
    pub value: f64,
}

#[derive(Clone)]
pub struct Metrics {
    pub registry: Registry,
    pub memory_total_bytes: GaugeVec,
}

impl Metrics {
    pub fn new() -> AnyResult<Self> {
        let registry = Registry::new();
        let memory_total_bytes = GaugeVec::new(
            Opts::new(MEMORY_GAUGE_NAME, MEMORY_GAUGE_HELP),
            &["server", "team"],
        )
        .context("create memory gauge")?;
        registry
            .register(Box::new(memory_total_bytes.clone()))
            .context("register memory gauge")?;
        Ok(Self {
            registry,
            memory_total_bytes,
        })
    }

    /// Overwrites the gauge child for one (server, team) label pair.
    pub fn record_team_bytes(&self, server: &str, team: &str, value: u64) {
        self.memory_total_bytes
            .with_label_values(&[server, team])
            .set(value as f64);
    }

    /// Every (server, team, value) triple currently set on the memory gauge.
    pub fn snapshot(&self) -> Vec<TeamSample> {
        let mut samples = Vec::new();
        for family in self.registry.gather() {
            if family.get_name() != MEMORY_GAUGE_NAME {
                continue;
            }
            for metric in family.get_metric() {
                let mut server = String::new();
                let mut team = String::new();
                for pair in metric.get_label() {
                    match pair.get_name() {
                        "server" => server = pair.get_value().to_owned(),
                        "team" => team = pair.get_value().to_owned(),
                        _ => {}
                    }
                }
                samples.push(TeamSample {
                    server,
                    team,
                    value: metric.get_gauge().get_value(),
                });
            }
        }
        samples
    }

    pub fn encode_text(&self) -> AnyResult<Vec<u8>> {
        let mut buf = Vec::new();
        let encoder = TextEncoder::new();
        let mf = self.registry.gather();
        encoder.encode(&mf, &mut buf).context("encode metrics")?;
        Ok(buf)
    }
}
