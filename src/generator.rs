#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::config::Settings;
use crate::domain::{draw_step, CounterTable};
use crate::metrics::Metrics;

/// Background task that advances every team counter once per interval and
/// publishes the result. Sole writer of the counter table.
pub struct Generator {
    settings: Settings,
    counters: CounterTable,
    metrics: Metrics,
    cancel: CancellationToken,
}

impl Generator {
    pub fn new(
        settings: Settings,
        counters: CounterTable,
        metrics: Metrics,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            settings,
            counters,
            metrics,
            cancel,
        }
    }

    /// Runs until the cancellation token fires. The first cycle executes
    /// immediately; each later cycle waits one interval. A cycle is
    /// synchronous, so cancellation never lands between a counter update and
    /// its publish.
    pub async fn run(self) {
        let mut rng = SmallRng::from_entropy();
        let mut ticker = tokio::time::interval(self.settings.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        info!(
            teams = self.settings.teams.len(),
            interval = ?self.settings.interval,
            "generator started"
        );
        let cancel = self.cancel.clone();
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    info!("generator stopped");
                    break;
                }
                _ = ticker.tick() => {
                    self.advance_all(&mut rng);
                }
            }
        }
    }

    fn advance_all<R: Rng>(&self, rng: &mut R) {
        for team in &self.settings.teams {
            let step = draw_step(rng, self.settings.max_increase);
            if let Some(value) = self.counters.advance(team, step, self.settings.max_size) {
                self.metrics
                    .record_team_bytes(&self.settings.server_name, team, value);
                debug!(team = %team, step, value, "team counter advanced");
            }
        }
    }
}
