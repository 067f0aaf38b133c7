#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use parking_lot::Mutex;
use rand::Rng;
use std::collections::HashMap;
use std::sync::Arc;

/// Draws one random step, uniform over `[0, max_increase)`.
pub fn draw_step<R: Rng>(rng: &mut R, max_increase: u64) -> u64 {
    rng.gen_range(0..max_increase)
}

/// Advances a counter by `step`, wrapping once the ceiling would be
/// exceeded: the counter resets to zero and the step still lands, so the
/// post-wrap value is `step` itself rather than zero. Repeated cycles give
/// each team a sawtooth-shaped series.
pub fn next_value(current: u64, step: u64, max_size: u64) -> u64 {
    match current.checked_add(step) {
        Some(candidate) if candidate <= max_size => candidate,
        _ => step,
    }
}

/// Per-team counter values. The key set is fixed at construction; advancing
/// an unknown team is a no-op, keeping label cardinality bounded for the
/// process lifetime.
#[derive(Clone, Default)]
pub struct CounterTable {
    vals: Arc<Mutex<HashMap<String, u64>>>,
}

impl CounterTable {
    pub fn new(teams: &[String]) -> Self {
        let vals = teams.iter().map(|team| (team.clone(), 0)).collect();
        Self {
            vals: Arc::new(Mutex::new(vals)),
        }
    }

    /// Applies one walk step to a registered team and returns its new value.
    pub fn advance(&self, team: &str, step: u64, max_size: u64) -> Option<u64> {
        let mut vals = self.vals.lock();
        let value = vals.get_mut(team)?;
        *value = next_value(*value, step, max_size);
        Some(*value)
    }

    pub fn get(&self, team: &str) -> Option<u64> {
        self.vals.lock().get(team).copied()
    }

    pub fn len(&self) -> usize {
        self.vals.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.vals.lock().is_empty()
    }
}

#[derive(Clone)]
pub struct AppState {
    pub metrics: crate::metrics::Metrics,
}
