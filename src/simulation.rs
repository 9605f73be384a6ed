use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::config::ScenarioConfig;
use crate::drops::DropTable;
use crate::targets::{Tally, TargetSet};

/// Run one trial: draw until every target is met, and return the number of
/// draws taken. Rolls never depend on the tally, so the trial is a pure
/// stopping time over the RNG stream. There is no draw cap — the loop runs
/// as long as the grind does, which is finite with probability 1 whenever
/// every targeted drop can land.
pub fn run_trial(targets: &TargetSet, table: &DropTable, rng: &mut impl Rng) -> u64 {
    let mut tally = Tally::new();
    let mut draws: u64 = 0;
    while !targets.is_met(&tally) {
        draws += 1;
        if let Some(name) = table.roll(rng) {
            tally.record(name);
        }
    }
    draws
}

/// Arithmetic mean draw count over `n_trials` sequential trials.
///
/// Trials do not interact; the only cross-trial state is the fold
/// accumulator. No early stopping, no variance reporting. A zero trial
/// count yields NaN — `verify::verify_scenario` flags that before a
/// scenario gets here.
pub fn estimate_mean(
    targets: &TargetSet,
    table: &DropTable,
    n_trials: u64,
    rng: &mut impl Rng,
) -> f64 {
    let total: u64 = (0..n_trials).map(|_| run_trial(targets, table, rng)).sum();
    total as f64 / n_trials as f64
}

/// A configured estimator run with its own seeded RNG stream.
pub struct Simulation {
    targets: TargetSet,
    table: DropTable,
    n_trials: u64,
    rng: ChaCha20Rng,
}

impl Simulation {
    /// Construct from a scenario config; the config seed fixes the stream.
    pub fn from_config(config: ScenarioConfig) -> Self {
        Simulation {
            rng: ChaCha20Rng::seed_from_u64(config.seed),
            targets: config.targets,
            table: config.drops,
            n_trials: config.n_trials,
        }
    }

    /// Run the full trial batch and return the mean draw count.
    pub fn run(&mut self) -> f64 {
        estimate_mean(&self.targets, &self.table, self.n_trials, &mut self.rng)
    }
}
