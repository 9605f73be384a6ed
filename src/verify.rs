use std::fmt;

use crate::config::ScenarioConfig;

/// A scenario defect that would make a run meaningless or endless.
#[derive(Debug, Clone, PartialEq)]
pub enum ScenarioViolation {
    /// An entry's rate lies outside [0, 1].
    ProbabilityOutOfRange { name: String, probability: f64 },
    /// A target requires a drop that no table entry can land, so the trial
    /// loop would never terminate.
    UnreachableTarget { name: String },
    /// An entry below a certain (p = 1) entry is never evaluated.
    ShadowedEntry { name: String },
    /// A zero trial count leaves the mean undefined.
    NoTrials,
}

impl fmt::Display for ScenarioViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioViolation::ProbabilityOutOfRange { name, probability } => {
                write!(f, "entry '{name}' has rate {probability} outside [0, 1]")
            }
            ScenarioViolation::UnreachableTarget { name } => {
                write!(f, "target '{name}' requires a drop no table entry can land")
            }
            ScenarioViolation::ShadowedEntry { name } => {
                write!(f, "entry '{name}' sits below a certain entry and never rolls")
            }
            ScenarioViolation::NoTrials => write!(f, "trial count is zero"),
        }
    }
}

/// Static checks run before a scenario is simulated. Returns every
/// violation found; an empty vec means the scenario is safe to run.
pub fn verify_scenario(config: &ScenarioConfig) -> Vec<ScenarioViolation> {
    let mut violations = Vec::new();

    for entry in &config.drops.entries {
        if !entry.probability.in_range() {
            violations.push(ScenarioViolation::ProbabilityOutOfRange {
                name: entry.name.clone(),
                probability: entry.probability.0,
            });
        }
    }

    // First match wins, so nothing after the first certain entry can roll.
    let certain_at = config.drops.entries.iter().position(|e| e.probability.0 >= 1.0);
    if let Some(i) = certain_at {
        for entry in &config.drops.entries[i + 1..] {
            violations.push(ScenarioViolation::ShadowedEntry { name: entry.name.clone() });
        }
    }

    for target in &config.targets.targets {
        if target.required == 0 {
            continue;
        }
        // A target is reachable only through an entry that can actually
        // fire — present, nonzero rate, and not shadowed.
        let live_entries = match certain_at {
            Some(i) => &config.drops.entries[..=i],
            None => config.drops.entries.as_slice(),
        };
        let reachable = live_entries
            .iter()
            .any(|e| e.name == target.name && e.probability.0 > 0.0);
        if !reachable {
            violations.push(ScenarioViolation::UnreachableTarget { name: target.name.clone() });
        }
    }

    if config.n_trials == 0 {
        violations.push(ScenarioViolation::NoTrials);
    }

    violations
}
