use std::collections::HashMap;

use serde::Serialize;

/// Minimum count of one named drop required before the grind is over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Target {
    pub name: String,
    pub required: u32,
}

impl Target {
    pub fn new(name: impl Into<String>, required: u32) -> Self {
        Target { name: name.into(), required }
    }
}

/// The full set of minimums a trial must satisfy simultaneously.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetSet {
    pub targets: Vec<Target>,
}

impl TargetSet {
    pub fn new(targets: Vec<Target>) -> Self {
        TargetSet { targets }
    }

    /// All targets met at once — partial completion never ends a trial.
    /// An empty set (or one where every minimum is zero) is met immediately.
    pub fn is_met(&self, tally: &Tally) -> bool {
        self.targets.iter().all(|t| tally.count(&t.name) >= t.required)
    }

    /// Fewest draws any trial could take. At most one drop lands per draw,
    /// so the draw count can never undercut the sum of the minimums.
    pub fn min_draws(&self) -> u64 {
        self.targets.iter().map(|t| t.required as u64).sum()
    }
}

/// Per-trial counters, all starting at zero.
#[derive(Debug, Clone, Default)]
pub struct Tally {
    counts: HashMap<String, u32>,
}

impl Tally {
    pub fn new() -> Self {
        Tally::default()
    }

    pub fn record(&mut self, name: &str) {
        *self.counts.entry(name.to_string()).or_insert(0) += 1;
    }

    pub fn count(&self, name: &str) -> u32 {
        self.counts.get(name).copied().unwrap_or(0)
    }

    /// Total drops recorded this trial, across all names.
    pub fn total(&self) -> u64 {
        self.counts.values().map(|&c| c as u64).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_and_count() {
        let mut tally = Tally::new();
        assert_eq!(tally.count("fang"), 0);
        tally.record("fang");
        tally.record("fang");
        tally.record("piece");
        assert_eq!(tally.count("fang"), 2);
        assert_eq!(tally.count("piece"), 1);
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn empty_set_is_met_immediately() {
        let set = TargetSet::new(vec![]);
        assert!(set.is_met(&Tally::new()));
        assert_eq!(set.min_draws(), 0);
    }

    #[test]
    fn zero_minimum_is_met_with_no_drops() {
        let set = TargetSet::new(vec![Target::new("fang", 0)]);
        assert!(set.is_met(&Tally::new()));
    }

    /// One satisfied target must not end the grind while another is short.
    #[test]
    fn partial_completion_is_not_met() {
        let set = TargetSet::new(vec![Target::new("piece", 3), Target::new("fang", 1)]);
        let mut tally = Tally::new();
        tally.record("fang");
        assert!(!set.is_met(&tally));
        tally.record("piece");
        tally.record("piece");
        tally.record("piece");
        assert!(set.is_met(&tally));
    }

    #[test]
    fn surplus_counts_still_meet() {
        let set = TargetSet::new(vec![Target::new("fang", 1)]);
        let mut tally = Tally::new();
        tally.record("fang");
        tally.record("fang");
        assert!(set.is_met(&tally));
    }

    #[test]
    fn min_draws_sums_minimums() {
        let set = TargetSet::new(vec![Target::new("piece", 3), Target::new("fang", 1)]);
        assert_eq!(set.min_draws(), 4);
    }

    #[test]
    fn target_set_serializes() {
        let set = TargetSet::new(vec![Target::new("fang", 1)]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"{"targets":[{"name":"fang","required":1}]}"#);
    }
}
