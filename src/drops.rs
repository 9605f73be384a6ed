use rand::Rng;
use serde::Serialize;

use crate::types::Probability;

/// One named outcome on the table and its per-draw rate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropEntry {
    pub name: String,
    pub probability: Probability,
}

impl DropEntry {
    pub fn new(name: impl Into<String>, probability: Probability) -> Self {
        DropEntry { name: name.into(), probability }
    }
}

/// Ordered table of mutually exclusive rare outcomes.
///
/// Entry order is load-bearing: `roll` walks the table top to bottom, each
/// entry getting its own independent uniform sample, and the first entry
/// whose sample lands under its rate takes the draw. Later entries are not
/// evaluated that draw, so an early entry slightly suppresses everything
/// below it. This is not equivalent to a single categorical draw
/// partitioned by cumulative probability.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropTable {
    pub entries: Vec<DropEntry>,
}

impl DropTable {
    pub fn new(entries: Vec<DropEntry>) -> Self {
        DropTable { entries }
    }

    /// Roll the table once. Returns the name of the drop that landed, if any.
    /// At most one entry fires per roll.
    pub fn roll(&self, rng: &mut impl Rng) -> Option<&str> {
        for entry in &self.entries {
            if rng.random::<f64>() < entry.probability.0 {
                return Some(entry.name.as_str());
            }
        }
        None
    }

    /// Best per-draw rate for `name` across the table (0 if absent).
    /// Scenario verification uses this to spot targets that can never land.
    pub fn max_rate(&self, name: &str) -> f64 {
        self.entries
            .iter()
            .filter(|e| e.name == name)
            .map(|e| e.probability.0)
            .fold(0.0, f64::max)
    }
}
