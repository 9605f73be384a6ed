use serde::Serialize;

/// Per-draw chance that a single drop lands. Stored as a plain fraction;
/// drop rates are usually quoted as "one in N", so `one_in` is the main
/// constructor. Valid values lie in [0, 1] — a rate of exactly 1 lands on
/// every draw, since uniform samples are taken from [0, 1).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Probability(pub f64);

impl Probability {
    pub const NEVER: Probability = Probability(0.0);
    pub const ALWAYS: Probability = Probability(1.0);

    /// `one_in(150)` = a 1/150 per-draw rate.
    pub fn one_in(denominator: u32) -> Self {
        Probability(1.0 / denominator as f64)
    }

    /// True when the value is a usable probability (0 ≤ p ≤ 1).
    /// NaN fails both comparisons and is rejected.
    pub fn in_range(self) -> bool {
        self.0 >= 0.0 && self.0 <= 1.0
    }
}
