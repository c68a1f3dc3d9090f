use std::time::Duration;

/// Counts for various things which count, roughly.
///
/// Counters are reset at the start of each solve, and only then.
/// In particular, a restart does not reset any counter.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// A count of every decision made during a complete search.
    pub decisions: usize,

    /// The number of restarts through a complete search.
    pub restarts: usize,

    /// A count of every flip made during a random walk.
    pub flips: usize,

    /// The time taken during a solve.
    pub time: Duration,
}
