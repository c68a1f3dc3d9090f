/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information when examining the dynamics of a solve.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [BCP](crate::procedures::bcp) and [unit propagation](crate::procedures::unit)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to [pure literal elimination](crate::procedures::pure)
    pub const PREPROCESSING: &str = "preprocessing";

    /// Logs related to [decisions](crate::procedures::decision)
    pub const DECISION: &str = "decision";

    /// Logs related to [restarts](crate::procedures::schedulers)
    pub const RESTART: &str = "restart";

    /// Logs related to the [complete search](crate::procedures::dpll)
    pub const SEARCH: &str = "search";

    /// Logs related to the [random walk](crate::procedures::walk)
    pub const WALK: &str = "walk";

    /// Logs related to [parsing](crate::builder::dimacs)
    pub const PARSER: &str = "parser";
}
