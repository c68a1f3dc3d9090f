/*!
Reports for the context.

Each procedure returns an outcome specific to the procedure, and any outcome may be summarised as a [Report].

The summary of an outcome is also what a procedure is able to claim about a formula.
In particular, the random walk is incomplete, and so never reports a formula as unsatisfiable.

# Output

[Report::status_line] and [Model::as_dimacs](crate::structures::valuation::Model::as_dimacs) give the status and value lines of the usual competition output:

```rust
# use tandem_sat::reports::Report;
assert_eq!(Report::Satisfiable.status_line(), "s SATISFIABLE");
assert_eq!(Report::Unknown.status_line(), "s UNKNOWN");
```
*/

use crate::structures::valuation::Model;

/// High-level reports regarding a solve.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The formula of the context is satisfiable.
    Satisfiable,

    /// The formula of the context is unsatisfiable.
    Unsatisfiable,

    /// Satisfiability of the formula of the context is unknown, for some reason.
    Unknown,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

impl Report {
    /// The report as a status (`s`) line.
    pub fn status_line(&self) -> &'static str {
        match self {
            Self::Satisfiable => "s SATISFIABLE",
            Self::Unsatisfiable => "s UNSATISFIABLE",
            Self::Unknown => "s UNKNOWN",
        }
    }
}

/// The outcome of a complete search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DpllOutcome {
    /// A model of the formula, with a value for every atom.
    Satisfiable(Model),

    /// Every branch of the search ended in a conflict.
    Unsatisfiable,

    /// The search was stopped by a decision limit, time limit, or callback.
    TimedOut,
}

impl DpllOutcome {
    pub fn report(&self) -> Report {
        match self {
            Self::Satisfiable(_) => Report::Satisfiable,
            Self::Unsatisfiable => Report::Unsatisfiable,
            Self::TimedOut => Report::Unknown,
        }
    }
}

/// The outcome of a random walk, with the count of flips made.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WalkOutcome {
    /// A model of the formula, with a value for every atom.
    Satisfiable { model: Model, flips: usize },

    /// The flip budget was exhausted, or the formula contains the empty clause.
    NoSolution { flips: usize },

    /// The walk was stopped by a time limit or callback.
    TimedOut { flips: usize },
}

impl WalkOutcome {
    pub fn report(&self) -> Report {
        match self {
            Self::Satisfiable { .. } => Report::Satisfiable,
            Self::NoSolution { .. } | Self::TimedOut { .. } => Report::Unknown,
        }
    }

    pub fn flips(&self) -> usize {
        match self {
            Self::Satisfiable { flips, .. }
            | Self::NoSolution { flips }
            | Self::TimedOut { flips } => *flips,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_never_report_unsatisfiable() {
        let outcomes = [
            WalkOutcome::NoSolution { flips: 0 },
            WalkOutcome::TimedOut { flips: 7 },
        ];
        for outcome in outcomes {
            assert_eq!(outcome.report(), Report::Unknown);
        }
    }

    #[test]
    fn flips_of_any_outcome() {
        let model = Model::from_trail(&[1], 1);
        assert_eq!(WalkOutcome::Satisfiable { model, flips: 3 }.flips(), 3);
        assert_eq!(WalkOutcome::TimedOut { flips: 9 }.flips(), 9);
    }
}
