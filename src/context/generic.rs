use crate::{
    config::Config,
    structures::{atom::Atom, clause::CClause, formula::Formula, literal::Literal},
    types::err::{self},
};

use super::{
    callbacks::{CallbackRestart, CallbackTerminate},
    Counters,
};

/// A generic context, paramaterised to a source of randomness.
///
/// Any source of [rng](rand::Rng) may be used, and every random choice of a solve is drawn from the source in a fixed order.
///
/// # Example
///
/// ```rust
/// # use tandem_sat::context::GenericContext;
/// # use tandem_sat::generic::random::MinimalPCG32;
/// # use tandem_sat::config::Config;
/// # use rand::SeedableRng;
/// let context = GenericContext::from_config_and_rng(Config::default(), MinimalPCG32::seed_from_u64(7));
/// ```
pub struct GenericContext<R: rand::Rng> {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context/solve.
    pub counters: Counters,

    /// The formula of the context.
    pub formula: Formula,

    /// The number of atoms of the formula.
    ///
    /// Every atom from 1 to the atom count is valued in a model, whether or not the atom occurs in the formula.
    pub atom_count: Atom,

    /// The source of rng.
    pub rng: R,

    /// Terminates procedures, if true.
    pub(super) callback_terminate: Option<Box<CallbackTerminate>>,

    /// Observes restarts.
    pub(super) callback_restart: Option<Box<CallbackRestart>>,
}

impl<R: rand::Rng> GenericContext<R> {
    /// Creates a context from some given configuration and source of rng.
    pub fn from_config_and_rng(config: Config, rng: R) -> Self {
        Self {
            config,
            counters: Counters::default(),
            formula: Formula::default(),
            atom_count: 0,
            rng,
            callback_terminate: None,
            callback_restart: None,
        }
    }

    /// Adds a clause to the formula of the context, extending the atom count to cover the atoms of the clause.
    ///
    /// Literals of the clause are stored as given, in order.
    /// The clause must not contain the literal `0`.
    pub fn add_clause(&mut self, clause: CClause) -> Result<(), err::ErrorKind> {
        if clause.contains(&0) {
            return Err(err::ErrorKind::InvalidState);
        }
        if let Some(max) = clause.iter().map(|literal| literal.atom()).max() {
            self.atom_count = self.atom_count.max(max);
        }
        self.formula.push(clause);
        Ok(())
    }

    /// Extends the atom count of the context, if the given count is larger.
    pub fn ensure_atoms(&mut self, count: Atom) {
        self.atom_count = self.atom_count.max(count);
    }

    /// Returns whether the configured time limit has elapsed, or some callback requests termination.
    pub(crate) fn budget_exhausted(&mut self, start: std::time::Instant) -> bool {
        self.counters.time = start.elapsed();
        if let Some(limit) = self.config.time_limit {
            if self.counters.time >= limit {
                return true;
            }
        }
        self.check_callback_terminate()
    }
}
