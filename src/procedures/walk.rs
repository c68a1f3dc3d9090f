/*!
An incomplete search for a model, by random walk.

# Overview

The walk begins from a complete valuation, with the value of each atom given by a fair coin (in ascending order of atom).
Then, until some budget is exhausted:

- If every clause is satisfied on the valuation, the valuation is a model.
- Otherwise, an unsatisfied clause is chosen uniformly at random, and the value of an atom drawn uniformly from the literals of the clause is flipped.

Roughly:

```rust,ignore
while !unsatisfied.is_empty() {
    let clause = unsatisfied.iter().nth(self.rng.gen_range(0..unsatisfied.len()));
    let literal = clause.choose(&mut self.rng);
    valuation.flip(literal.atom());
}
```

The walk never establishes unsatisfiability, and a formula containing the empty clause ends a walk before any flip is made.

# The unsatisfied set

The positions of unsatisfied clauses are kept in ascending order, so a clause chosen by index is determined by the formula, the valuation, and the seed.

After a flip only clauses containing the flipped atom may change status, and by default only those clauses are revisited, by way of an [OccurrenceIndex].
Revision by the index gives the same set as a full recomputation, and [Config::incremental_walk](crate::config::Config::incremental_walk) may be disabled to recompute the set in full after each flip.

# Budgets

Before each flip the walk checks, in order:
1. [Config::max_flips](crate::config::Config::max_flips).
2. [Config::time_limit](crate::config::Config::time_limit), and [the terminate callback](crate::context::callbacks).

# Example

```rust
# use tandem_sat::config::Config;
# use tandem_sat::context::Context;
# use tandem_sat::reports::WalkOutcome;
let mut config = Config::default();
config.max_flips.value = 10;
let mut the_context = Context::from_config(config);

let _ = the_context.add_clause(vec![1]);
let _ = the_context.add_clause(vec![-1]);

// Ten flips are made, and as the formula is unsatisfiable no model is found.
assert_eq!(the_context.walk(), Ok(WalkOutcome::NoSolution { flips: 10 }));
```
*/

use std::collections::BTreeSet;

use rand::seq::SliceRandom;

use crate::{
    builder::OccurrenceIndex,
    context::{Counters, GenericContext},
    misc::log::targets::{self},
    reports::WalkOutcome,
    structures::{
        clause::Clause,
        formula::Formula,
        literal::Literal,
        valuation::{BitValuation, Valuation},
    },
    types::err::{self},
};

/// The positions of each clause of the formula unsatisfied on the valuation.
pub fn unsatisfied_clauses(formula: &Formula, valuation: &impl Valuation) -> BTreeSet<usize> {
    formula
        .clauses()
        .iter()
        .enumerate()
        .filter(|(_, clause)| !clause.satisfied_on(valuation))
        .map(|(position, _)| position)
        .collect()
}

/// Revises the status of the clauses at the given positions.
pub fn revise_unsatisfied(
    unsatisfied: &mut BTreeSet<usize>,
    positions: &[usize],
    formula: &Formula,
    valuation: &impl Valuation,
) {
    for position in positions {
        match formula.clauses().get(*position) {
            Some(clause) if !clause.satisfied_on(valuation) => {
                unsatisfied.insert(*position);
            }
            _ => {
                unsatisfied.remove(position);
            }
        }
    }
}

impl<R: rand::Rng> GenericContext<R> {
    /// Searches for a model of the formula of the context by random walk.
    ///
    /// Counters of the context are reset at the start of each walk.
    pub fn walk(&mut self) -> Result<WalkOutcome, err::ErrorKind> {
        let start = std::time::Instant::now();
        self.counters = Counters::default();

        let outcome = self.flip_until_done(start);
        self.counters.time = start.elapsed();
        outcome
    }

    fn flip_until_done(
        &mut self,
        start: std::time::Instant,
    ) -> Result<WalkOutcome, err::ErrorKind> {
        if self.formula.has_empty_clause() {
            log::info!(target: targets::WALK, "The formula contains the empty clause");
            return Ok(WalkOutcome::NoSolution { flips: 0 });
        }

        let atom_count = self.atom_count;
        let rng = &mut self.rng;
        let mut valuation = BitValuation::from_fn(atom_count, |_| rng.gen_bool(0.5));

        let index = match self.config.incremental_walk.value {
            true => Some(OccurrenceIndex::new(&self.formula, atom_count)),
            false => None,
        };

        let mut unsatisfied = unsatisfied_clauses(&self.formula, &valuation);
        log::debug!(target: targets::WALK, "Initially {} unsatisfied clauses", unsatisfied.len());

        loop {
            if unsatisfied.is_empty() {
                log::info!(target: targets::WALK, "Satisfiable after {} flips", self.counters.flips);
                return Ok(WalkOutcome::Satisfiable {
                    model: valuation.to_model(),
                    flips: self.counters.flips,
                });
            }

            if self.counters.flips >= self.config.max_flips.value {
                log::info!(target: targets::WALK, "No solution found after {} flips", self.counters.flips);
                return Ok(WalkOutcome::NoSolution {
                    flips: self.counters.flips,
                });
            }

            if self.budget_exhausted(start) {
                log::info!(target: targets::WALK, "Timeout reached after {:.2} seconds", self.counters.time.as_secs_f64());
                return Ok(WalkOutcome::TimedOut {
                    flips: self.counters.flips,
                });
            }

            let choice = self.rng.gen_range(0..unsatisfied.len());
            let position = *unsatisfied
                .iter()
                .nth(choice)
                .ok_or(err::ErrorKind::InvalidState)?;

            let clause = self
                .formula
                .clauses()
                .get(position)
                .ok_or(err::ErrorKind::InvalidState)?;
            let atom = clause
                .choose(&mut self.rng)
                .ok_or(err::ErrorKind::InvalidState)?
                .atom();

            valuation.flip(atom);
            self.counters.flips += 1;
            log::trace!(target: targets::WALK, "Flip {}: {atom}", self.counters.flips);

            match &index {
                Some(index) => revise_unsatisfied(
                    &mut unsatisfied,
                    index.clauses_of(atom),
                    &self.formula,
                    &valuation,
                ),
                None => unsatisfied = unsatisfied_clauses(&self.formula, &valuation),
            }
        }
    }
}
