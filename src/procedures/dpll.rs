//! Determines the satisfiability of the formula in a context by a complete backtracking search.
//!
//! # Overview
//!
//! Each node of the search holds a formula and the trail of literals which led to the formula.
//! On reaching a node the formula is first reduced, by [pure literal elimination](crate::procedures::pure) followed by [unit propagation](crate::procedures::unit), and then:
//!
//! - If reduction ended in a conflict, the node fails.
//! - If the reduced formula is empty, the trail (extended by the reduction) is a partial model and the search succeeds.
//! - Otherwise, some [decision](crate::procedures::decision) is made on an atom *a* of the reduced formula, and the node branches to the formula which results from asserting one literal of *a* and, should that branch fail, the other.
//!
//! A failed node passes failure to its parent, and failure of the root is unsatisfiability.
//!
//! Roughly, the search is as diagrammed:
//!
//! ```none
//!                 +--------+  conflict            +---------------------+
//! --- descend --->| reduce |--------------------->| next branch of the  |--- none ---> fail to parent
//!      ⌃          +--------+                      | most recent node    |
//!      |              |                           +---------------------+
//!      |              | empty ---> satisfiable               |
//!      |              ⌄                                      |
//!      |        +----------+                                 |
//!      |        | decision |--- restart ---> descend         |
//!      |        +----------+    (same formula, same parent)  |
//!      |              |                                      |
//!      +--------------+--------------------------------------+
//! ```
//!
//! # Iteration
//!
//! The search is iterative, with an explicit stack of nodes awaiting the outcome of a branch.
//! So, the depth of a search is bounded by the count of atoms rather than by the size of the call stack.
//!
//! # Restarts
//!
//! After a decision is made the [restart schedule](crate::procedures::schedulers) is consulted.
//! If a restart is due the decision is abandoned, the [in-progress trail](crate::structures::trail::Trail::in_progress) is emptied, and the search descends again on the same (reduced) formula in place of the current node.
//! Nodes awaiting the outcome of a branch are untouched by a restart, and so in particular failure after a restart is passed to the parent of the restarted node.
//!
//! Literals of an emptied in-progress trail are retained, and so a model returned after a restart remains a model of the formula of the context.
//!
//! # Budgets
//!
//! Before each decision the search checks [Config::decision_limit](crate::config::Config::decision_limit), [Config::time_limit](crate::config::Config::time_limit), and [the terminate callback](crate::context::callbacks).
//! Exhausting any of these ends the search, with each node abandoned.
//!
//! # Example
//!
//! ```rust
//! # use tandem_sat::config::{Config, RestartStrategy};
//! # use tandem_sat::context::Context;
//! # use tandem_sat::reports::DpllOutcome;
//! # use tandem_sat::structures::valuation::Valuation;
//! let mut config = Config::default();
//! config.restart = RestartStrategy::Luby;
//! let mut the_context = Context::from_config(config);
//!
//! let _ = the_context.add_clause(vec![1, 2]);
//! let _ = the_context.add_clause(vec![-1, -2]);
//! let _ = the_context.add_clause(vec![2, 3]);
//! let _ = the_context.add_clause(vec![-2, -3]);
//!
//! match the_context.dpll() {
//!     Ok(DpllOutcome::Satisfiable(model)) => {
//!         assert_eq!(model.value_of(1), model.value_of(3));
//!         assert_ne!(model.value_of(1), model.value_of(2));
//!     }
//!     _ => panic!("the formula is satisfiable"),
//! }
//! ```

use crate::{
    context::{callbacks::RestartInfo, Counters, GenericContext},
    misc::log::targets::{self},
    procedures::{
        bcp::bcp, pure::eliminate_pure_literals, schedulers::RestartScheduler,
        unit::propagate_units,
    },
    reports::DpllOutcome,
    structures::{formula::Formula, literal::CLiteral, trail::Trail, valuation::Model},
    types::err::{self},
};

/// A node of the search awaiting the outcome of a branch.
struct Node {
    formula: Formula,
    trail: Trail,
    order: [CLiteral; 2],
    next: usize,
}

impl Node {
    /// The formula and trail of the next branch of the node which does not immediately conflict, if any.
    fn next_branch(&mut self) -> Option<(Formula, Trail)> {
        while let Some(literal) = self.order.get(self.next).copied() {
            self.next += 1;
            match bcp(&self.formula, literal) {
                Ok(formula) => return Some((formula, self.trail.with(literal))),
                Err(err::BCPError::Conflict) => {
                    log::trace!(target: targets::SEARCH, "Branch {literal} conflicts");
                }
            }
        }
        None
    }
}

/// The outcome of a descent to a node.
enum Descent {
    /// The formula of the node was reduced to the empty formula, with the given trail.
    Success(Trail),

    /// The formula of the node conflicted.
    Fail,

    /// Some budget was exhausted.
    TimedOut,

    /// A decision was made, and the node awaits the outcome of the branches of the decision.
    Branch(Node),
}

/// Reduces a formula by pure literal elimination and unit propagation, extending the trail.
fn reduce(formula: Formula, trail: &mut Trail) -> Result<Formula, err::BCPError> {
    let (formula, pure_literals) = eliminate_pure_literals(formula)?;
    trail.extend(pure_literals);

    let (formula, units) = propagate_units(formula)?;
    trail.extend(units);

    Ok(formula)
}

impl<R: rand::Rng> GenericContext<R> {
    /// Determines the satisfiability of the formula of the context.
    ///
    /// Counters of the context are reset at the start of each search.
    pub fn dpll(&mut self) -> Result<DpllOutcome, err::ErrorKind> {
        let start = std::time::Instant::now();
        self.counters = Counters::default();

        let outcome = self.search(start);
        self.counters.time = start.elapsed();
        outcome
    }

    fn search(&mut self, start: std::time::Instant) -> Result<DpllOutcome, err::ErrorKind> {
        if self.formula.has_empty_clause() {
            log::info!(target: targets::SEARCH, "The formula contains the empty clause");
            return Ok(DpllOutcome::Unsatisfiable);
        }

        let mut scheduler = RestartScheduler::new(self.config.restart);
        let mut stack: Vec<Node> = Vec::default();

        let mut descent = self.descend(self.formula.clone(), Trail::default(), &mut scheduler, start)?;

        loop {
            match descent {
                Descent::Success(trail) => {
                    log::info!(target: targets::SEARCH, "Satisfiable after {} decisions", self.counters.decisions);
                    let model = Model::from_trail(trail.literals(), self.atom_count);
                    return Ok(DpllOutcome::Satisfiable(model));
                }

                Descent::TimedOut => {
                    log::info!(target: targets::SEARCH, "Budget exhausted after {} decisions", self.counters.decisions);
                    return Ok(DpllOutcome::TimedOut);
                }

                Descent::Branch(node) => stack.push(node),

                Descent::Fail => {}
            }

            descent = loop {
                let Some(node) = stack.last_mut() else {
                    log::info!(target: targets::SEARCH, "Unsatisfiable after {} decisions", self.counters.decisions);
                    return Ok(DpllOutcome::Unsatisfiable);
                };

                match node.next_branch() {
                    Some((formula, trail)) => break self.descend(formula, trail, &mut scheduler, start)?,
                    None => {
                        stack.pop();
                    }
                }
            };
        }
    }

    /// Descends to a node with the given formula and trail.
    ///
    /// A restart replaces the node with a node on the reduced formula, and so is handled within a descent.
    fn descend(
        &mut self,
        formula: Formula,
        trail: Trail,
        scheduler: &mut RestartScheduler,
        start: std::time::Instant,
    ) -> Result<Descent, err::ErrorKind> {
        let mut formula = formula;
        let mut trail = trail;

        loop {
            formula = match reduce(formula, &mut trail) {
                Ok(reduced) => reduced,
                Err(err::BCPError::Conflict) => return Ok(Descent::Fail),
            };

            if formula.is_empty() {
                return Ok(Descent::Success(trail));
            }

            if let Some(limit) = self.config.decision_limit {
                if self.counters.decisions >= limit {
                    return Ok(Descent::TimedOut);
                }
            }
            if self.budget_exhausted(start) {
                return Ok(Descent::TimedOut);
            }

            let atom = self.choose_atom(&formula)?;

            if scheduler.due(self.counters.decisions) {
                scheduler.advance();
                self.counters.restarts = scheduler.restarts();
                trail.restart();

                log::debug!(target: targets::RESTART, "Restart {} at decision {}", self.counters.restarts, self.counters.decisions);

                let info = RestartInfo {
                    decisions: self.counters.decisions,
                    restarts: self.counters.restarts,
                    trail: trail.in_progress().len(),
                    clauses: formula.clause_count(),
                };
                self.make_callback_restart(&info);
                continue;
            }

            let order = self.branch_order(atom);
            return Ok(Descent::Branch(Node {
                formula,
                trail,
                order,
                next: 0,
            }));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use crate::{
        config::{Config, RestartStrategy},
        context::Context,
        structures::{atom::Atom, literal::Literal},
    };

    use super::*;

    /// Pairs of atoms which must take distinct values, with no pure literals and no unit clauses.
    fn distinct_pairs(pairs: i32) -> Vec<Vec<CLiteral>> {
        let mut clauses = Vec::default();
        for pair in 0..pairs {
            let (a, b) = (2 * pair + 1, 2 * pair + 2);
            clauses.push(vec![a, b]);
            clauses.push(vec![-a, -b]);
        }
        clauses
    }

    fn context_with(config: Config, clauses: Vec<Vec<CLiteral>>) -> Context {
        let mut the_context = Context::from_config(config);
        for clause in clauses {
            assert!(the_context.add_clause(clause).is_ok());
        }
        the_context
    }

    fn assert_model(the_context: &Context, model: &Model) {
        assert!(the_context.formula.satisfied_on(model));
        let atoms: Vec<Atom> = model.literals().iter().map(|l| l.atom()).collect();
        let expected: Vec<Atom> = (1..=the_context.atom_count).collect();
        assert_eq!(atoms, expected);
    }

    #[test]
    fn conflicting_units() {
        let mut the_context = context_with(Config::default(), vec![vec![1], vec![-1]]);
        assert_eq!(the_context.dpll(), Ok(DpllOutcome::Unsatisfiable));
        assert_eq!(the_context.counters.decisions, 0);
    }

    #[test]
    fn every_valuation_conflicts() {
        let clauses = vec![vec![1, 2], vec![-1, 2], vec![-1, -2], vec![1, -2]];
        let mut the_context = context_with(Config::default(), clauses);

        assert_eq!(the_context.dpll(), Ok(DpllOutcome::Unsatisfiable));
        assert_eq!(the_context.counters.decisions, 1);
    }

    #[test]
    fn empty_clause() {
        let mut the_context = context_with(Config::default(), vec![vec![1, 2], vec![]]);
        assert_eq!(the_context.dpll(), Ok(DpllOutcome::Unsatisfiable));
    }

    #[test]
    fn empty_formula() {
        let mut the_context = Context::from_config(Config::default());
        the_context.ensure_atoms(2);

        match the_context.dpll() {
            Ok(DpllOutcome::Satisfiable(model)) => assert_eq!(model.literals(), &[1, 2]),
            _ => panic!("the empty formula is satisfiable"),
        }
    }

    #[test]
    fn models_across_seeds() {
        let mut clauses = distinct_pairs(6);
        clauses.push(vec![1, 3, 5]);
        clauses.push(vec![-2, -4, 6, 8]);

        for seed in 0..32 {
            let mut config = Config::default();
            config.random_seed.value = seed;
            let mut the_context = context_with(config, clauses.clone());

            match the_context.dpll() {
                Ok(DpllOutcome::Satisfiable(model)) => assert_model(&the_context, &model),
                _ => panic!("the formula is satisfiable"),
            }
        }
    }

    #[test]
    fn seeds_reproduce() {
        let solve = |seed: u64| {
            let mut config = Config::default();
            config.random_seed.value = seed;
            config.restart = RestartStrategy::Luby;
            let mut the_context = context_with(config, distinct_pairs(8));
            let outcome = the_context.dpll();
            (outcome, the_context.counters.decisions, the_context.counters.restarts)
        };

        assert_eq!(solve(7), solve(7));
        assert_eq!(solve(1234), solve(1234));
    }

    #[test]
    fn fixed_restarts() {
        let mut config = Config::default();
        config.restart = RestartStrategy::Fixed { interval: 3 };
        let mut the_context = context_with(config, distinct_pairs(10));

        let observed = Rc::new(RefCell::new(Vec::default()));
        let observer = observed.clone();
        the_context.set_callback_restart(Box::new(move |info: &RestartInfo| {
            observer.borrow_mut().push(*info)
        }));

        let outcome = the_context.dpll().unwrap();
        match &outcome {
            DpllOutcome::Satisfiable(model) => assert_model(&the_context, model),
            _ => panic!("the formula is satisfiable"),
        }

        // Each branch eliminates a single pair, and ten branches are needed.
        // Decisions 3, 6, 9, and 12 restart rather than branch.
        let observed = observed.borrow();
        let decisions: Vec<usize> = observed.iter().map(|info| info.decisions).collect();
        let clauses: Vec<usize> = observed.iter().map(|info| info.clauses).collect();
        assert_eq!(decisions, vec![3, 6, 9, 12]);
        assert_eq!(clauses, vec![16, 12, 8, 4]);
        assert!(observed.iter().all(|info| info.trail == 0));

        assert_eq!(the_context.counters.decisions, 14);
        assert_eq!(the_context.counters.restarts, 4);
    }

    #[test]
    fn restarts_among_conflicts() {
        let mut clauses = distinct_pairs(4);
        clauses.push(vec![1, 3]);
        clauses.push(vec![-1, -3]);
        clauses.push(vec![1, -3, 5]);

        for seed in 0..16 {
            let mut config = Config::default();
            config.random_seed.value = seed;
            config.restart = RestartStrategy::Fixed { interval: 2 };
            let mut the_context = context_with(config, clauses.clone());

            match the_context.dpll() {
                Ok(DpllOutcome::Satisfiable(model)) => assert_model(&the_context, &model),
                _ => panic!("the formula is satisfiable"),
            }
        }
    }

    #[test]
    fn decision_limit() {
        let mut config = Config::default();
        config.decision_limit = Some(2);
        let mut the_context = context_with(config, distinct_pairs(5));

        assert_eq!(the_context.dpll(), Ok(DpllOutcome::TimedOut));
        assert_eq!(the_context.counters.decisions, 2);
    }

    #[test]
    fn terminate_callback() {
        let mut the_context = context_with(Config::default(), distinct_pairs(3));
        the_context.set_callback_terminate(Box::new(|| true));

        assert_eq!(the_context.dpll(), Ok(DpllOutcome::TimedOut));
        assert_eq!(the_context.counters.decisions, 0);
    }

    #[test]
    fn time_limit() {
        let mut config = Config::default();
        config.time_limit = Some(std::time::Duration::ZERO);
        let mut the_context = context_with(config, distinct_pairs(3));

        assert_eq!(the_context.dpll(), Ok(DpllOutcome::TimedOut));
        assert_eq!(the_context.counters.decisions, 0);
    }

    #[test]
    fn time_limit_after_completion() {
        let mut config = Config::default();
        config.time_limit = Some(std::time::Duration::ZERO);
        let mut the_context = context_with(config, vec![vec![1], vec![-1, 2]]);

        // Reduction alone settles the formula, so no budget point is reached.
        match the_context.dpll() {
            Ok(DpllOutcome::Satisfiable(model)) => assert_eq!(model.literals(), &[1, 2]),
            _ => panic!("the formula is satisfiable"),
        }
    }
}
