/*!
Methods for choosing the value of an atom.

# Overview

A decision is made in two steps:
- An atom is chosen uniformly at random from the literals occurring in the current formula, with the polarity of the literal discarded.
- An order in which to try the two values of the atom is chosen by a coin, biased by [Config::polarity_lean](crate::config::Config::polarity_lean).

```rust,ignore
let atom = self.choose_atom(&formula)?;
let [first, second] = self.branch_order(atom);
```

As literals are drawn with multiplicity one, an atom occurring both positively and negatively in a formula is twice as likely to be chosen as an atom occurring with one polarity.
The order of literals drawn from is the order of first occurrence, and so given a seed the choice is determined by the formula.

# Counting decisions

Each call to [choose_atom](GenericContext::choose_atom) increments [decisions](crate::context::Counters::decisions), which is the count reported at the end of a complete search and which restart schedules are keyed on.
*/

use rand::seq::SliceRandom;

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        formula::Formula,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// Methods related to making decisions.
impl<R: rand::Rng> GenericContext<R> {
    /// Chooses an atom occurring in the formula, and increments the decision counter.
    ///
    /// Decisions are only made on a non-empty formula, and so an empty formula is an [InvalidState](err::ErrorKind::InvalidState).
    pub fn choose_atom(&mut self, formula: &Formula) -> Result<Atom, err::ErrorKind> {
        self.counters.decisions += 1;

        let occurrences = formula.occurrences();
        match occurrences.literals().choose(&mut self.rng) {
            Some(literal) => {
                log::trace!(target: targets::DECISION, "Decision {}: {}", self.counters.decisions, literal.atom());
                Ok(literal.atom())
            }
            None => Err(err::ErrorKind::InvalidState),
        }
    }

    /// The order in which to try the values of an atom, as literals.
    pub fn branch_order(&mut self, atom: Atom) -> [CLiteral; 2] {
        match self.rng.gen_bool(self.config.polarity_lean.value) {
            true => [CLiteral::new(atom, true), CLiteral::new(atom, false)],
            false => [CLiteral::new(atom, false), CLiteral::new(atom, true)],
        }
    }
}
