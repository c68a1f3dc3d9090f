/*!
Formulas, as conjunctions of clauses.

A formula is an ordered sequence of [clauses](crate::structures::clause).
The empty formula is satisfied, and a formula containing the empty clause is unsatisfiable.

During a complete search a formula is never mutated in place.
Instead, each simplification returns a fresh formula, owned by the branch of the search which made the simplification.

# Occurrences

Many procedures are interested in which literals occur in a formula, and how often.
[Occurrences] records the count of each literal, alongside the order in which literals first occur.
The order of first occurrence fixes the order of discovery for pure literals and the order from which a decision is drawn, and so is part of what makes a seeded search reproducible.

```rust
# use tandem_sat::structures::formula::Formula;
let formula = Formula::from(vec![vec![2, 1], vec![1, -3]]);
let occurrences = formula.occurrences();

assert_eq!(occurrences.literals(), &[2, 1, -3]);
assert_eq!(occurrences.count(1), 2);
assert_eq!(occurrences.count(3), 0);
```
*/

use std::collections::HashMap;

use crate::structures::{
    atom::Atom,
    clause::{CClause, Clause},
    literal::{CLiteral, Literal},
    valuation::Valuation,
};

/// A formula, as a sequence of clauses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Formula {
    clauses: Vec<CClause>,
}

impl From<Vec<CClause>> for Formula {
    fn from(clauses: Vec<CClause>) -> Self {
        Formula { clauses }
    }
}

impl Formula {
    /// The clauses of the formula, in order.
    pub fn clauses(&self) -> &[CClause] {
        &self.clauses
    }

    /// The clauses of the formula, taken from the formula.
    pub fn into_clauses(self) -> Vec<CClause> {
        self.clauses
    }

    /// Appends a clause to the formula.
    pub fn push(&mut self, clause: CClause) {
        self.clauses.push(clause)
    }

    /// The number of clauses in the formula.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// Returns whether the formula contains no clauses (and so is satisfied).
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Returns whether the formula contains the empty clause (and so is unsatisfiable).
    pub fn has_empty_clause(&self) -> bool {
        self.clauses.iter().any(|clause| clause.is_empty())
    }

    /// The first unit clause of the formula, if one exists.
    pub fn first_unit(&self) -> Option<CLiteral> {
        self.clauses
            .iter()
            .find(|clause| clause.size() == 1)
            .map(|clause| clause[0])
    }

    /// The largest atom in the formula, or 0 if the formula contains no literals.
    pub fn max_atom(&self) -> Atom {
        self.clauses
            .iter()
            .flat_map(|clause| clause.literals())
            .map(|literal| literal.atom())
            .max()
            .unwrap_or(0)
    }

    /// Returns whether every clause of the formula is satisfied on the given valuation.
    pub fn satisfied_on(&self, valuation: &impl Valuation) -> bool {
        self.clauses
            .iter()
            .all(|clause| clause.satisfied_on(valuation))
    }

    /// A count of the occurrences of each literal in the formula.
    pub fn occurrences(&self) -> Occurrences {
        let mut occurrences = Occurrences::default();
        for clause in &self.clauses {
            for literal in clause {
                occurrences.note(*literal);
            }
        }
        occurrences
    }

    /// The formula in DIMACS form, including a problem specification.
    pub fn as_dimacs(&self, atom_count: Atom) -> String {
        let mut the_string = format!("p cnf {atom_count} {}\n", self.clauses.len());
        for clause in &self.clauses {
            the_string.push_str(&clause.as_dimacs(true));
            the_string.push('\n');
        }
        the_string
    }
}

/// Counts of literal occurrences in a formula, with the order in which each literal first occurred.
#[derive(Clone, Debug, Default)]
pub struct Occurrences {
    order: Vec<CLiteral>,
    counts: HashMap<CLiteral, usize>,
}

impl Occurrences {
    fn note(&mut self, literal: CLiteral) {
        let count = self.counts.entry(literal).or_insert(0);
        if *count == 0 {
            self.order.push(literal);
        }
        *count += 1;
    }

    /// Every literal with a nonzero count, in order of first occurrence.
    pub fn literals(&self) -> &[CLiteral] {
        &self.order
    }

    /// The count of occurrences of the literal.
    pub fn count(&self, literal: CLiteral) -> usize {
        self.counts.get(&literal).copied().unwrap_or(0)
    }

    /// Returns whether the literal occurs while its negation does not.
    pub fn is_pure(&self, literal: CLiteral) -> bool {
        self.count(literal) > 0 && self.count(literal.negate()) == 0
    }

    /// Every pure literal, in order of first occurrence.
    pub fn pure_literals(&self) -> Vec<CLiteral> {
        self.order
            .iter()
            .copied()
            .filter(|literal| self.count(literal.negate()) == 0)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_clause_detection() {
        let formula = Formula::from(vec![vec![1, 2], vec![]]);
        assert!(formula.has_empty_clause());
        assert!(!formula.is_empty());

        assert!(!Formula::default().has_empty_clause());
        assert!(Formula::default().is_empty());
    }

    #[test]
    fn first_unit_is_stable() {
        let formula = Formula::from(vec![vec![1, 2], vec![-3], vec![4]]);
        assert_eq!(formula.first_unit(), Some(-3));

        let formula = Formula::from(vec![vec![1, 2]]);
        assert_eq!(formula.first_unit(), None);
    }

    #[test]
    fn pure_in_order_of_occurrence() {
        let formula = Formula::from(vec![vec![3, -1], vec![1, 2], vec![-4, 3]]);
        let occurrences = formula.occurrences();

        assert_eq!(occurrences.pure_literals(), vec![3, 2, -4]);
        assert!(occurrences.is_pure(-4));
        assert!(!occurrences.is_pure(1));
        assert!(!occurrences.is_pure(4));
    }

    #[test]
    fn max_atom() {
        assert_eq!(Formula::from(vec![vec![1, -7], vec![3]]).max_atom(), 7);
        assert_eq!(Formula::default().max_atom(), 0);
    }
}
