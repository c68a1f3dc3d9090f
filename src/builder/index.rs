/*!
An index from each atom to the clauses the atom occurs in.

Clauses are identified by their position in a formula, and the clauses of an atom are in ascending order of position, without repetition.

```rust
# use tandem_sat::builder::OccurrenceIndex;
# use tandem_sat::structures::formula::Formula;
let formula = Formula::from(vec![vec![1, -2], vec![2, 3], vec![-2, -2]]);
let index = OccurrenceIndex::new(&formula, 4);

assert_eq!(index.clauses_of(2), &[0, 1, 2]);
assert_eq!(index.clauses_of(4), &[] as &[usize]);
```
*/

use crate::structures::{atom::Atom, formula::Formula, literal::Literal};

/// Clause positions, indexed by atom.
#[derive(Clone, Debug, Default)]
pub struct OccurrenceIndex {
    clauses: Vec<Vec<usize>>,
}

impl OccurrenceIndex {
    /// Builds the index of the formula, for atoms up to (and including) the atom count.
    ///
    /// Atoms of the formula larger than the atom count are omitted.
    pub fn new(formula: &Formula, atom_count: Atom) -> Self {
        let mut clauses = vec![Vec::default(); atom_count as usize + 1];

        for (position, clause) in formula.clauses().iter().enumerate() {
            for literal in clause {
                if let Some(positions) = clauses.get_mut(literal.atom() as usize) {
                    if positions.last() != Some(&position) {
                        positions.push(position);
                    }
                }
            }
        }

        OccurrenceIndex { clauses }
    }

    /// The positions of clauses containing the atom, in ascending order.
    pub fn clauses_of(&self, atom: Atom) -> &[usize] {
        self.clauses
            .get(atom as usize)
            .map(|positions| positions.as_slice())
            .unwrap_or(&[])
    }
}
