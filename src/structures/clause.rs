/*!
Clauses, as disjunctions of literals.

The canonical clause is a vector of [canonical literals](crate::structures::literal::CLiteral), and the trait is implemented for slices of canonical literals so both vectors and borrowed clauses share methods.

The order of literals in a clause is the order the literals were read, and nothing in the library reorders the literals of a clause.
A clause may contain duplicate literals, and a clause may contain both a literal and its negation.

# The empty clause

A clause with no literals is unsatisfiable on every valuation, and the presence of the empty clause in a formula is a conflict.

```rust
# use tandem_sat::structures::clause::{CClause, Clause};
let clause: CClause = vec![1, -2, 3];
assert_eq!(clause.as_dimacs(true), "1 -2 3 0");
assert!(clause.contains(&-2));
```
*/

use crate::structures::{
    literal::{CLiteral, Literal},
    valuation::Valuation,
};

/// The clause trait.
pub trait Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// An iterator over all literals in the clause, in order.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// Returns whether some literal of the clause is true on the given valuation.
    ///
    /// Atoms without a value on the valuation do not satisfy a clause.
    fn satisfied_on(&self, valuation: &impl Valuation) -> bool;
}

/// The implementation of a clause as a vector of literals.
pub type VClause = Vec<CLiteral>;

/// The canonical implementation of a clause.
pub type CClause = VClause;

impl Clause for [CLiteral] {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = String::default();
        for literal in self {
            the_string.push_str(&format!("{literal} "));
        }
        match zero {
            true => the_string.push('0'),
            false => {
                the_string.pop();
            }
        }
        the_string
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn satisfied_on(&self, valuation: &impl Valuation) -> bool {
        self.iter()
            .any(|literal| valuation.value_of(literal.atom()) == Some(literal.polarity()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::valuation::Model;

    #[test]
    fn dimacs_strings() {
        let clause: CClause = vec![-1, 2];
        assert_eq!(clause.as_dimacs(true), "-1 2 0");
        assert_eq!(clause.as_dimacs(false), "-1 2");

        let empty: CClause = vec![];
        assert_eq!(empty.as_dimacs(true), "0");
    }

    #[test]
    fn satisfaction() {
        let model = Model::from_trail(&[-1, 2], 3);

        let clauses: [CClause; 4] = [vec![1, 2], vec![-1], vec![1, -2, -3], vec![]];

        assert!(clauses[0].satisfied_on(&model));
        assert!(clauses[1].satisfied_on(&model));
        assert!(!clauses[2].satisfied_on(&model));
        assert!(!clauses[3].satisfied_on(&model));
    }
}
