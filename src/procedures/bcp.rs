/*!
Boolean constraint propagation.

Given a formula and a literal *l* asserted true, each clause of the formula is examined in order:
- If the clause contains *l* the clause is satisfied, and is dropped.
- Otherwise, if the clause contains the negation of *l* every occurrence of the negation is removed.
  Should this leave the empty clause, propagation stops with a [conflict](err::BCPError::Conflict).
- Otherwise, the clause is kept unchanged.

```rust
# use tandem_sat::procedures::bcp::bcp;
# use tandem_sat::structures::formula::Formula;
# use tandem_sat::types::err::BCPError;
let formula = Formula::from(vec![vec![1], vec![-1, 2]]);
assert_eq!(bcp(&formula, 1), Ok(Formula::from(vec![vec![2]])));

let formula = Formula::from(vec![vec![1], vec![-1]]);
assert_eq!(bcp(&formula, 1), Err(BCPError::Conflict));
```

BCP is the single primitive from which every other simplification of the complete search is built.
*/

use crate::{
    misc::log::targets::{self},
    structures::{
        clause::CClause,
        formula::Formula,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// The formula obtained by asserting the literal, or a conflict.
pub fn bcp(formula: &Formula, literal: CLiteral) -> Result<Formula, err::BCPError> {
    let negation = literal.negate();
    let mut reduced = Vec::with_capacity(formula.clause_count());

    for clause in formula.clauses() {
        if clause.contains(&literal) {
            continue;
        }

        if clause.contains(&negation) {
            let shortened: CClause = clause.iter().copied().filter(|l| *l != negation).collect();
            if shortened.is_empty() {
                log::trace!(target: targets::PROPAGATION, "Conflict from {literal}");
                return Err(err::BCPError::Conflict);
            }
            reduced.push(shortened);
        } else {
            reduced.push(clause.clone());
        }
    }

    Ok(Formula::from(reduced))
}
