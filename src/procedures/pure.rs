/*!
Procedures to eliminate pure literals.

A literal is pure in a formula if the literal occurs in the formula while its negation does not.
Asserting a pure literal only removes clauses, so a formula is satisfiable exactly when the formula obtained by asserting a pure literal is satisfiable.

# The snapshot

Occurrences are counted once, over the formula given.
All pure literals of that count are collected, in order of first occurrence, and then asserted one after another against the progressively reduced formula.
Counts are not revised between assertions, so a literal which becomes pure only after some other pure literal is asserted is left for the next call.

A pure literal of the snapshot whose every clause was removed by some earlier assertion no longer occurs in the formula.
Asserting such a literal would leave the formula unchanged, and so the literal is skipped (and is not returned).

```rust
# use tandem_sat::procedures::pure::eliminate_pure_literals;
# use tandem_sat::structures::formula::Formula;
let formula = Formula::from(vec![vec![1, 2], vec![1, 3]]);
let (reduced, pure) = eliminate_pure_literals(formula).unwrap();

assert!(reduced.is_empty());
assert_eq!(pure, vec![1]);
```

In the example, `2` and `3` are also pure in the snapshot, though after asserting `1` neither occurs.
*/

use crate::{
    misc::log::targets::{self},
    procedures::bcp::bcp,
    structures::{formula::Formula, literal::CLiteral},
    types::err::{self},
};

/// The formula obtained by asserting every pure literal of the formula, with the pure literals asserted in order.
pub fn eliminate_pure_literals(
    formula: Formula,
) -> Result<(Formula, Vec<CLiteral>), err::BCPError> {
    let snapshot = formula.occurrences().pure_literals();

    let mut formula = formula;
    let mut pure_literals = Vec::with_capacity(snapshot.len());
    for literal in snapshot {
        if !formula.clauses().iter().any(|clause| clause.contains(&literal)) {
            continue;
        }
        formula = bcp(&formula, literal)?;
        pure_literals.push(literal);
    }

    if !pure_literals.is_empty() {
        log::trace!(target: targets::PREPROCESSING, "Pure: {pure_literals:?}");
    }

    Ok((formula, pure_literals))
}
