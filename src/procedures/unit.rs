/*!
Unit propagation.

While the formula contains a unit clause, the literal of the first unit clause (in clause order) is asserted by [bcp](crate::procedures::bcp).
Propagation ends when no unit clause remains, when the formula is empty, or on a conflict.

```rust
# use tandem_sat::procedures::unit::propagate_units;
# use tandem_sat::structures::formula::Formula;
let formula = Formula::from(vec![vec![1], vec![-1, 2], vec![-2, 3]]);
let (reduced, units) = propagate_units(formula).unwrap();

assert!(reduced.is_empty());
assert_eq!(units, vec![1, 2, 3]);
```
*/

use crate::{
    misc::log::targets::{self},
    procedures::bcp::bcp,
    structures::{formula::Formula, literal::CLiteral},
    types::err::{self},
};

/// The formula obtained by propagating unit clauses, with the propagated literals in order.
pub fn propagate_units(formula: Formula) -> Result<(Formula, Vec<CLiteral>), err::BCPError> {
    let mut formula = formula;
    let mut propagated = Vec::default();

    while let Some(unit) = formula.first_unit() {
        formula = bcp(&formula, unit)?;
        log::trace!(target: targets::PROPAGATION, "Unit: {unit}");
        propagated.push(unit);

        if formula.is_empty() {
            break;
        }
    }

    Ok((formula, propagated))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflicting_units() {
        let formula = Formula::from(vec![vec![1], vec![-1]]);
        assert_eq!(propagate_units(formula), Err(err::BCPError::Conflict));
    }

    #[test]
    fn first_unit_first() {
        let formula = Formula::from(vec![vec![2, 3], vec![-1], vec![1, -2], vec![4]]);
        let (reduced, units) = propagate_units(formula).unwrap();

        assert_eq!(units, vec![-1, -2, 3, 4]);
        assert!(reduced.is_empty());
    }

    #[test]
    fn propagation_stops_without_units() {
        let formula = Formula::from(vec![vec![1], vec![-1, 2, 3], vec![-2, -3]]);
        let (reduced, units) = propagate_units(formula).unwrap();

        assert_eq!(units, vec![1]);
        assert_eq!(reduced.clauses(), &[vec![2, 3], vec![-2, -3]]);
    }
}
