/*!
The trail of a complete search.

A trail is the sequence of literals assigned true during a complete search, in the order the literals were assigned.
A literal is appended to a trail only when its atom has been eliminated from the formula of the search, and so a trail never contains both a literal and its negation.

# Restarts

A restart empties the in-progress part of a trail, without forgetting the literals which led to the (reduced) formula the search continues from.
So, a trail is split by a mark:
- Literals before the mark were assigned before the most recent restart. These are needed to extend a model of the reduced formula to a model of the original formula.
- Literals after the mark are the in-progress trail, which a restart empties.

```rust
# use tandem_sat::structures::trail::Trail;
let mut trail = Trail::default();
trail.push(1);
trail.push(-2);
trail.restart();

assert!(trail.in_progress().is_empty());
assert_eq!(trail.literals(), &[1, -2]);

trail.push(3);
assert_eq!(trail.in_progress(), &[3]);
```
*/

use crate::structures::literal::CLiteral;

/// A trail of assigned literals, split by a restart mark.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Trail {
    literals: Vec<CLiteral>,
    mark: usize,
}

impl Trail {
    /// Appends a literal to the trail.
    pub fn push(&mut self, literal: CLiteral) {
        self.literals.push(literal)
    }

    /// Appends literals to the trail, in order.
    pub fn extend(&mut self, literals: impl IntoIterator<Item = CLiteral>) {
        self.literals.extend(literals)
    }

    /// A clone of the trail extended with the literal.
    pub fn with(&self, literal: CLiteral) -> Self {
        let mut trail = self.clone();
        trail.push(literal);
        trail
    }

    /// Every literal of the trail, including those assigned before the most recent restart.
    pub fn literals(&self) -> &[CLiteral] {
        &self.literals
    }

    /// The literals assigned since the most recent restart.
    pub fn in_progress(&self) -> &[CLiteral] {
        &self.literals[self.mark..]
    }

    /// Empties the in-progress trail.
    pub fn restart(&mut self) {
        self.mark = self.literals.len();
    }
}
