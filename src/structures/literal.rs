/*!
Literals, as atoms paired with a polarity.

The canonical literal is a nonzero signed integer, following DIMACS.
The magnitude of the integer is the atom of the literal, and the sign of the integer is the polarity of the literal.

```rust
# use tandem_sat::structures::literal::{CLiteral, Literal};
let p: CLiteral = CLiteral::new(3, false);
assert_eq!(p, -3);
assert_eq!(p.atom(), 3);
assert!(!p.polarity());
assert_eq!(p.negate(), 3);
```
*/

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash + Copy {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;
}

/// The representation of a literal as a signed integer.
pub type IntLiteral = i32;

/// The canonical implementation of a literal.
pub type CLiteral = IntLiteral;

impl Literal for IntLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        match polarity {
            true => atom as IntLiteral,
            false => -(atom as IntLiteral),
        }
    }

    fn negate(&self) -> Self {
        -self
    }

    fn atom(&self) -> Atom {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        self.is_positive()
    }
}
