/*!
Valuations, as functions from atoms to truth values.

Two implementations are used:
- A [Model] is a complete valuation returned from a solve, stored as a sequence of literals ordered by atom.
- A [BitValuation] is the dense valuation mutated by the [random walk](crate::procedures::walk), stored as one bit per atom.

```rust
# use tandem_sat::structures::valuation::{Model, Valuation};
// Atoms absent from the trail default to true.
let model = Model::from_trail(&[3, -1], 4);
assert_eq!(model.as_dimacs(), "-1 2 3 4 0");
assert_eq!(model.value_of(1), Some(false));
assert_eq!(model.value_of(5), None);
```
*/

use fixedbitset::FixedBitSet;

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
};

/// Something which may assign truth values to atoms.
pub trait Valuation {
    /// The value of the atom on the valuation, if the atom has a value.
    fn value_of(&self, atom: Atom) -> Option<bool>;

    /// The number of atoms the valuation is defined over.
    fn atom_count(&self) -> usize;
}

/// A complete valuation, as one literal for each atom from 1 to the atom count, in ascending order of atom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Model {
    literals: Vec<CLiteral>,
}

impl Model {
    /// A model from a trail of literals, where atoms absent from the trail are valued true.
    ///
    /// The trail is assumed to contain at most one literal for each atom.
    /// Literals whose atom exceeds the atom count are ignored.
    pub fn from_trail(trail: &[CLiteral], atom_count: Atom) -> Self {
        let mut literals: Vec<CLiteral> = (1..=atom_count)
            .map(|atom| CLiteral::new(atom, true))
            .collect();

        for literal in trail {
            if let Some(slot) = literals.get_mut((literal.atom() as usize).wrapping_sub(1)) {
                *slot = *literal;
            }
        }

        Model { literals }
    }

    /// The literals of the model, in ascending order of atom.
    pub fn literals(&self) -> &[CLiteral] {
        &self.literals
    }

    /// The model in the form of a DIMACS value line, without the leading `v`.
    pub fn as_dimacs(&self) -> String {
        let mut the_string = String::default();
        for literal in &self.literals {
            the_string.push_str(&format!("{literal} "));
        }
        the_string.push('0');
        the_string
    }
}

impl Valuation for Model {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        self.literals
            .get((atom as usize).wrapping_sub(1))
            .map(|literal| literal.polarity())
    }

    fn atom_count(&self) -> usize {
        self.literals.len()
    }
}

/// A dense valuation, with bit *a - 1* set exactly when atom *a* is true.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitValuation {
    bits: FixedBitSet,
}

impl BitValuation {
    /// A valuation on which every one of `atom_count` atoms is false.
    pub fn all_false(atom_count: Atom) -> Self {
        BitValuation {
            bits: FixedBitSet::with_capacity(atom_count as usize),
        }
    }

    /// A valuation whose value for atom *a* is given by `value(a)`, with values requested in ascending order of atom.
    pub fn from_fn(atom_count: Atom, mut value: impl FnMut(Atom) -> bool) -> Self {
        let mut valuation = BitValuation::all_false(atom_count);
        for atom in 1..=atom_count {
            valuation.bits.set(atom as usize - 1, value(atom));
        }
        valuation
    }

    /// Inverts the value of the atom.
    ///
    /// # Panics
    /// If the atom is not defined on the valuation.
    pub fn flip(&mut self, atom: Atom) {
        self.bits.toggle(atom as usize - 1);
    }

    /// The valuation as a [Model].
    pub fn to_model(&self) -> Model {
        Model {
            literals: (1..=self.bits.len() as Atom)
                .map(|atom| CLiteral::new(atom, self.bits.contains(atom as usize - 1)))
                .collect(),
        }
    }
}

impl Valuation for BitValuation {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        match atom {
            0 => None,
            _ if atom as usize > self.bits.len() => None,
            _ => Some(self.bits.contains(atom as usize - 1)),
        }
    }

    fn atom_count(&self) -> usize {
        self.bits.len()
    }
}
