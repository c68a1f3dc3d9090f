/*!
(The representation of) an atom (aka. a 'variable').

Each atom is a u32 *u* such that 1 ≤ *u* ≤ the atom count of the formula.
Atoms are read directly from a DIMACS formula, so the atom `7` of a formula is the atom `7` of a context.

# Notes
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
- As literals are signed integers, the largest atom is bounded by the largest (positive) literal.
*/

pub type Atom = u32;

/// The largest atom which may be represented.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
