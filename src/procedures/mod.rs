/*!
Procedures for determining satisfiability.

The complete search is built from a handful of procedures on formulas, each returning a fresh formula:
- [bcp] simplifies a formula given some literal is true.
- [pure] eliminates all pure literals of a formula, by way of [bcp].
- [unit] propagates unit clauses of a formula, by way of [bcp].

Alongside procedures which make use of the context:
- [decision] chooses an atom, and an order in which to try the values of the atom.
- [schedulers] determines when to restart.
- [dpll] is the complete search.
- [walk] is the (incomplete) random walk.
*/

pub mod bcp;
pub mod decision;
pub mod dpll;
pub mod pure;
pub mod schedulers;
pub mod unit;
pub mod walk;
