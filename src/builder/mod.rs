/*!
Tools for building a context.

- [dimacs] reads a formula in DIMACS form into a context.
- [index] builds an index from each atom to the clauses the atom occurs in.

Clauses may also be added programatically through [add_clause](crate::context::GenericContext::add_clause).
*/

pub mod dimacs;
pub use dimacs::ParserInfo;

pub mod index;
pub use index::OccurrenceIndex;
