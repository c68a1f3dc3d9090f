//! Abstract structures and their canonical representations.
//!
//! - [Atoms](atom) (aka. variables) and [literals](literal).
//! - [Clauses](clause), as sequences of literals.
//! - [Formulas](formula), as sequences of clauses.
//! - [Valuations](valuation), as a (partial) function from atoms to truth values.
//! - [Trails](trail), as the sequence of literals assigned during a complete search.

pub mod atom;
pub mod clause;
pub mod formula;
pub mod literal;
pub mod trail;
pub mod valuation;
