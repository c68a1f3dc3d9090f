//! Generic structures, independent of formulas.

pub mod luby;
pub mod random;
