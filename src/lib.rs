//! A library for determining the satisfiability of boolean formulas written in conjunctive normal form.
//!
//! tandem_sat pairs two search procedures over a single representation of a formula:
//! - A complete [backtracking search](crate::procedures::dpll), which repeatedly simplifies a formula by [pure literal elimination](crate::procedures::pure) and [unit propagation](crate::procedures::unit), makes random decisions, and (optionally) [restarts](crate::procedures::schedulers).
//! - An incomplete [random walk](crate::procedures::walk), which flips atoms drawn from unsatisfied clauses of a complete valuation until every clause is satisfied or some budget is exhausted.
//!
//! # Orientation
//!
//! The library is designed around a [context].
//! A context is built from a [configuration](crate::config), reads a formula in [DIMACS](crate::builder::dimacs) form, and owns all state relevant to a solve:
//! - The formula, as read.
//! - [Counters](crate::context::Counters) of decisions, restarts, and flips.
//! - A seedable source of (pseudo)randomness, so a fixed seed reproduces a solve exactly.
//!
//! Each solve returns an outcome specific to the procedure used, and each outcome may be summarised as a [Report](crate::reports::Report).
//!
//! # Examples
//!
//! + Parse and solve a DIMACS formula with the complete search.
//!
//! ```rust
//! # use tandem_sat::config::Config;
//! # use tandem_sat::context::Context;
//! # use tandem_sat::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let dimacs = b"
//! p cnf 2 4
//!  1  2 0
//! -1  2 0
//! -1 -2 0
//!  1 -2 0
//! ";
//!
//! assert!(the_context.read_dimacs(dimacs.as_slice()).is_ok());
//! let outcome = the_context.dpll().unwrap();
//! assert_eq!(outcome.report(), Report::Unsatisfiable);
//! ```
//!
//! + Search for a model with the random walk.
//!
//! ```rust
//! # use tandem_sat::config::Config;
//! # use tandem_sat::context::Context;
//! # use tandem_sat::reports::{Report, WalkOutcome};
//! let mut the_context = Context::from_config(Config::default());
//!
//! assert!(the_context.read_dimacs(b"1 2 0\n-1 0\n".as_slice()).is_ok());
//!
//! match the_context.walk().unwrap() {
//!     WalkOutcome::Satisfiable { model, .. } => assert_eq!(model.as_dimacs(), "-1 2 0"),
//!     _ => panic!("a model is found within the default budget"),
//! }
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, with targets listed in [misc::log].
//! No log implementation is provided by the library.

pub mod builder;
pub mod config;
pub mod context;
pub mod generic;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
