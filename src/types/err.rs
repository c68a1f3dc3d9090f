//! Error types used in the library.
//!
//! - Parse errors are fatal, and are returned before any search begins.
//! - BCP errors are expected, and are used to control the flow of the complete search.
//! - Exhausting a budget is not an error. Instead, each procedure has an outcome for this case.
//!
//! Names of the error enums overlap with corresponding procedures.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

/// The general error type, wrapping more specific errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// An error when parsing a formula.
    Parse(ParseError),

    /// An error during boolean constraint propagation.
    BCP(BCPError),

    /// A procedure was called on a structure it is not defined for.
    ///
    /// This is unexpected, and indicates a defect.
    InvalidState,
}

/// Noted errors when parsing a DIMACS formula.
///
/// Each error carries the line on which the error was found.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// A line could not be read.
    Line(usize),

    /// The problem specification (`p cnf <atoms> <clauses>`) is malformed.
    ProblemSpecification(usize),

    /// A problem specification was found after some clause.
    MisplacedProblem(usize),

    /// A token is not an integer, or is too large to represent an atom.
    Literal(usize),

    /// A `0` was followed by further literals.
    MisplacedTerminator(usize),

    /// A clause was not terminated by `0`.
    MissingTerminator(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Line(line) => write!(f, "failed to read line {line}"),
            Self::ProblemSpecification(line) => {
                write!(f, "malformed problem specification on line {line}")
            }
            Self::MisplacedProblem(line) => {
                write!(f, "problem specification after clauses on line {line}")
            }
            Self::Literal(line) => write!(f, "invalid literal on line {line}"),
            Self::MisplacedTerminator(line) => write!(f, "literals after 0 on line {line}"),
            Self::MissingTerminator(line) => write!(f, "clause without terminating 0 on line {line}"),
        }
    }
}

/// Noted errors during boolean constraint propagation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BCPError {
    /// Some clause was reduced to the empty clause.
    /// This is expected from time to time, and ends the current branch of a search.
    Conflict,
}

impl From<BCPError> for ErrorKind {
    fn from(e: BCPError) -> Self {
        ErrorKind::BCP(e)
    }
}
