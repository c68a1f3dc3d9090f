/*!
Reading formulas in DIMACS form.

A DIMACS formula is a sequence of lines, where:
- Lines beginning with `c` are comments, and are ignored.
- A line of the form `p cnf <atoms> <clauses>` is the problem specification.
  The counts are informational, and are not checked against the formula.
- A line beginning with `%` ends the formula (as used in some SATLIB benchmarks).
- Every other (non-empty) line is a clause, given as whitespace separated literals terminated by `0`.

The atom count of the context is the larger of the count declared in the problem specification and the largest atom read.

Reading is all or nothing: on any error the context is unchanged, and no search should be attempted.

```rust
# use tandem_sat::context::Context;
# use tandem_sat::config::Config;
# use tandem_sat::types::err::{ErrorKind, ParseError};
let mut the_context = Context::from_config(Config::default());

let info = the_context.read_dimacs(b"c example\np cnf 4 2\n1 -2 0\n3 0\n".as_slice()).unwrap();
assert_eq!(info.expected_atoms, Some(4));
assert_eq!(info.added_clauses, 2);
assert_eq!(the_context.atom_count, 4);

let mut broken_context = Context::from_config(Config::default());
let error = broken_context.read_dimacs(b"1 x 0\n".as_slice());
assert_eq!(error, Err(ErrorKind::Parse(ParseError::Literal(1))));
```
*/

use std::io::BufRead;

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::CClause,
        formula::Formula,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// Details of a formula read from DIMACS.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    /// The count of atoms given in the problem specification, if present.
    pub expected_atoms: Option<usize>,

    /// The count of clauses given in the problem specification, if present.
    pub expected_clauses: Option<usize>,

    /// The largest atom read.
    pub added_atoms: usize,

    /// The number of clauses read.
    pub added_clauses: usize,
}

impl<R: rand::Rng> GenericContext<R> {
    /// Reads a DIMACS formula into the context.
    ///
    /// ```rust,ignore
    /// context.read_dimacs(BufReader::new(&file))?;
    /// ```
    pub fn read_dimacs(
        &mut self,
        mut reader: impl BufRead,
    ) -> Result<ParserInfo, err::ErrorKind> {
        let mut info = ParserInfo::default();
        let mut formula = Formula::default();
        let mut max_atom: Atom = 0;

        let mut buffer = String::with_capacity(1024);
        let mut line_counter = 0;

        'formula_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ParseError::Line(line_counter + 1).into()),
            }

            let line = buffer.trim();

            match line.chars().next() {
                None | Some('c') => {}

                Some('%') => break 'formula_loop,

                Some('p') => {
                    if info.expected_atoms.is_some() || formula.clause_count() > 0 {
                        return Err(err::ParseError::MisplacedProblem(line_counter).into());
                    }
                    let (atoms, clauses) = match problem_specification(line) {
                        Some((atoms, clauses)) if atoms <= ATOM_MAX as usize => (atoms, clauses),
                        _ => return Err(err::ParseError::ProblemSpecification(line_counter).into()),
                    };

                    log::info!(target: targets::PARSER, "Expecting {atoms} atoms and {clauses} clauses");
                    info.expected_atoms = Some(atoms);
                    info.expected_clauses = Some(clauses);
                }

                Some(_) => {
                    let clause = clause_line(line, line_counter)?;
                    if let Some(max) = clause.iter().map(|literal| literal.atom()).max() {
                        max_atom = max_atom.max(max);
                    }
                    formula.push(clause);
                }
            }
        }

        info.added_atoms = max_atom as usize;
        info.added_clauses = formula.clause_count();

        let declared = info.expected_atoms.unwrap_or(0) as Atom;

        log::info!(target: targets::PARSER, "Read {} atoms and {} clauses", info.added_atoms, info.added_clauses);

        for clause in formula.into_clauses() {
            self.formula.push(clause);
        }
        self.ensure_atoms(declared.max(max_atom));

        Ok(info)
    }
}

/// The atom and clause counts of a problem specification `p cnf <atoms> <clauses>`.
fn problem_specification(line: &str) -> Option<(usize, usize)> {
    let mut problem_details = line.split_whitespace();

    if problem_details.next() != Some("p") || problem_details.next() != Some("cnf") {
        return None;
    }

    let atoms = problem_details.next()?.parse().ok()?;
    let clauses = problem_details.next()?.parse().ok()?;

    match problem_details.next() {
        None => Some((atoms, clauses)),
        Some(_) => None,
    }
}

/// The clause of a line, requiring the line to end with a single `0`.
fn clause_line(line: &str, line_number: usize) -> Result<CClause, err::ParseError> {
    let mut clause = CClause::default();
    let mut terminated = false;

    for item in line.split_whitespace() {
        if terminated {
            return Err(err::ParseError::MisplacedTerminator(line_number));
        }

        let literal = match item.parse::<CLiteral>() {
            Ok(int) if int.atom() <= ATOM_MAX => int,
            _ => return Err(err::ParseError::Literal(line_number)),
        };

        match literal {
            0 => terminated = true,
            _ => clause.push(literal),
        }
    }

    match terminated {
        true => Ok(clause),
        false => Err(err::ParseError::MissingTerminator(line_number)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, context::Context, types::err::ErrorKind};

    fn read(dimacs: &str) -> (Context, Result<ParserInfo, ErrorKind>) {
        let mut ctx = Context::from_config(Config::default());
        let result = ctx.read_dimacs(dimacs.as_bytes());
        (ctx, result)
    }

    #[test]
    fn comments_and_header() {
        let (ctx, result) = read("c a comment\np cnf 3 2\n1 -3 0\nc another\n2 0\n");
        let info = result.unwrap();

        assert_eq!(info.expected_clauses, Some(2));
        assert_eq!(info.added_atoms, 3);
        assert_eq!(ctx.formula.clauses(), &[vec![1, -3], vec![2]]);
    }

    #[test]
    fn header_counts_are_not_enforced() {
        let (ctx, result) = read("p cnf 10 7\n1 2 0\n");
        assert!(result.is_ok());
        assert_eq!(ctx.atom_count, 10);
        assert_eq!(ctx.formula.clause_count(), 1);
    }

    #[test]
    fn atoms_without_header() {
        let (ctx, result) = read("1 -5 0\n-2 0\n");
        assert_eq!(result.unwrap().expected_atoms, None);
        assert_eq!(ctx.atom_count, 5);
    }

    #[test]
    fn atoms_beyond_header() {
        let (ctx, _) = read("p cnf 2 1\n1 -4 0\n");
        assert_eq!(ctx.atom_count, 4);
    }

    #[test]
    fn empty_clause_line() {
        let (ctx, result) = read("p cnf 1 2\n1 0\n0\n");
        assert!(result.is_ok());
        assert!(ctx.formula.has_empty_clause());
    }

    #[test]
    fn percent_ends_formula() {
        let (ctx, result) = read("1 0\n%\n0\n");
        assert!(result.is_ok());
        assert_eq!(ctx.formula.clause_count(), 1);
    }

    #[test]
    fn errors() {
        let cases = [
            ("1 two 0\n", ErrorKind::Parse(err::ParseError::Literal(1))),
            ("1 0 2 0\n", ErrorKind::Parse(err::ParseError::MisplacedTerminator(1))),
            ("1 2\n", ErrorKind::Parse(err::ParseError::MissingTerminator(1))),
            ("p cnf x 2\n", ErrorKind::Parse(err::ParseError::ProblemSpecification(1))),
            ("p dnf 1 1\n", ErrorKind::Parse(err::ParseError::ProblemSpecification(1))),
            ("1 0\np cnf 1 1\n", ErrorKind::Parse(err::ParseError::MisplacedProblem(2))),
            ("-2147483648 0\n", ErrorKind::Parse(err::ParseError::Literal(1))),
        ];

        for (dimacs, expected) in cases {
            let (ctx, result) = read(dimacs);
            assert_eq!(result, Err(expected), "{dimacs:?}");
            assert!(ctx.formula.is_empty());
        }
    }

    #[test]
    fn written_formulas_read_back() {
        let (ctx, result) = read("c written\n1 -2 0\n2 3 -4 0\n0\n");
        assert!(result.is_ok());

        let written = ctx.formula.as_dimacs(6);
        assert_eq!(written, "p cnf 6 3\n1 -2 0\n2 3 -4 0\n0\n");

        let (reread, result) = read(&written);
        assert_eq!(result.unwrap().expected_atoms, Some(6));
        assert_eq!(reread.formula, ctx.formula);
        assert_eq!(reread.atom_count, 6);
    }
}
