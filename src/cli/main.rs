#![allow(clippy::collapsible_if)]

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::path::PathBuf;

use tandem_sat::{
    context::Context,
    reports::{DpllOutcome, Report, WalkOutcome},
    types::err::{self},
};

mod misc;
mod parse;

use crate::{
    misc::load_dimacs,
    parse::config::{solver_from_args, Solver},
};

fn main() {
    let matches = parse::cli::cli().get_matches();

    #[cfg(feature = "log")]
    misc::init_logger(&matches);

    let config = match parse::config::config_from_args(&matches) {
        Ok(config) => config,
        Err(message) => {
            println!("c Invalid configuration: {message}");
            std::process::exit(1);
        }
    };
    let solver = solver_from_args(&matches);

    let path = matches.get_one::<PathBuf>("path");
    match path {
        Some(path) if path.as_os_str() != "-" => println!("c Reading {}", path.display()),
        _ => println!("c Reading standard input"),
    }

    let mut the_context = Context::from_config(config);

    match load_dimacs(&mut the_context, path) {
        Ok(info) => {
            if let (Some(atoms), Some(clauses)) = (info.expected_atoms, info.expected_clauses) {
                println!("c Expected {atoms} atoms and {clauses} clauses");
            }
            println!(
                "c Added {} atoms and {} clauses",
                the_context.atom_count, info.added_clauses
            );
        }
        Err(e) => {
            println!("c {e}");
            std::process::exit(1);
        }
    };

    let report = match solver {
        Solver::Dpll => report_dpll(&mut the_context),
        Solver::Walk => report_walk(&mut the_context),
    };

    match report {
        Ok(Report::Satisfiable) => std::process::exit(10),
        Ok(Report::Unsatisfiable) => std::process::exit(20),
        Ok(Report::Unknown) => std::process::exit(0),
        Err(e) => {
            println!("c Context error: {e:?}");
            std::process::exit(2);
        }
    }
}

fn report_dpll(the_context: &mut Context) -> Result<Report, err::ErrorKind> {
    let outcome = the_context.dpll()?;
    let report = outcome.report();

    println!("{}", report.status_line());
    match &outcome {
        DpllOutcome::Satisfiable(model) => println!("v {}", model.as_dimacs()),
        DpllOutcome::Unsatisfiable => {}
        DpllOutcome::TimedOut => println!("c Search stopped before completion"),
    }

    println!(
        "c variable_selection was called {} times.",
        the_context.counters.decisions
    );
    println!("c Restarts: {}", the_context.counters.restarts);
    println!("c Time: {:.2?}", the_context.counters.time);

    Ok(report)
}

fn report_walk(the_context: &mut Context) -> Result<Report, err::ErrorKind> {
    let outcome = the_context.walk()?;
    let report = outcome.report();

    println!("{}", report.status_line());
    match &outcome {
        WalkOutcome::Satisfiable { model, .. } => println!("v {}", model.as_dimacs()),
        WalkOutcome::NoSolution { .. } => println!("c No solution found within the flip limit"),
        WalkOutcome::TimedOut { .. } => println!("c Timeout reached"),
    }

    println!("c Flip count: {}", outcome.flips());
    println!("c Time: {:.2?}", the_context.counters.time);

    Ok(report)
}
