#![allow(dead_code)]

use std::{fs::File, io::BufReader, path::PathBuf};

use tandem_sat::{
    builder::ParserInfo,
    config::{Config, RestartStrategy},
    context::Context,
    types::err::{self},
};

pub fn load_dimacs(context: &mut Context, path: &PathBuf) -> Result<ParserInfo, err::ErrorKind> {
    let file = match File::open(path) {
        Err(_) => panic!("Could not load {path:?}"),
        Ok(f) => f,
    };
    context.read_dimacs(BufReader::new(&file))
}

pub fn cnf_subdir(dir: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("cnf")
        .join(dir)
}

/// Every DIMACS file in the subdirectory of the test formulas.
pub fn formulas_in(dir: &str) -> Vec<PathBuf> {
    let pattern = format!("{}/*.cnf", cnf_subdir(dir).display());
    let formulas: Vec<PathBuf> = glob::glob(&pattern)
        .expect("bad glob")
        .flatten()
        .collect();
    assert!(!formulas.is_empty(), "Formulas missing");
    formulas
}

pub fn context_from_file(path: &PathBuf, config: Config) -> Context {
    let mut the_context = Context::from_config(config);
    if let Err(e) = load_dimacs(&mut the_context, path) {
        panic!("{path:?}: {e:?}");
    }
    the_context
}

/// A selection of restart strategies, with parameters small enough to restart often.
pub fn restart_strategies() -> Vec<RestartStrategy> {
    vec![
        RestartStrategy::None,
        RestartStrategy::Fixed { interval: 2 },
        RestartStrategy::Exponential {
            initial: 2.0,
            factor: 1.5,
        },
        RestartStrategy::Luby,
    ]
}
