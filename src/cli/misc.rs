use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::PathBuf,
};

use tandem_sat::{
    builder::ParserInfo,
    context::Context,
    types::err::{self},
};

/// Failures when loading a formula.
pub enum LoadError {
    File(PathBuf, std::io::Error),
    Dimacs(err::ErrorKind),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path, e) => write!(f, "Could not open {}: {e}", path.display()),
            Self::Dimacs(err::ErrorKind::Parse(e)) => write!(f, "Error loading DIMACS: {e}"),
            Self::Dimacs(e) => write!(f, "Error loading DIMACS: {e:?}"),
        }
    }
}

/// Reads a DIMACS formula from the path into the context, or from standard input if there is no path (or the path is '-').
pub fn load_dimacs(context: &mut Context, path: Option<&PathBuf>) -> Result<ParserInfo, LoadError> {
    let reader: Box<dyn BufRead> = match path {
        Some(path) if path.as_os_str() != "-" => match File::open(path) {
            Ok(file) => Box::new(BufReader::new(file)),
            Err(e) => return Err(LoadError::File(path.clone(), e)),
        },
        _ => Box::new(BufReader::new(std::io::stdin())),
    };

    context.read_dimacs(reader).map_err(LoadError::Dimacs)
}

/// Installs a logger writing to standard error, with the level of the args unless overridden by `RUST_LOG`.
#[cfg(feature = "log")]
pub fn init_logger(args: &clap::ArgMatches) {
    let level = match args.try_get_one::<String>("log_level") {
        Ok(Some(level)) => level.as_str(),
        _ => "warn",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Stderr)
        .init();
}
