use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

use tandem_sat::config::{self, PolarityLean};

pub fn cli() -> Command {
    Command::new("tandem_sat")
        .about("Determines whether a formula is satisfiable, by complete search or by random walk")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("path")
            .required(false)
            .num_args(1)
            .value_parser(value_parser!(PathBuf))
            .help("The DIMACS form CNF file to parse.")
            .long_help("The DIMACS form CNF file to parse.
If no path is given, or the path is '-', the formula is read from standard input."))

        .arg(Arg::new("solver")
            .long("solver")
            .value_parser(["dpll", "walk"])
            .required(false)
            .num_args(1)
            .default_value("dpll")
            .help("The search to use.")
            .long_help("The search to use.

dpll: A complete backtracking search, with pure literal elimination, unit propagation, and (optional) restarts.
walk: An incomplete random walk, which can find a model but can never establish unsatisfiability."))

        .arg(Arg::new("seed")
            .long("seed")
            .short('s')
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .help(format!("The seed for the source of randomness.
Default: {}", config::defaults::RANDOM_SEED)))

        .arg(Arg::new("restart")
            .long("restart")
            .value_parser(["none", "fixed", "exponential", "luby"])
            .required(false)
            .num_args(1)
            .help("The restart strategy of the complete search.")
            .long_help("The restart strategy of the complete search.
Default: none

Given d decisions have been made, and k restarts:
fixed:       Restart when d is a multiple of the interval.
exponential: Restart when d is at least initial * factor^k.
luby:        Restart when d is at least the sum of the first k + 1 elements of the luby sequence."))

        .arg(Arg::new("restart_interval")
            .long("restart-interval")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help(format!("The interval of the fixed restart strategy.
Default: {}", config::defaults::RESTART_INTERVAL)))

        .arg(Arg::new("restart_initial")
            .long("restart-initial")
            .value_parser(value_parser!(f64))
            .required(false)
            .num_args(1)
            .help(format!("The initial threshold of the exponential restart strategy.
Default: {}", config::defaults::RESTART_INITIAL)))

        .arg(Arg::new("restart_factor")
            .long("restart-factor")
            .value_parser(value_parser!(f64))
            .required(false)
            .num_args(1)
            .help(format!("The factor of the exponential restart strategy.
Default: {}", config::defaults::RESTART_FACTOR)))

        .arg(Arg::new("decision_limit")
            .long("decision-limit")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help("The maximum number of decisions of the complete search."))

        .arg(Arg::new("polarity_lean")
            .long("polarity-lean")
            .value_parser(value_parser!(PolarityLean))
            .required(false)
            .num_args(1)
            .help(format!("The probability of trying the positive value of an atom first.
Default: {}", config::defaults::POLARITY_LEAN)))

        .arg(Arg::new("max_flips")
            .long("max-flips")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help(format!("The maximum number of flips of the random walk.
Default: {}", config::defaults::MAX_FLIPS)))

        .arg(Arg::new("time_limit")
            .long("time-limit")
            .short('t')
            .value_name("SECONDS")
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .help("Time limit for the search, in seconds."))

        .arg(Arg::new("full_recompute")
            .long("full-recompute")
            .action(ArgAction::SetTrue)
            .required(false)
            .help("Recompute every unsatisfied clause after each flip of the random walk."))

        .arg(Arg::new("log_level")
            .long("log-level")
            .value_parser(["off", "error", "warn", "info", "debug", "trace"])
            .required(false)
            .num_args(1)
            .default_value("warn")
            .help("The level of logs written to standard error, when built with logs."))
}
