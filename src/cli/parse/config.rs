use clap::ArgMatches;

use tandem_sat::config::{self, Config, ConfigOption, RestartName};

/// The search requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Solver {
    Dpll,
    Walk,
}

pub fn solver_from_args(args: &ArgMatches) -> Solver {
    match args.try_get_one::<String>("solver") {
        Ok(Some(name)) if name == "walk" => Solver::Walk,
        _ => Solver::Dpll,
    }
}

fn set_option<T: Clone + PartialOrd + std::fmt::Display>(
    option: &mut ConfigOption<T>,
    value: T,
) -> Result<(), String> {
    match option.set(value.clone()) {
        true => Ok(()),
        false => {
            let (min, max) = option.min_max();
            Err(format!(
                "{value} is outside the bounds of {} ({min} to {max})",
                option.name
            ))
        }
    }
}

pub fn config_from_args(args: &ArgMatches) -> Result<Config, String> {
    let mut the_config = Config::default();

    if let Ok(Some(seed)) = args.try_get_one::<u64>("seed") {
        set_option(&mut the_config.random_seed, *seed)?;
    };

    if let Ok(Some(interval)) = args.try_get_one::<usize>("restart_interval") {
        set_option(&mut the_config.restart_interval, *interval)?;
    };

    if let Ok(Some(initial)) = args.try_get_one::<f64>("restart_initial") {
        set_option(&mut the_config.restart_initial, *initial)?;
    };

    if let Ok(Some(factor)) = args.try_get_one::<f64>("restart_factor") {
        set_option(&mut the_config.restart_factor, *factor)?;
    };

    // After the restart parameters, as a strategy is built from the parameters configured.
    if let Ok(Some(name)) = args.try_get_one::<String>("restart") {
        match name.parse::<RestartName>() {
            Ok(name) => the_config.restart = the_config.restart_strategy(name),
            Err(()) => return Err(format!("unknown restart strategy {name}")),
        }
    };

    if let Ok(Some(limit)) = args.try_get_one::<usize>("decision_limit") {
        the_config.decision_limit = Some(*limit)
    };

    if let Ok(Some(lean)) = args.try_get_one::<config::PolarityLean>("polarity_lean") {
        set_option(&mut the_config.polarity_lean, *lean)?;
    };

    if let Ok(Some(flips)) = args.try_get_one::<usize>("max_flips") {
        set_option(&mut the_config.max_flips, *flips)?;
    };

    if let Ok(Some(secs)) = args.try_get_one::<u64>("time_limit") {
        the_config.time_limit = Some(std::time::Duration::from_secs(*secs))
    };

    if let Ok(Some(true)) = args.try_get_one::<bool>("full_recompute") {
        the_config.incremental_walk.value = false
    };

    Ok(the_config)
}

#[cfg(test)]
mod tests {
    use tandem_sat::config::RestartStrategy;

    use super::*;
    use crate::parse::cli::cli;

    fn config_of(args: &[&str]) -> Result<Config, String> {
        let matches = cli().try_get_matches_from(args).unwrap();
        config_from_args(&matches)
    }

    #[test]
    fn defaults() {
        let the_config = config_of(&["tandem_sat"]).unwrap();
        assert_eq!(the_config.restart, RestartStrategy::None);
        assert!(the_config.incremental_walk.value);
        assert_eq!(the_config.decision_limit, None);
    }

    #[test]
    fn restart_with_parameters() {
        let the_config = config_of(&[
            "tandem_sat",
            "--restart-interval",
            "3",
            "--restart",
            "fixed",
        ])
        .unwrap();
        assert_eq!(the_config.restart, RestartStrategy::Fixed { interval: 3 });

        let the_config = config_of(&[
            "tandem_sat",
            "--restart",
            "exponential",
            "--restart-initial",
            "10",
            "--restart-factor",
            "2",
        ])
        .unwrap();
        assert_eq!(
            the_config.restart,
            RestartStrategy::Exponential {
                initial: 10.0,
                factor: 2.0
            }
        );
    }

    #[test]
    fn bounds() {
        assert!(config_of(&["tandem_sat", "--polarity-lean", "1.5"]).is_err());
        assert!(config_of(&["tandem_sat", "--restart-interval", "0"]).is_err());
        assert!(config_of(&["tandem_sat", "--max-flips", "0"]).is_ok());
    }

    #[test]
    fn walk_switches() {
        let matches = cli()
            .try_get_matches_from(["tandem_sat", "--solver", "walk", "--full-recompute"])
            .unwrap();
        assert_eq!(solver_from_args(&matches), Solver::Walk);
        assert!(!config_from_args(&matches).unwrap().incremental_walk.value);
    }
}
