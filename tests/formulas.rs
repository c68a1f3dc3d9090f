mod common;

use common::{context_from_file, formulas_in, restart_strategies};

use tandem_sat::{
    config::Config,
    reports::{DpllOutcome, Report, WalkOutcome},
    structures::literal::Literal,
};

mod dpll {
    use super::*;

    #[test]
    fn satisfiable() {
        for path in formulas_in("sat") {
            for strategy in restart_strategies() {
                for seed in 0..4 {
                    let mut config = Config::default();
                    config.random_seed.value = seed;
                    config.restart = strategy;
                    let mut the_context = context_from_file(&path, config);

                    match the_context.dpll() {
                        Ok(DpllOutcome::Satisfiable(model)) => {
                            assert!(the_context.formula.satisfied_on(&model), "{path:?}");

                            let atoms: Vec<_> = model.literals().iter().map(|l| l.atom()).collect();
                            let expected: Vec<_> = (1..=the_context.atom_count).collect();
                            assert_eq!(atoms, expected, "{path:?}");
                        }
                        other => panic!("{path:?} with {strategy}: {other:?}"),
                    }
                }
            }
        }
    }

    #[test]
    fn unsatisfiable() {
        for path in formulas_in("unsat") {
            for strategy in restart_strategies() {
                for seed in 0..4 {
                    let mut config = Config::default();
                    config.random_seed.value = seed;
                    config.restart = strategy;
                    let mut the_context = context_from_file(&path, config);

                    let outcome = the_context.dpll().unwrap();
                    assert_eq!(outcome.report(), Report::Unsatisfiable, "{path:?} with {strategy}");
                }
            }
        }
    }

    #[test]
    fn reproducible() {
        for path in formulas_in("sat").into_iter().chain(formulas_in("unsat")) {
            let solve = || {
                let mut config = Config::default();
                config.random_seed.value = 42;
                config.restart = tandem_sat::config::RestartStrategy::Luby;
                let mut the_context = context_from_file(&path, config);
                let outcome = the_context.dpll();
                (outcome, the_context.counters.decisions, the_context.counters.restarts)
            };
            assert_eq!(solve(), solve(), "{path:?}");
        }
    }

    #[test]
    fn decision_limit_before_any_decision() {
        for path in formulas_in("unsat") {
            let mut config = Config::default();
            config.decision_limit = Some(0);
            let mut the_context = context_from_file(&path, config);

            let outcome = the_context.dpll().unwrap();
            assert_eq!(the_context.counters.decisions, 0, "{path:?}");
            assert!(
                matches!(outcome, DpllOutcome::TimedOut | DpllOutcome::Unsatisfiable),
                "{path:?}"
            );
        }
    }
}

mod walk {
    use super::*;

    #[test]
    fn satisfiable() {
        for path in formulas_in("sat") {
            for seed in 0..4 {
                let mut config = Config::default();
                config.random_seed.value = seed;
                let mut the_context = context_from_file(&path, config);

                match the_context.walk() {
                    Ok(WalkOutcome::Satisfiable { model, flips }) => {
                        assert!(the_context.formula.satisfied_on(&model), "{path:?}");
                        assert_eq!(flips, the_context.counters.flips);
                    }
                    other => panic!("{path:?}: {other:?}"),
                }
            }
        }
    }

    #[test]
    fn unsatisfiable_is_unknown() {
        for path in formulas_in("unsat") {
            let mut config = Config::default();
            config.max_flips.value = 2_000;
            let mut the_context = context_from_file(&path, config);

            let outcome = the_context.walk().unwrap();
            assert_eq!(outcome.report(), Report::Unknown, "{path:?}");
            assert_eq!(outcome, WalkOutcome::NoSolution { flips: 2_000 }, "{path:?}");
        }
    }

    #[test]
    fn incremental_matches_recomputation() {
        for path in formulas_in("sat") {
            let walk = |incremental: bool| {
                let mut config = Config::default();
                config.random_seed.value = 3;
                config.incremental_walk.value = incremental;
                context_from_file(&path, config).walk()
            };
            assert_eq!(walk(true), walk(false), "{path:?}");
        }
    }
}
