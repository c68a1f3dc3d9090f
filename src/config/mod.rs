/*!
Configuration of a context.

All configuration for a context is contained within [Config].
Bounded options are [ConfigOption]s, which carry a name and the bounds a value must respect, so interfaces (such as the command line) may validate requests.

# Example

```rust
# use tandem_sat::config::{Config, RestartName, RestartStrategy};
let mut config = Config::default();
assert!(config.restart_interval.set(3));
config.restart = config.restart_strategy(RestartName::Fixed);

assert_eq!(config.restart, RestartStrategy::Fixed { interval: 3 });
```
*/

mod config_option;
pub use config_option::ConfigOption;

mod restart;
pub use restart::{RestartName, RestartStrategy};

pub mod defaults;

/// Representation for the probability of choosing `true`
pub type PolarityLean = f64;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The seed of the source of randomness.
    pub random_seed: ConfigOption<u64>,

    /// The strategy used to schedule restarts of the complete search.
    pub restart: RestartStrategy,

    /// The interval used when building a fixed restart strategy by name.
    pub restart_interval: ConfigOption<usize>,

    /// The initial bound used when building an exponential restart strategy by name.
    pub restart_initial: ConfigOption<f64>,

    /// The factor used when building an exponential restart strategy by name.
    pub restart_factor: ConfigOption<f64>,

    /// The maximum number of decisions made by the complete search, if any.
    pub decision_limit: Option<usize>,

    /// The probability of trying the positive polarity of a decision atom first.
    pub polarity_lean: ConfigOption<PolarityLean>,

    /// The maximum number of flips made by the random walk.
    pub max_flips: ConfigOption<usize>,

    /// The time limit for a solve, if any.
    pub time_limit: Option<std::time::Duration>,

    /// Maintain the unsatisfied clauses of the random walk through an index of occurrences, rather than by evaluating each clause after each flip.
    pub incremental_walk: ConfigOption<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            random_seed: ConfigOption {
                name: "seed",
                min: u64::MIN,
                max: u64::MAX,
                value: defaults::RANDOM_SEED,
            },

            restart: RestartStrategy::None,

            restart_interval: ConfigOption {
                name: "restart_interval",
                min: 1,
                max: usize::MAX,
                value: defaults::RESTART_INTERVAL,
            },

            restart_initial: ConfigOption {
                name: "restart_initial",
                min: f64::MIN_POSITIVE,
                max: f64::MAX,
                value: defaults::RESTART_INITIAL,
            },

            restart_factor: ConfigOption {
                name: "restart_factor",
                min: 1.0,
                max: f64::MAX,
                value: defaults::RESTART_FACTOR,
            },

            decision_limit: None,

            polarity_lean: ConfigOption {
                name: "polarity_lean",
                min: 0.0,
                max: 1.0,
                value: defaults::POLARITY_LEAN,
            },

            max_flips: ConfigOption {
                name: "max_flips",
                min: 0,
                max: usize::MAX,
                value: defaults::MAX_FLIPS,
            },

            time_limit: None,

            incremental_walk: ConfigOption {
                name: "incremental_walk",
                min: false,
                max: true,
                value: true,
            },
        }
    }
}

impl Config {
    /// The restart strategy of the given name, with parameters taken from the configuration.
    pub fn restart_strategy(&self, name: RestartName) -> RestartStrategy {
        match name {
            RestartName::None => RestartStrategy::None,
            RestartName::Fixed => RestartStrategy::Fixed {
                interval: self.restart_interval.value,
            },
            RestartName::Exponential => RestartStrategy::Exponential {
                initial: self.restart_initial.value,
                factor: self.restart_factor.value,
            },
            RestartName::Luby => RestartStrategy::Luby,
        }
    }
}
