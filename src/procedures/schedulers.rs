/*!
Restart schedules for the complete search.

A schedule is consulted once per decision with the global count of decisions *d*, and the count of restarts made so far *k*:

| Strategy                           | Due when                            |
|------------------------------------|-------------------------------------|
| [None](RestartStrategy::None)      | never                               |
| [Fixed](RestartStrategy::Fixed)    | *d* is a multiple of the interval   |
| [Exponential](RestartStrategy::Exponential) | *d* ≥ initial × factor^*k*  |
| [Luby](RestartStrategy::Luby)      | *d* ≥ S(*k*)                        |

Where S(*k*) is the sum of the first *k + 1* elements of the [luby sequence](crate::generic::luby).

Each restart made must be noted with [advance](RestartScheduler::advance), which increments *k*.

```rust
# use tandem_sat::config::RestartStrategy;
# use tandem_sat::procedures::schedulers::RestartScheduler;
let mut scheduler = RestartScheduler::new(RestartStrategy::Fixed { interval: 3 });
let due: Vec<usize> = (1..=9).filter(|d| scheduler.due(*d)).collect();
assert_eq!(due, vec![3, 6, 9]);
```
*/

use crate::{config::RestartStrategy, generic::luby::LubySums};

/// A restart schedule, and the count of restarts made on the schedule.
pub struct RestartScheduler {
    strategy: RestartStrategy,
    restarts: usize,
    luby: LubySums,
}

impl RestartScheduler {
    pub fn new(strategy: RestartStrategy) -> Self {
        RestartScheduler {
            strategy,
            restarts: 0,
            luby: LubySums::default(),
        }
    }

    /// Returns whether a restart is due, given the count of decisions made.
    pub fn due(&mut self, decisions: usize) -> bool {
        match self.strategy {
            RestartStrategy::None => false,

            RestartStrategy::Fixed { interval } => interval > 0 && decisions % interval == 0,

            RestartStrategy::Exponential { initial, factor } => {
                let exponent = i32::try_from(self.restarts).unwrap_or(i32::MAX);
                decisions as f64 >= initial * factor.powi(exponent)
            }

            RestartStrategy::Luby => decisions as u64 >= self.luby.sum(self.restarts),
        }
    }

    /// Notes a restart.
    pub fn advance(&mut self) {
        self.restarts += 1;
    }

    /// The count of restarts noted.
    pub fn restarts(&self) -> usize {
        self.restarts
    }
}
