/*!
General callbacks associated with a context.

Callbacks may be mutable functions.
Still, information passed from the solver is non-mutable.

# Callback types

- [CallbackTerminate] is consulted at each point a solve checks its budget, and ends the solve (as though the budget was exhausted) on returning true.
- [CallbackRestart] is called after each restart of a complete search.
*/

use super::GenericContext;

pub type CallbackTerminate = dyn FnMut() -> bool;

/// Details of a restart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RestartInfo {
    /// The count of decisions when the restart was triggered.
    pub decisions: usize,

    /// The count of restarts, including this restart.
    pub restarts: usize,

    /// The length of the in-progress trail, after the restart.
    pub trail: usize,

    /// The number of clauses in the formula the search continues from.
    pub clauses: usize,
}

pub type CallbackRestart = dyn FnMut(&RestartInfo);

impl<R: rand::Rng> GenericContext<R> {
    pub fn set_callback_terminate(&mut self, callback: Box<CallbackTerminate>) {
        self.callback_terminate = Some(callback);
    }

    pub fn check_callback_terminate(&mut self) -> bool {
        if let Some(callback) = &mut self.callback_terminate {
            callback()
        } else {
            false
        }
    }

    pub fn set_callback_restart(&mut self, callback: Box<CallbackRestart>) {
        self.callback_restart = Some(callback);
    }

    pub(crate) fn make_callback_restart(&mut self, info: &RestartInfo) {
        if let Some(callback) = &mut self.callback_restart {
            callback(info)
        }
    }
}
