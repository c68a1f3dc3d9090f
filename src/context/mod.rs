/*!
The context --- to which a formula is added and within which solves take place.

Strictly, a [GenericContext] and a [Context].

The generic context is generic over the source of randomness.
[from_config](Context::from_config) is implemented for a context rather than a generic context to avoid requiring a source of randomness to be supplied alongside a config.

A context owns everything a solve mutates: counters, the source of randomness, and callbacks.
No state is shared between contexts, so independent contexts may be used in parallel and a context with a fixed seed reproduces a solve exactly.

# Example
```rust
# use tandem_sat::context::Context;
# use tandem_sat::config::Config;
# use tandem_sat::reports::{DpllOutcome, Report};
let mut the_context = Context::from_config(Config::default());

assert!(the_context.add_clause(vec![1, 2]).is_ok());
assert!(the_context.add_clause(vec![-1]).is_ok());

match the_context.dpll() {
    Ok(DpllOutcome::Satisfiable(model)) => assert_eq!(model.literals(), &[-1, 2]),
    _ => panic!("the formula is satisfiable"),
}
```
*/

pub mod callbacks;
mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericContext;
mod specific;
pub use specific::Context;
