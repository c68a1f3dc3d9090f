//! Default values of configuration options.

pub const RANDOM_SEED: u64 = 0;

pub const RESTART_INTERVAL: usize = 100;

pub const RESTART_INITIAL: f64 = 100.0;

pub const RESTART_FACTOR: f64 = 1.5;

/// A fair coin.
pub const POLARITY_LEAN: f64 = 0.5;

pub const MAX_FLIPS: usize = 1_000_000;
