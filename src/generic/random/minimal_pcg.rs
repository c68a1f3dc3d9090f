//! A simple pseudorandom number generator.
//!
//! Specifically, a translation of the *really* minimal C PCG32 implementation from <https://www.pcg-random.org/> implemented to satisfy the [RngCore] trait.
//!
//! Each [context](crate::context) owns a source of rng, seeded from the [configuration](crate::config::Config::random_seed).
//! The context is parameterised to anything which satisfies [rand::Rng] and [Default], though to keep the rest of the library straightforward the rng is fixed in [Context](crate::context::Context) as [MinimalPCG32].
//!
//! As every random choice made during a solve is drawn from the rng of the context, a seed fixes the trace of a solve.

use rand::SeedableRng;
use rand_core::{impls, Error, RngCore};

/// State and increment
#[derive(Default)]
pub struct MinimalPCG32 {
    state: u64,
    inc: u64,
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;

        self.state = old_state
            .wrapping_mul(6364136223846793005_u64)
            .wrapping_add(self.inc);

        let xorshifted = ((old_state >> 18) ^ old_state) >> 27;
        let rot = (old_state >> 59) as u32;
        (xorshifted as u32).rotate_right(rot)
    }

    // Two 32 bit outputs, as samplers such as gen_bool compare against the full 64 bit range.
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        /// Entirely unmotivated.
        const INCREMENT: u64 = 3215534235932367345;
        let mut rng = Self {
            state: 0,
            inc: INCREMENT,
        };
        rng.next_u32();
        rng.state = rng.state.wrapping_add(u64::from_le_bytes(seed));
        rng.next_u32();
        rng
    }
}
