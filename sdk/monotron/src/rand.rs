use log::trace;

/// Upper bound (exclusive) of values returned by [`Rand::rand`].
pub const RAND_MAX: u32 = 32768;

const MULTIPLIER: u32 = 1_103_515_245;
const INCREMENT: u32 = 12_345;

/// Linear-congruential generator.
///
/// Starts from a zero seed, so an unseeded generator produces the same sequence on every
/// run. Call [`Rand::srand`] with something that varies (frame counter, keypress timing)
/// if you want otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rand {
    seed: u32,
}

impl Rand {
    pub const fn new() -> Self {
        Self { seed: 0 }
    }

    pub const fn with_seed(seed: u32) -> Self {
        Self { seed }
    }

    /// Overwrite the state.
    pub fn srand(&mut self, seed: u32) {
        trace!("rand reseeded with {seed}");
        self.seed = seed;
    }

    /// Advance the state and return a value in `0..RAND_MAX`.
    pub fn rand(&mut self) -> i32 {
        self.seed = self.seed.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        (self.seed % RAND_MAX) as i32
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }
}
