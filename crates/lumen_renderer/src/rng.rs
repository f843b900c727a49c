//! Pseudo-random numbers for the render loop.
//!
//! Every random draw (pixel jitter, unit-sphere rejection sampling, the
//! dielectric coin flip) goes through one explicitly owned generator, so a
//! render is fully determined by its seed and visitation order.

use rand::{Error, RngCore, SeedableRng};

/// Substitute state for a zero seed (zero is a fixed point of xorshift).
const ZERO_SEED_REPLACEMENT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Marsaglia xorshift generator with a single 64-bit state (13/7/17 triple).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    /// Create a generator from a seed. A zero seed is remapped to a fixed
    /// non-zero state.
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { ZERO_SEED_REPLACEMENT } else { seed };
        Self { state }
    }

    /// Derive an independent generator for pixel `(x, y)`.
    ///
    /// Lets a caller that splits the image across workers give each pixel its
    /// own stream instead of sharing one generator.
    pub fn for_pixel(seed: u64, x: u32, y: u32) -> Self {
        let mut z = seed ^ ((u64::from(x) << 32) | u64::from(y));
        Self::new(splitmix64(&mut z))
    }

    /// Current state, mostly useful for debugging.
    pub fn state(&self) -> u64 {
        self.state
    }
}

fn splitmix64(z: &mut u64) -> u64 {
    *z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut x = *z;
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

impl RngCore for XorShift64 {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for XorShift64 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}

/// Uniform float in [0, 1] from the full 64-bit output.
///
/// Divides by `u64::MAX` rather than masking mantissa bits, so 1.0 itself can
/// be returned after rounding.
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.next_u64() as f32 / u64::MAX as f32
}
