//! 64-bit Mersenne Twister PRNG (MT19937-64).
//!
//! Implements the standard Matsumoto–Nishimura 64-bit variant with a
//! high period (2^19937 - 1) and fully deterministic output for a fixed
//! seed. The sequence matches C++ `std::mt19937_64` for the same seed,
//! which pins the noise pattern a given session seed produces.

const NN: usize = 312;
const MM: usize = 156;
const MATRIX_A: u64 = 0xB502_6F5A_A966_19E9;
const UM: u64 = 0xFFFF_FFFF_8000_0000; // upper 33 bits
const LM: u64 = 0x7FFF_FFFF; // lower 31 bits

/// 64-bit Mersenne Twister PRNG with period 2^19937-1.
///
/// Constructed fresh from the session seed on every injection call, so the
/// draw at a given buffer position is identical across calls within a
/// session. The generator carries no entropy beyond its seed.
pub(crate) struct MersenneTwister64 {
    mt: [u64; NN],
    mti: usize,
}

impl MersenneTwister64 {
    /// Creates a new PRNG with a fixed, deterministic seed.
    ///
    /// # Parameters
    /// - `seed`: The seed value for deterministic output.
    pub(crate) fn with_seed(seed: u64) -> Self {
        let mut mt = [0u64; NN];
        mt[0] = seed;
        for i in 1..NN {
            let prev = mt[i - 1];
            mt[i] = 6364136223846793005u64
                .wrapping_mul(prev ^ (prev >> 62))
                .wrapping_add(i as u64);
        }
        MersenneTwister64 { mt, mti: NN }
    }

    /// Generates the next 64-bit pseudorandom value.
    pub(crate) fn next_u64(&mut self) -> u64 {
        let mag01: [u64; 2] = [0, MATRIX_A];

        if self.mti >= NN {
            for i in 0..(NN - MM) {
                let x = (self.mt[i] & UM) | (self.mt[i + 1] & LM);
                self.mt[i] = self.mt[i + MM] ^ (x >> 1) ^ mag01[(x & 1) as usize];
            }
            for i in (NN - MM)..(NN - 1) {
                let x = (self.mt[i] & UM) | (self.mt[i + 1] & LM);
                self.mt[i] = self.mt[i + MM - NN] ^ (x >> 1) ^ mag01[(x & 1) as usize];
            }
            let x = (self.mt[NN - 1] & UM) | (self.mt[0] & LM);
            self.mt[NN - 1] = self.mt[MM - 1] ^ (x >> 1) ^ mag01[(x & 1) as usize];
            self.mti = 0;
        }

        let mut x = self.mt[self.mti];
        self.mti += 1;

        // Tempering
        x ^= (x >> 29) & 0x5555_5555_5555_5555;
        x ^= (x << 17) & 0x71D6_7FFF_EDA6_0000;
        x ^= (x << 37) & 0xFFF7_EEE0_0000_0000;
        x ^= x >> 43;

        x
    }
}
