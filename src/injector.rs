//! Noise engine: deterministic in-place perturbation of pixel buffers.
//!
//! Walks a caller-owned byte buffer at a fixed stride and nudges each
//! visited byte by a small delta drawn from a generator seeded with the
//! session seed. The generator is rebuilt from scratch on every call, so
//! the full set of mutated indices and deltas is a pure function of the
//! seed and the buffer length.

use crate::error::NoiseError;
use crate::random::mersenne_twister::MersenneTwister64;
use crate::seed::{session_seed, SessionSeed};

/// Default distance between perturbed bytes (~0.1% of the buffer).
const DEFAULT_STRIDE: usize = 1000;

/// Default maximum per-byte change, giving deltas in [-2, 2].
const DEFAULT_AMPLITUDE: u8 = 2;

/// Deterministic pixel-noise engine bound to one session seed.
///
/// The engine holds no mutable state: [`inject`](Self::inject) derives a
/// fresh generator from the seed each time, so repeated calls within a
/// session perturb identical positions by identical amounts.
///
/// # Examples
///
/// ```
/// use pixelveil::{NoiseInjector, SessionSeed};
///
/// let injector = NoiseInjector::with_seed(SessionSeed::from_raw(99));
/// let mut a = vec![40u8; 5000];
/// let mut b = vec![40u8; 5000];
/// injector.inject(&mut a);
/// injector.inject(&mut b);
/// assert_eq!(a, b);
/// ```
#[derive(Debug)]
pub struct NoiseInjector {
    seed: SessionSeed,
    stride: usize,
    amplitude: u8,
}

impl Default for NoiseInjector {
    fn default() -> Self {
        Self::new()
    }
}

impl NoiseInjector {
    /// Creates an injector bound to the process-wide session seed.
    ///
    /// Triggers lazy seed creation if this is the first use in the process.
    pub fn new() -> Self {
        Self::with_seed(session_seed())
    }

    /// Creates an injector with an explicit seed and default parameters
    /// (stride 1000, amplitude 2).
    ///
    /// # Parameters
    /// - `seed`: The session seed driving the noise pattern.
    pub fn with_seed(seed: SessionSeed) -> Self {
        NoiseInjector {
            seed,
            stride: DEFAULT_STRIDE,
            amplitude: DEFAULT_AMPLITUDE,
        }
    }

    /// Creates an injector with custom stride and amplitude.
    ///
    /// A smaller stride perturbs more of the buffer; a larger amplitude
    /// perturbs each visited byte harder. Both trade imperceptibility for
    /// fingerprint disruption.
    ///
    /// # Parameters
    /// - `seed`: The session seed driving the noise pattern.
    /// - `stride`: Distance between visited bytes (minimum 1).
    /// - `amplitude`: Maximum absolute per-byte delta (1..=127).
    ///
    /// # Errors
    /// Returns [`NoiseError::StrideOutOfRange`] if `stride` is zero, or
    /// [`NoiseError::AmplitudeOutOfRange`] if `amplitude` is 0 or exceeds
    /// 127.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixelveil::{NoiseInjector, SessionSeed};
    ///
    /// let result = NoiseInjector::with_params(SessionSeed::from_raw(1), 0, 2);
    /// assert!(result.is_err());
    /// ```
    pub fn with_params(
        seed: SessionSeed,
        stride: usize,
        amplitude: u8,
    ) -> Result<Self, NoiseError> {
        if stride == 0 {
            return Err(NoiseError::StrideOutOfRange);
        }
        if !(1..=127).contains(&amplitude) {
            return Err(NoiseError::AmplitudeOutOfRange);
        }
        Ok(NoiseInjector {
            seed,
            stride,
            amplitude,
        })
    }

    /// Returns the seed this injector is bound to.
    pub const fn seed(&self) -> SessionSeed {
        self.seed
    }

    /// Perturbs the buffer in place.
    ///
    /// Visits indices 0, stride, 2*stride, … below the buffer length. Each
    /// visited byte consumes exactly one generator draw, reduced to a delta
    /// uniform over [-amplitude, amplitude], and is clamped back into
    /// [0, 255] after the addition. All other bytes are untouched. An empty
    /// buffer is a no-op.
    ///
    /// Never fails, allocates, or retains a reference to the buffer.
    ///
    /// # Parameters
    /// - `pixels`: Raw channel bytes; format interpretation is the
    ///   caller's concern.
    pub fn inject(&self, pixels: &mut [u8]) {
        if pixels.is_empty() {
            return;
        }

        let mut rng = MersenneTwister64::with_seed(self.seed.value());
        let span = 2 * u64::from(self.amplitude) + 1;

        for i in (0..pixels.len()).step_by(self.stride) {
            let delta = (rng.next_u64() % span) as i32 - i32::from(self.amplitude);
            let widened = i32::from(pixels[i]) + delta;
            pixels[i] = widened.clamp(0, 255) as u8;
        }
    }
}

/// Injects session noise into a pixel buffer in place.
///
/// The unconditional entry point for readback paths: obtains the
/// process-wide session seed (creating it on first use), then perturbs
/// every 1000th byte by a delta in [-2, 2], clamped to [0, 255]. An empty
/// buffer is a no-op. Never fails.
///
/// # Parameters
/// - `pixels`: Raw channel bytes from an image-readback surface.
///
/// # Examples
///
/// ```
/// let mut pixels = vec![0u8; 0];
/// pixelveil::inject_noise(&mut pixels); // zero-length: nothing happens
/// ```
pub fn inject_noise(pixels: &mut [u8]) {
    NoiseInjector::new().inject(pixels);
}
