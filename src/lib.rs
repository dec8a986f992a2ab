//! PixelVeil: deterministic session-scoped pixel noise injection.
//!
//! PixelVeil perturbs a small, fixed fraction of the bytes in a raw pixel
//! buffer by a bounded amount, as an anti-fingerprinting countermeasure for
//! image-readback surfaces (canvas pixel buffers and similar). The noise
//! pattern is a pure function of a session seed, so every readback within a
//! process sees identical perturbations, while separate process launches see
//! different ones. Pixel-level fingerprints stop being stable across sessions
//! without any visible distortion.
//!
//! # Architecture
//!
//! ```text
//! SessionSeed       (64-bit seed, sampled once per process from the clock)
//!     ↓ seeds
//! MersenneTwister64 (deterministic stream, rebuilt fresh on every call)
//!     ↓ drives
//! NoiseInjector     (walks the buffer at a fixed stride, clamped ±2 deltas)
//! ```
//!
//! # Examples
//!
//! Inject noise with the process-wide session seed:
//!
//! ```
//! let mut pixels = vec![128u8; 4096];
//! pixelveil::inject_noise(&mut pixels);
//!
//! // Same process, same seed: a second buffer gets the identical pattern.
//! let mut again = vec![128u8; 4096];
//! pixelveil::inject_noise(&mut again);
//! assert_eq!(pixels, again);
//! ```
//!
//! Inject with an explicit seed for a reproducible context:
//!
//! ```
//! use pixelveil::{NoiseInjector, SessionSeed};
//!
//! let injector = NoiseInjector::with_seed(SessionSeed::from_raw(42));
//! let mut pixels = vec![255u8; 2000];
//! injector.inject(&mut pixels);
//!
//! // Only stride positions are touched, and never out of [0, 255].
//! assert!(pixels[1..1000].iter().all(|&b| b == 255));
//! assert!(pixels[0] >= 253);
//! ```

#![deny(clippy::all)]

pub mod error;

mod injector;
pub(crate) mod random;
mod seed;

pub use injector::{inject_noise, NoiseInjector};
pub use seed::{session_seed, SessionSeed};
