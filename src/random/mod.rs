//! Random number generation subsystem for PixelVeil.
//!
//! Provides the deterministic generator that maps a session seed onto the
//! per-call noise stream. The algorithm is pinned to MT19937-64 so the exact
//! mutated-value sequence for a given seed never changes between builds.

pub(crate) mod mersenne_twister;
