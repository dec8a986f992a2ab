//! Error types for the PixelVeil library.

use std::fmt;

/// Errors produced by the PixelVeil library.
///
/// Only injector construction with out-of-range parameters can fail; the
/// injection path itself never reports an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoiseError {
    /// Stride is zero; the buffer walk requires a stride of at least 1.
    StrideOutOfRange,
    /// Amplitude is outside the valid range [1, 127].
    AmplitudeOutOfRange,
}

impl fmt::Display for NoiseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoiseError::StrideOutOfRange => {
                write!(f, "Stride must be at least 1")
            }
            NoiseError::AmplitudeOutOfRange => {
                write!(f, "Amplitude must be between 1 and 127")
            }
        }
    }
}

impl std::error::Error for NoiseError {}
