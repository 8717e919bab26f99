//! Error taxonomy for spectral analysis

use thiserror::Error;

/// Errors returned by the spectrum computation.
///
/// Failure is immediate and terminal for the call; no partial spectrum is
/// ever returned. Retrying with sanitized input is the caller's decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpectrumError {
    /// The input signal contained no samples.
    #[error("input signal is empty")]
    EmptyInput,

    /// A transform length that must be a power of two was not.
    #[error("transform length {len} is not a power of two")]
    NonPowerOfTwo { len: usize },
}
