//! Floating-point sample widths supported by the transform kernel
//!
//! The kernel runs the same algorithm in single and double precision;
//! the width is picked at compile time through this trait.

use num_traits::{Float, FloatConst};

mod private {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// A real sample type the spectral kernel can operate on.
///
/// Sealed over `f32` and `f64` — the set of supported widths is closed,
/// so the kernel monomorphizes per width with no dynamic dispatch.
pub trait Sample: Float + FloatConst + private::Sealed + Send + Sync + 'static {
    /// Lossless-enough conversion from a buffer length or bin index.
    fn from_usize(n: usize) -> Self;

    /// Narrowing conversion for window coefficients and other small constants.
    fn from_f64(x: f64) -> Self;

    /// `2π`, the full turn used when deriving twiddle angles.
    #[inline]
    fn tau() -> Self {
        Self::PI() + Self::PI()
    }

    /// The constant `2`, used by the one-sided amplitude convention.
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }
}

impl Sample for f32 {
    #[inline]
    fn from_usize(n: usize) -> Self {
        n as f32
    }

    #[inline]
    fn from_f64(x: f64) -> Self {
        x as f32
    }
}

impl Sample for f64 {
    #[inline]
    fn from_usize(n: usize) -> Self {
        n as f64
    }

    #[inline]
    fn from_f64(x: f64) -> Self {
        x
    }
}
