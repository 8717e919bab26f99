//! Spectra - Magnitude Spectrum Analysis Core
//!
//! One-sided, amplitude-normalized magnitude spectra of real-valued signals
//! via a self-contained radix-2 Cooley-Tukey FFT, in single or double
//! precision.
//!
//! The quickest route is the free function:
//!
//! ```
//! let samples: Vec<f64> = (0..64)
//!     .map(|i| (2.0 * std::f64::consts::PI * 5.0 * i as f64 / 64.0).sin())
//!     .collect();
//!
//! let spectrum = spectra::spectrum(&samples).unwrap();
//! assert!((spectrum[5] - 1.0).abs() < 1e-9);
//! ```
//!
//! [`SpectrumAnalyzer`] adds windowing, dB output, a choice of input-length
//! policy and plan reuse across calls.

pub mod error;
pub mod sample;
pub mod spectrum;

pub use error::SpectrumError;
pub use sample::Sample;
pub use spectrum::{
    spectrum, AnalyzerConfig, LengthPolicy, Radix2Fft, SpectrumAnalyzer, WindowType,
};
