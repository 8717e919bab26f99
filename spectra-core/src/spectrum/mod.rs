//! Spectral analysis with a radix-2 FFT kernel

pub mod analysis;
pub mod fft;
pub mod windowing;

pub use analysis::{spectrum, AnalyzerConfig, LengthPolicy, SpectrumAnalyzer};
pub use fft::Radix2Fft;
pub use windowing::{apply_window, generate_window, WindowType};
