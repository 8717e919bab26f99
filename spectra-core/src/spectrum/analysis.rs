//! High-level spectrum analyzer
//!
//! Combines the radix-2 FFT kernel with windowing and an explicit policy
//! for inputs whose length is not a power of two.

use std::collections::hash_map::{Entry, HashMap};

use crate::error::SpectrumError;
use crate::sample::Sample;
use super::fft::Radix2Fft;
use super::windowing::{apply_window_inplace, window_correction_factor, WindowType};

/// How to reconcile an arbitrary input length with the radix-2 requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthPolicy {
    /// Transform the longest power-of-two prefix of the input, discarding
    /// the trailing samples. The default.
    #[default]
    Truncate,

    /// Zero-pad the input up to the next power of two.
    ZeroPad,

    /// Refuse non-power-of-two inputs with `NonPowerOfTwo`.
    Reject,
}

impl LengthPolicy {
    /// Transform length for an input of `n` samples, n > 0.
    fn transform_len(self, n: usize) -> Result<usize, SpectrumError> {
        match self {
            LengthPolicy::Truncate => Ok(1 << n.ilog2()),
            LengthPolicy::ZeroPad => Ok(n.next_power_of_two()),
            LengthPolicy::Reject if n.is_power_of_two() => Ok(n),
            LengthPolicy::Reject => Err(SpectrumError::NonPowerOfTwo { len: n }),
        }
    }
}

/// One-sided, amplitude-normalized magnitude spectrum of a real signal.
///
/// Operates on the longest power-of-two prefix of `samples` (the
/// [`LengthPolicy::Truncate`] policy); the result has length
/// `2^floor(log2(N))`. Use a [`SpectrumAnalyzer`] to pick a different
/// length policy, apply a window, or reuse the transform plan.
///
/// # Errors
/// `EmptyInput` when `samples` is empty.
pub fn spectrum<T: Sample>(samples: &[T]) -> Result<Vec<T>, SpectrumError> {
    if samples.is_empty() {
        return Err(SpectrumError::EmptyInput);
    }
    let len = LengthPolicy::Truncate.transform_len(samples.len())?;
    let plan = Radix2Fft::new(len)?;
    Ok(plan.magnitude_spectrum(samples))
}

/// Spectrum analyzer configuration
#[derive(Debug, Clone, Copy)]
pub struct AnalyzerConfig {
    /// Policy for non-power-of-two input lengths
    pub length_policy: LengthPolicy,

    /// Window applied before the transform
    pub window_type: WindowType,

    /// Apply amplitude correction for the window
    pub apply_correction: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            length_policy: LengthPolicy::Truncate,
            window_type: WindowType::Rectangular,
            apply_correction: true,
        }
    }
}

/// Reusable spectrum analyzer.
///
/// Caches one FFT plan per transform length it has seen, so repeated calls
/// with same-sized inputs recompute no twiddle factors. Plans are immutable
/// once inserted; the cache itself makes the analyzer `&mut self`, use one
/// analyzer per thread or the free [`spectrum`] function.
pub struct SpectrumAnalyzer<T> {
    config: AnalyzerConfig,
    plans: HashMap<usize, Radix2Fft<T>>,
}

impl<T: Sample> Default for SpectrumAnalyzer<T> {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

impl<T: Sample> SpectrumAnalyzer<T> {
    /// Create a new analyzer with the given configuration.
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            config,
            plans: HashMap::new(),
        }
    }

    /// Analyze a signal and return its magnitude spectrum.
    ///
    /// # Errors
    /// `EmptyInput` for an empty signal; `NonPowerOfTwo` under the
    /// [`LengthPolicy::Reject`] policy.
    pub fn analyze(&mut self, samples: &[T]) -> Result<Vec<T>, SpectrumError> {
        if samples.is_empty() {
            return Err(SpectrumError::EmptyInput);
        }
        let len = self.config.length_policy.transform_len(samples.len())?;
        let window_type = self.config.window_type;

        // Window the samples actually transformed; under ZeroPad that is
        // the whole input, the padding stays zero.
        let mut windowed: Vec<T> = samples[..samples.len().min(len)].to_vec();
        apply_window_inplace(&mut windowed, window_type);

        let correction: Option<T> = if self.config.apply_correction
            && window_type != WindowType::Rectangular
        {
            Some(window_correction_factor(window_type, windowed.len()))
        } else {
            None
        };

        let plan = self.plan(len)?;
        let mut spectrum = plan.magnitude_spectrum(&windowed);

        if let Some(factor) = correction {
            for mag in spectrum.iter_mut() {
                *mag = *mag * factor;
            }
        }

        Ok(spectrum)
    }

    /// Analyze and return the magnitude spectrum in dB relative to `reference`.
    pub fn analyze_db(&mut self, samples: &[T], reference: T) -> Result<Vec<T>, SpectrumError> {
        let spectrum = self.analyze(samples)?;
        let db_scale = T::from_f64(20.0);
        Ok(spectrum
            .iter()
            .map(|&mag| {
                // Floor keeps silent bins finite.
                let clamped = mag.max(T::min_positive_value());
                db_scale * (clamped / reference).log10()
            })
            .collect())
    }

    /// Analyze and return the power spectrum (magnitude squared).
    pub fn power(&mut self, samples: &[T]) -> Result<Vec<T>, SpectrumError> {
        let spectrum = self.analyze(samples)?;
        Ok(spectrum.iter().map(|&mag| mag * mag).collect())
    }

    /// Frequency in Hz of each bin of the most natural transform length for
    /// an input of `n` samples under the configured policy.
    pub fn frequency_axis(&self, n: usize, sample_rate: T) -> Result<Vec<T>, SpectrumError> {
        if n == 0 {
            return Err(SpectrumError::EmptyInput);
        }
        let len = self.config.length_policy.transform_len(n)?;
        let freqs = (0..len)
            .map(|bin| T::from_usize(bin) * sample_rate / T::from_usize(len))
            .collect();
        Ok(freqs)
    }

    /// Get the current configuration.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Replace the configuration. Cached plans stay valid across changes.
    pub fn set_config(&mut self, config: AnalyzerConfig) {
        self.config = config;
    }

    fn plan(&mut self, len: usize) -> Result<&Radix2Fft<T>, SpectrumError> {
        match self.plans.entry(len) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => Ok(entry.insert(Radix2Fft::new(len)?)),
        }
    }
}
