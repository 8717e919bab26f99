//! Radix-2 Cooley-Tukey FFT kernel
//!
//! In-place decimation-in-time transform over a complex working buffer,
//! with the twiddle tables precomputed once per transform length.

use num_complex::Complex;

use crate::error::SpectrumError;
use crate::sample::Sample;

/// Bit-reversal permutation over `log2(len)` bits, in place.
///
/// Swaps each index with its bit-reversed counterpart exactly once
/// (guarded by `i < j`), so applying it twice restores the original
/// ordering. `data.len()` must be a power of two.
pub(crate) fn bit_reverse<T: Copy>(data: &mut [Complex<T>]) {
    let n = data.len();
    if n <= 1 {
        return;
    }
    debug_assert!(n.is_power_of_two());

    let shift = usize::BITS - n.trailing_zeros();
    for i in 0..n {
        let j = i.reverse_bits() >> shift;
        if i < j {
            data.swap(i, j);
        }
    }
}

/// FFT plan for one power-of-two transform length.
///
/// Holds the per-stage twiddle factors, computed at construction and never
/// mutated afterwards, so a plan can be shared across threads and reused
/// for any number of transforms of the same length.
pub struct Radix2Fft<T> {
    len: usize,

    /// Twiddle factors for all stages, concatenated: the `s/2` factors
    /// `exp(-2πi·k/s)` for stage width s = 2, 4, ..., len.
    twiddles: Vec<Complex<T>>,
}

impl<T: Sample> Radix2Fft<T> {
    /// Create a plan for transforms of length `len`.
    ///
    /// # Errors
    /// `EmptyInput` if `len` is zero, `NonPowerOfTwo` otherwise when `len`
    /// is not a power of two.
    pub fn new(len: usize) -> Result<Self, SpectrumError> {
        if len == 0 {
            return Err(SpectrumError::EmptyInput);
        }
        if !len.is_power_of_two() {
            return Err(SpectrumError::NonPowerOfTwo { len });
        }

        // len - 1 factors in total across all stages.
        let mut twiddles = Vec::with_capacity(len.saturating_sub(1));
        let mut stage_width = 2;
        while stage_width <= len {
            let half = stage_width / 2;
            let step = -T::tau() / T::from_usize(stage_width);
            for k in 0..half {
                let angle = step * T::from_usize(k);
                twiddles.push(Complex::new(angle.cos(), angle.sin()));
            }
            stage_width *= 2;
        }

        Ok(Self { len, twiddles })
    }

    /// Transform length of this plan.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: zero-length plans are rejected at construction.
    /// Exists to pair with [`len`](Self::len).
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Run the forward transform in place.
    ///
    /// After the call `data` holds the full DFT of its previous contents in
    /// natural (non-bit-reversed) order.
    ///
    /// # Panics
    /// Panics if `data.len()` differs from the plan length.
    pub fn process(&self, data: &mut [Complex<T>]) {
        assert_eq!(data.len(), self.len, "buffer length must match plan length");

        bit_reverse(data);

        let mut twiddle_offset = 0;
        let mut stage_width = 2;
        while stage_width <= self.len {
            let half = stage_width / 2;
            let stage_twiddles = &self.twiddles[twiddle_offset..twiddle_offset + half];

            for block in data.chunks_exact_mut(stage_width) {
                let (lower, upper) = block.split_at_mut(half);
                for (k, &w) in stage_twiddles.iter().enumerate() {
                    let t = w * upper[k];
                    let a = lower[k];
                    lower[k] = a + t;
                    upper[k] = a - t;
                }
            }

            twiddle_offset += half;
            stage_width *= 2;
        }
    }

    /// Compute the one-sided, amplitude-normalized magnitude spectrum.
    ///
    /// # Arguments
    /// * `samples` - Real input; extra samples beyond the plan length are
    ///   ignored, a shorter input is zero-padded to it
    ///
    /// # Returns
    /// `sqrt(re[k]² + im[k]²) · 2/len` for every bin k = 0..len. The factor
    /// of two folds the negative-frequency energy into the reported bins.
    pub fn magnitude_spectrum(&self, samples: &[T]) -> Vec<T> {
        let mut buffer: Vec<Complex<T>> = samples
            .iter()
            .take(self.len)
            .map(|&x| Complex::new(x, T::zero()))
            .collect();
        buffer.resize(self.len, Complex::new(T::zero(), T::zero()));

        self.process(&mut buffer);

        let scale = T::two() / T::from_usize(self.len);
        buffer.iter().map(|c| c.norm() * scale).collect()
    }

    /// Convert a bin index to its frequency in Hz for a given sample rate.
    pub fn bin_to_frequency(&self, bin: usize, sample_rate: T) -> T {
        T::from_usize(bin) * sample_rate / T::from_usize(self.len)
    }

    /// Frequency in Hz of every bin, index-aligned with the spectrum.
    pub fn frequency_axis(&self, sample_rate: T) -> Vec<T> {
        (0..self.len)
            .map(|bin| self.bin_to_frequency(bin, sample_rate))
            .collect()
    }
}
