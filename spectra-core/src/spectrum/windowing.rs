//! Window functions applied to time-domain signals before the FFT
//!
//! Windowing trades frequency resolution for reduced spectral leakage;
//! the analyzer applies one of these when configured to.

use crate::sample::Sample;

/// Window function types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowType {
    /// Rectangular window (no windowing)
    Rectangular,

    /// Hann window: w[n] = 0.5 - 0.5*cos(2πn/(M-1))
    /// Sidelobe attenuation: ~44 dB
    Hann,

    /// Hamming window: w[n] = 0.54 - 0.46*cos(2πn/(M-1))
    /// Sidelobe attenuation: ~53 dB
    Hamming,

    /// Blackman window: w[n] = 0.42 - 0.5*cos(2πn/(M-1)) + 0.08*cos(4πn/(M-1))
    /// Sidelobe attenuation: ~74 dB
    Blackman,
}

fn coefficient<T: Sample>(window_type: WindowType, n: usize, len: usize) -> T {
    if len < 2 {
        return T::one();
    }
    let phase = T::tau() * T::from_usize(n) / T::from_usize(len - 1);
    let c = T::from_f64;

    match window_type {
        WindowType::Rectangular => T::one(),
        WindowType::Hann => c(0.5) - c(0.5) * phase.cos(),
        WindowType::Hamming => c(0.54) - c(0.46) * phase.cos(),
        WindowType::Blackman => {
            c(0.42) - c(0.5) * phase.cos() + c(0.08) * (phase + phase).cos()
        }
    }
}

/// Generate window coefficients w[n] for n = 0..len-1.
pub fn generate_window<T: Sample>(window_type: WindowType, len: usize) -> Vec<T> {
    (0..len).map(|n| coefficient(window_type, n, len)).collect()
}

/// Apply a window to a signal, returning the windowed copy.
pub fn apply_window<T: Sample>(signal: &[T], window_type: WindowType) -> Vec<T> {
    signal
        .iter()
        .enumerate()
        .map(|(n, &s)| s * coefficient(window_type, n, signal.len()))
        .collect()
}

/// Apply a window in place.
pub fn apply_window_inplace<T: Sample>(signal: &mut [T], window_type: WindowType) {
    let len = signal.len();
    for (n, s) in signal.iter_mut().enumerate() {
        *s = *s * coefficient(window_type, n, len);
    }
}

/// Amplitude correction factor for a window.
///
/// Windowing attenuates the signal; multiplying the magnitude spectrum by
/// this factor restores the amplitude of a coherent tone.
pub fn window_correction_factor<T: Sample>(window_type: WindowType, len: usize) -> T {
    let sum = generate_window::<T>(window_type, len)
        .iter()
        .fold(T::zero(), |acc, &w| acc + w);
    // Hann and Blackman are all-zero below length 3; no amplitude is
    // recoverable from such a window, so leave the spectrum as is.
    if sum <= T::zero() {
        return T::one();
    }
    T::from_usize(len) / sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangular_is_identity() {
        let signal = vec![0.5; 16];
        assert_eq!(apply_window(&signal, WindowType::Rectangular), signal);
    }

    #[test]
    fn test_hamming_shape() {
        let windowed = apply_window(&vec![1.0f64; 101], WindowType::Hamming);

        // Unity at the center, ~0.08 at the edges.
        assert!((windowed[50] - 1.0).abs() < 0.01);
        assert!(windowed[0] < 0.1);
        assert!(windowed[100] < 0.1);
    }

    #[test]
    fn test_hann_endpoints_are_zero() {
        let window = generate_window::<f64>(WindowType::Hann, 64);
        assert!(window[0].abs() < 1e-12);
        assert!(window[63].abs() < 1e-12);
    }

    #[test]
    fn test_inplace_matches_copying() {
        let signal: Vec<f64> = (0..32).map(|i| (i as f64 * 0.3).sin()).collect();

        let copied = apply_window(&signal, WindowType::Blackman);
        let mut inplace = signal.clone();
        apply_window_inplace(&mut inplace, WindowType::Blackman);

        assert_eq!(copied, inplace);
    }

    #[test]
    fn test_correction_factor() {
        let rect = window_correction_factor::<f64>(WindowType::Rectangular, 100);
        let hamming = window_correction_factor::<f64>(WindowType::Hamming, 100);

        assert!((rect - 1.0).abs() < 0.01);
        // Hamming coherent gain is ~0.54, so the correction sits near 1.85.
        assert!(hamming > 1.5 && hamming < 2.5);
    }

    #[test]
    fn test_correction_factor_zero_sum_window() {
        // A length-2 Hann window is [0, 0]; the factor must stay finite.
        let factor = window_correction_factor::<f64>(WindowType::Hann, 2);
        assert_eq!(factor, 1.0);

        let factor = window_correction_factor::<f64>(WindowType::Blackman, 2);
        assert!(factor.is_finite());
    }

    #[test]
    fn test_degenerate_lengths() {
        assert_eq!(generate_window::<f64>(WindowType::Hann, 0), Vec::<f64>::new());
        assert_eq!(generate_window::<f64>(WindowType::Hann, 1), vec![1.0]);
    }
}
