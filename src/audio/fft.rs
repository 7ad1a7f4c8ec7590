//! Real-input forward and inverse FFT over whole buffers.

use rustfft::{num_complex::Complex, FftPlanner};

/// Non-negative frequency half of a real signal's spectrum
///
/// Holds `signal_len / 2 + 1` bins and remembers the time-domain length so
/// the inverse can rebuild odd-length signals exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    bins: Vec<Complex<f64>>,
    signal_len: usize,
}

impl Spectrum {
    /// Complex bin values, DC first
    pub fn bins(&self) -> &[Complex<f64>] {
        &self.bins
    }

    /// Number of bins
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Length of the time-domain signal this spectrum came from
    pub fn signal_len(&self) -> usize {
        self.signal_len
    }

    /// Magnitude of every bin
    pub fn magnitudes(&self) -> Vec<f64> {
        self.bins.iter().map(|c| c.norm()).collect()
    }

    /// Count of bins that are not exactly zero
    pub fn nonzero_bins(&self) -> usize {
        self.bins
            .iter()
            .filter(|c| c.re != 0.0 || c.im != 0.0)
            .count()
    }

    /// True when no bin holds NaN or infinity
    pub fn is_finite(&self) -> bool {
        self.bins.iter().all(|c| c.re.is_finite() && c.im.is_finite())
    }

    /// Frequency (Hz) of each bin for the given sample rate
    pub fn frequency_axis(&self, sample_rate: u32) -> Vec<f64> {
        frequency_axis(self.signal_len, sample_rate)
    }

    /// Build a new spectrum by mapping each bin with its index
    pub fn map_bins(&self, mut f: impl FnMut(usize, Complex<f64>) -> Complex<f64>) -> Self {
        Self {
            bins: self
                .bins
                .iter()
                .enumerate()
                .map(|(k, &bin)| f(k, bin))
                .collect(),
            signal_len: self.signal_len,
        }
    }
}

/// Bin frequencies for a real FFT of `signal_len` samples
///
/// Bin `k` maps to `k * sample_rate / signal_len` Hz.
pub fn frequency_axis(signal_len: usize, sample_rate: u32) -> Vec<f64> {
    if signal_len == 0 {
        return Vec::new();
    }
    // Multiply before dividing so bins landing on a band edge are exact
    (0..=signal_len / 2)
        .map(|k| k as f64 * sample_rate as f64 / signal_len as f64)
        .collect()
}

/// Forward FFT of a real buffer, keeping the non-negative frequencies
pub fn forward(samples: &[f32]) -> Spectrum {
    let n = samples.len();
    if n == 0 {
        return Spectrum {
            bins: Vec::new(),
            signal_len: 0,
        };
    }

    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(n);

    let mut buffer: Vec<Complex<f64>> = samples
        .iter()
        .map(|&s| Complex::new(s as f64, 0.0))
        .collect();
    fft.process(&mut buffer);

    // Upper half mirrors the lower half for real input
    buffer.truncate(n / 2 + 1);

    Spectrum {
        bins: buffer,
        signal_len: n,
    }
}

/// Inverse FFT back to a real signal of the original length
///
/// The negative frequencies are rebuilt as conjugates of the stored bins.
/// Imaginary residue in the result is dropped.
pub fn inverse(spectrum: &Spectrum) -> Vec<f64> {
    let n = spectrum.signal_len;
    if n == 0 {
        return Vec::new();
    }

    let mut buffer = vec![Complex::new(0.0, 0.0); n];
    buffer[..spectrum.bins.len()].copy_from_slice(&spectrum.bins);
    for k in spectrum.bins.len()..n {
        buffer[k] = spectrum.bins[n - k].conj();
    }

    let mut planner = FftPlanner::<f64>::new();
    let ifft = planner.plan_fft_inverse(n);
    ifft.process(&mut buffer);

    // rustfft leaves the inverse unscaled
    let scale = 1.0 / n as f64;
    buffer.iter().map(|c| c.re * scale).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn sine(freq_hz: f64, sample_rate: u32, len: usize) -> Vec<f32> {
        (0..len)
            .map(|i| (2.0 * PI * freq_hz * i as f64 / sample_rate as f64).sin() as f32)
            .collect()
    }

    #[test]
    fn test_spectrum_length() {
        assert_eq!(forward(&[0.0; 8]).len(), 5);
        assert_eq!(forward(&[0.0; 9]).len(), 5);
        assert_eq!(forward(&[1.0]).len(), 1);
        assert!(forward(&[]).is_empty());
    }

    #[test]
    fn test_frequency_axis() {
        // 1024 samples at 44100 Hz: ~43.07 Hz per bin
        let axis = frequency_axis(1024, 44100);
        assert_eq!(axis.len(), 513);
        assert_eq!(axis[0], 0.0);
        assert!((axis[1] - 43.066).abs() < 0.01);
        assert!((axis[512] - 22050.0).abs() < 1e-9);
        assert!(axis.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_edge_bins_exact_with_fractional_resolution() {
        // 44100 / 25578 Hz per bin is not representable, but bins 145 and
        // 2320 sit exactly on 250 Hz and 4000 Hz
        let axis = frequency_axis(25578, 44100);
        assert_eq!(axis[145], 250.0);
        assert_eq!(axis[2320], 4000.0);
        assert!(axis[144] < 250.0);
        assert!(axis[2319] < 4000.0);
    }

    #[test]
    fn test_sine_peaks_at_its_bin() {
        let samples = sine(100.0, 1000, 1000);
        let spectrum = forward(&samples);
        let magnitudes = spectrum.magnitudes();
        let peak_bin = magnitudes
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(k, _)| k)
            .unwrap();
        assert_eq!(peak_bin, 100);
        assert_eq!(spectrum.frequency_axis(1000)[peak_bin], 100.0);
    }

    #[test]
    fn test_inverse_restores_even_and_odd_lengths() {
        for len in [64usize, 65, 2, 3, 1] {
            let samples: Vec<f32> = (0..len).map(|i| ((i * 7 % 11) as f32) - 5.0).collect();
            let restored = inverse(&forward(&samples));
            assert_eq!(restored.len(), len);
            for (a, b) in samples.iter().zip(&restored) {
                assert!((*a as f64 - b).abs() < 1e-9, "len {len}: {a} vs {b}");
            }
        }
    }

    #[test]
    fn test_nonzero_bins() {
        let spectrum = forward(&[1.0, 0.0, 0.0, 0.0]);
        assert_eq!(spectrum.nonzero_bins(), 3);

        let silenced = spectrum.map_bins(|_, _| Complex::new(0.0, 0.0));
        assert_eq!(silenced.nonzero_bins(), 0);
        assert_eq!(silenced.signal_len(), 4);
    }
}
