//! Magnitude-threshold spectral compression.

use rustfft::num_complex::Complex;

use super::fft::Spectrum;

/// Magnitude below which bins are dropped for a given ratio
///
/// The threshold is the magnitude at ascending rank `floor(len * ratio)`,
/// clamped to the largest magnitude when the ratio reaches 1.0. Returns
/// `None` when nothing would be removed.
pub fn magnitude_threshold(magnitudes: &[f64], ratio: f64) -> Option<f64> {
    if magnitudes.is_empty() || ratio.is_nan() || ratio <= 0.0 {
        return None;
    }

    // Saturating cast keeps huge ratios at usize::MAX
    let num_to_remove = (magnitudes.len() as f64 * ratio).floor() as usize;
    if num_to_remove == 0 {
        return None;
    }
    let rank = num_to_remove.min(magnitudes.len() - 1);

    let mut scratch = magnitudes.to_vec();
    let (_, threshold, _) = scratch.select_nth_unstable_by(rank, f64::total_cmp);
    Some(*threshold)
}

/// Zero every bin whose magnitude is strictly below the threshold
///
/// Bins tied with the threshold survive.
pub fn compress(spectrum: &Spectrum, ratio: f64) -> Spectrum {
    let magnitudes = spectrum.magnitudes();
    let Some(threshold) = magnitude_threshold(&magnitudes, ratio) else {
        return spectrum.clone();
    };

    let compressed = spectrum.map_bins(|k, bin| {
        if magnitudes[k] < threshold {
            Complex::new(0.0, 0.0)
        } else {
            bin
        }
    });

    tracing::debug!(
        ratio,
        threshold,
        kept = compressed.nonzero_bins(),
        total = spectrum.len(),
        "Compressed spectrum"
    );
    compressed
}
