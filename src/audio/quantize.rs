//! Peak normalization and 16-bit quantization.

use crate::params::quantization::PEAK_AMPLITUDE;

/// Largest absolute sample value (0.0 for empty or silent buffers)
pub fn peak(samples: &[f64]) -> f64 {
    samples.iter().map(|s| s.abs()).fold(0.0, f64::max)
}

/// Scale so the peak sample lands on exactly +/-32767
///
/// Silent buffers are returned unchanged.
pub fn normalize(samples: &[f64]) -> Vec<f64> {
    let peak = peak(samples);
    if peak > 0.0 {
        // Divide first so the peak sample maps to exactly 1.0
        samples.iter().map(|s| s / peak * PEAK_AMPLITUDE).collect()
    } else {
        samples.to_vec()
    }
}

/// Truncate toward zero into the signed 16-bit range
pub fn quantize(samples: &[f64]) -> Vec<i16> {
    samples
        .iter()
        .map(|s| s.trunc().clamp(i16::MIN as f64, i16::MAX as f64) as i16)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peak() {
        assert_eq!(peak(&[]), 0.0);
        assert_eq!(peak(&[0.5, -2.0, 1.5]), 2.0);
    }

    #[test]
    fn test_normalize_hits_full_scale() {
        let normalized = normalize(&[0.25, -0.5, 0.1]);
        assert_eq!(normalized[1], -32767.0);
        assert_eq!(normalized[0], 16383.5);
    }

    #[test]
    fn test_silence_is_left_alone() {
        assert_eq!(normalize(&[0.0, 0.0, 0.0]), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_quantize_truncates_and_clamps() {
        assert_eq!(
            quantize(&[16383.5, -16383.5, 0.99, -0.99, 40000.0, -40000.0]),
            vec![16383, -16383, 0, 0, 32767, -32768]
        );
    }
}
