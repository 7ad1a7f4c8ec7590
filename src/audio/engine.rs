//! Spectral transform engine: FFT, equalize, compress, inverse, quantize.
//!
//! Every call is independent. Inputs are borrowed and never modified, so the
//! same buffer can be rendered again with different settings.

use super::bands::equalize;
use super::compression::compress;
use super::fft::{forward, inverse};
use super::quantize::{normalize, quantize};
use crate::error::ProcessingError;
use crate::params::{Equalization, ProcessingSettings};

/// Run the full pipeline and return peak-normalized 16-bit samples
///
/// The output has the same length as `buffer`.
pub fn transform(
    buffer: &[f32],
    sample_rate: u32,
    eq: Equalization,
    compression: f64,
) -> Result<Vec<i16>, ProcessingError> {
    process(buffer, sample_rate, &ProcessingSettings { eq, compression })
}

/// Same as [`transform`], taking a settings record
pub fn process(
    buffer: &[f32],
    sample_rate: u32,
    settings: &ProcessingSettings,
) -> Result<Vec<i16>, ProcessingError> {
    let reconstructed = reconstruct(buffer, sample_rate, settings)?;
    let output = quantize(&normalize(&reconstructed));

    tracing::debug!(samples = output.len(), "Quantized output");
    Ok(output)
}

/// Shape the spectrum and transform back, without normalizing
///
/// Useful when the relative level of two renders matters.
pub fn reconstruct(
    buffer: &[f32],
    sample_rate: u32,
    settings: &ProcessingSettings,
) -> Result<Vec<f64>, ProcessingError> {
    validate_input(buffer, sample_rate)?;
    settings.validate()?;

    let spectrum = forward(buffer);
    tracing::debug!(
        samples = buffer.len(),
        bins = spectrum.len(),
        sample_rate,
        "Forward transform"
    );

    let spectrum = match settings.eq {
        Equalization::NoEqualization => spectrum,
        Equalization::Equalize(gains) => equalize(&spectrum, sample_rate, &gains),
    };
    if !spectrum.is_finite() {
        return Err(ProcessingError::Numeric("equalization"));
    }

    let spectrum = if settings.compression > 0.0 {
        compress(&spectrum, settings.compression)
    } else {
        spectrum
    };

    let reconstructed = inverse(&spectrum);
    if reconstructed.iter().any(|s| !s.is_finite()) {
        return Err(ProcessingError::Numeric("inverse transform"));
    }
    Ok(reconstructed)
}

fn validate_input(buffer: &[f32], sample_rate: u32) -> Result<(), ProcessingError> {
    if buffer.is_empty() {
        return Err(ProcessingError::EmptyBuffer);
    }
    if sample_rate == 0 {
        return Err(ProcessingError::InvalidSampleRate(sample_rate));
    }
    if let Some(index) = buffer.iter().position(|s| !s.is_finite()) {
        return Err(ProcessingError::NonFiniteSample { index });
    }
    Ok(())
}
