//! Spectral processing settings and band constants.

use crate::audio::Band;
use crate::error::ProcessingError;

/// Band edge constants (Hz)
pub mod band_edges {
    /// Upper edge of the bass band, exclusive (Hz)
    pub const BASS_UPPER_HZ: f64 = 250.0;

    /// Upper edge of the mid band, exclusive (Hz)
    /// Treble is everything at or above this frequency.
    pub const MID_UPPER_HZ: f64 = 4000.0;
}

/// Output quantization constants
pub mod quantization {
    /// Peak magnitude a normalized buffer is scaled to
    pub const PEAK_AMPLITUDE: f64 = 32767.0;
}

/// Per-band multiplicative gains
///
/// A gain of 1.0 leaves the band untouched, 0.0 silences it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EqSettings {
    /// Gain for bins below 250 Hz
    pub bass: f64,

    /// Gain for bins in 250..4000 Hz
    pub mid: f64,

    /// Gain for bins at or above 4000 Hz
    pub treble: f64,
}

impl Default for EqSettings {
    fn default() -> Self {
        Self::flat()
    }
}

impl EqSettings {
    /// Create gains for the three bands
    pub fn new(bass: f64, mid: f64, treble: f64) -> Self {
        Self { bass, mid, treble }
    }

    /// Unity gain on every band
    pub fn flat() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    /// Validate gains (finite and non-negative)
    pub fn validate(&self) -> Result<(), ProcessingError> {
        for band in Band::ALL {
            let gain = self.gain(band);
            if !gain.is_finite() || gain < 0.0 {
                return Err(ProcessingError::InvalidGain {
                    band: band.name(),
                    gain,
                });
            }
        }
        Ok(())
    }
}

/// Whether equalization runs at all
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Equalization {
    /// Spectrum passes through unchanged
    #[default]
    NoEqualization,

    /// Scale each band by its gain
    Equalize(EqSettings),
}

impl Equalization {
    /// Validate the contained gains, if any
    pub fn validate(&self) -> Result<(), ProcessingError> {
        match self {
            Equalization::NoEqualization => Ok(()),
            Equalization::Equalize(settings) => settings.validate(),
        }
    }
}

impl From<EqSettings> for Equalization {
    fn from(settings: EqSettings) -> Self {
        Equalization::Equalize(settings)
    }
}

impl From<Option<EqSettings>> for Equalization {
    fn from(settings: Option<EqSettings>) -> Self {
        settings.map_or(Equalization::NoEqualization, Equalization::Equalize)
    }
}

/// Complete settings record for one engine run
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProcessingSettings {
    /// Band gains (or none)
    pub eq: Equalization,

    /// Fraction of spectrum bins, by ascending magnitude, to zero out.
    /// 0.0 disables compression; values at or above 1.0 keep only the
    /// loudest bin(s).
    pub compression: f64,
}

impl ProcessingSettings {
    pub fn new(eq: impl Into<Equalization>, compression: f64) -> Self {
        Self {
            eq: eq.into(),
            compression,
        }
    }

    /// Validate configuration (non-negative ratio, sane gains)
    pub fn validate(&self) -> Result<(), ProcessingError> {
        if self.compression.is_nan() || self.compression < 0.0 {
            return Err(ProcessingError::InvalidCompression(self.compression));
        }
        self.eq.validate()
    }
}
