//! Frequency bands and per-band gain application.

use std::ops::Range;

use super::fft::Spectrum;
use crate::params::{band_edges, EqSettings};

/// Named frequency band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    /// [0, 250) Hz
    Bass,
    /// [250, 4000) Hz
    Mid,
    /// [4000, inf) Hz
    Treble,
}

impl Band {
    pub const ALL: [Band; 3] = [Band::Bass, Band::Mid, Band::Treble];

    /// Band containing a frequency (Hz)
    pub fn for_frequency(hz: f64) -> Band {
        if hz < band_edges::BASS_UPPER_HZ {
            Band::Bass
        } else if hz < band_edges::MID_UPPER_HZ {
            Band::Mid
        } else {
            Band::Treble
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Band::Bass => "bass",
            Band::Mid => "mid",
            Band::Treble => "treble",
        }
    }
}

impl EqSettings {
    /// Gain applied to a band
    pub fn gain(&self, band: Band) -> f64 {
        match band {
            Band::Bass => self.bass,
            Band::Mid => self.mid,
            Band::Treble => self.treble,
        }
    }
}

/// Contiguous bin ranges covered by each band
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandRanges {
    pub bass: Range<usize>,
    pub mid: Range<usize>,
    pub treble: Range<usize>,
}

impl BandRanges {
    /// Split a monotonic frequency axis at the band edges
    pub fn from_axis(axis: &[f64]) -> Self {
        let bass_end = axis.partition_point(|&hz| hz < band_edges::BASS_UPPER_HZ);
        let mid_end = axis.partition_point(|&hz| hz < band_edges::MID_UPPER_HZ);
        Self {
            bass: 0..bass_end,
            mid: bass_end..mid_end,
            treble: mid_end..axis.len(),
        }
    }

    /// Band owning a bin index
    pub fn band_of(&self, bin: usize) -> Band {
        if bin < self.bass.end {
            Band::Bass
        } else if bin < self.mid.end {
            Band::Mid
        } else {
            Band::Treble
        }
    }

    /// Bin range for a band
    pub fn get(&self, band: Band) -> Range<usize> {
        match band {
            Band::Bass => self.bass.clone(),
            Band::Mid => self.mid.clone(),
            Band::Treble => self.treble.clone(),
        }
    }
}

/// Scale every bin by the gain of the band it falls in
pub fn equalize(spectrum: &Spectrum, sample_rate: u32, settings: &EqSettings) -> Spectrum {
    let ranges = BandRanges::from_axis(&spectrum.frequency_axis(sample_rate));
    tracing::debug!(
        bass_bins = ranges.bass.len(),
        mid_bins = ranges.mid.len(),
        treble_bins = ranges.treble.len(),
        "Equalizing spectrum"
    );

    spectrum.map_bins(|k, bin| bin * settings.gain(ranges.band_of(k)))
}
