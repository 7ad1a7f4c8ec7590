//! Editor slider positions and their mapping onto processing settings.

use super::audio::{EqSettings, Equalization, ProcessingSettings};

/// Gain at full slider travel (slider position 1.0)
pub const MAX_GAIN: f64 = 2.0;

/// Normalized slider positions, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderPositions {
    /// Bass slider (0.5 = unity gain)
    pub bass: f64,

    /// Mid slider (0.5 = unity gain)
    pub mid: f64,

    /// Treble slider (0.5 = unity gain)
    pub treble: f64,

    /// Compression slider (position is the ratio itself)
    pub compression: f64,
}

impl Default for SliderPositions {
    fn default() -> Self {
        Self {
            bass: 0.5,
            mid: 0.5,
            treble: 0.5,
            compression: 0.0,
        }
    }
}

impl SliderPositions {
    /// Clamp every position into [0, 1], like the knob on its bar
    pub fn clamped(self) -> Self {
        let clamp = |p: f64| if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
        Self {
            bass: clamp(self.bass),
            mid: clamp(self.mid),
            treble: clamp(self.treble),
            compression: clamp(self.compression),
        }
    }

    /// Convert positions into engine settings
    ///
    /// The editor always equalizes, even at unity.
    pub fn to_settings(&self) -> ProcessingSettings {
        let p = self.clamped();
        ProcessingSettings {
            eq: Equalization::Equalize(EqSettings::new(
                p.bass * MAX_GAIN,
                p.mid * MAX_GAIN,
                p.treble * MAX_GAIN,
            )),
            compression: p.compression,
        }
    }

    /// Display labels in bass, mid, treble, compression order
    pub fn labels(&self) -> [(&'static str, String); 4] {
        let p = self.clamped();
        [
            ("Bass", gain_label(p.bass)),
            ("Mid", gain_label(p.mid)),
            ("Treble", gain_label(p.treble)),
            ("Compression", format!("{:.0}%", p.compression * 100.0)),
        ]
    }
}

fn gain_label(position: f64) -> String {
    format!("{:.1}x", position * MAX_GAIN)
}
