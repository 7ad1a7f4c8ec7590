//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::params::{EqSettings, Equalization, ProcessingSettings};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "WaveShaper")]
#[command(about = "Spectral EQ and compression for WAV files", long_about = None)]
pub struct Args {
    /// Input WAV file (multi-channel input is mixed down to mono)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output WAV file (16-bit mono)
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Bass gain for 0-250 Hz (enables EQ; unset bands default to 1.0)
    #[arg(long, value_name = "GAIN")]
    pub bass: Option<f64>,

    /// Mid gain for 250-4000 Hz
    #[arg(long, value_name = "GAIN")]
    pub mid: Option<f64>,

    /// Treble gain for 4000 Hz and up
    #[arg(long, value_name = "GAIN")]
    pub treble: Option<f64>,

    /// Fraction of quietest spectral bins to remove (0 = off)
    #[arg(long, value_name = "RATIO", default_value = "0")]
    pub compression: f64,
}

impl Args {
    /// Equalization from the gain flags
    pub fn equalization(&self) -> Equalization {
        if self.bass.is_none() && self.mid.is_none() && self.treble.is_none() {
            return Equalization::NoEqualization;
        }
        Equalization::Equalize(EqSettings::new(
            self.bass.unwrap_or(1.0),
            self.mid.unwrap_or(1.0),
            self.treble.unwrap_or(1.0),
        ))
    }

    /// Engine settings from the command line
    pub fn settings(&self) -> ProcessingSettings {
        ProcessingSettings {
            eq: self.equalization(),
            compression: self.compression,
        }
    }
}
