//! Error types for loading, processing and saving audio.

use std::path::PathBuf;
use thiserror::Error;

/// Failures reading a source file
#[derive(Error, Debug)]
pub enum LoadError {
    /// Path does not exist
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// Container could not be opened or parsed
    #[error("Malformed WAV file {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },

    /// Header declares zero channels
    #[error("WAV file {0} has no channels")]
    NoChannels(PathBuf),
}

/// Failures inside the spectral transform
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProcessingError {
    /// Input buffer has no samples
    #[error("Cannot process an empty buffer")]
    EmptyBuffer,

    /// Sample rate must be positive
    #[error("Sample rate must be > 0, got {0}")]
    InvalidSampleRate(u32),

    /// Compression ratio is negative or NaN
    #[error("Compression ratio must be >= 0, got {0}")]
    InvalidCompression(f64),

    /// Band gain is negative or not finite
    #[error("Gain for {band} must be finite and >= 0, got {gain}")]
    InvalidGain { band: &'static str, gain: f64 },

    /// Input contains NaN or infinity
    #[error("Sample {index} is not finite")]
    NonFiniteSample { index: usize },

    /// A transform stage produced NaN or infinity
    #[error("Numeric failure during {0}")]
    Numeric(&'static str),
}

/// Failures writing a processed file
#[derive(Error, Debug)]
pub enum SaveError {
    #[error("Failed to write WAV file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },

    /// Rendering failed before anything was written
    #[error(transparent)]
    Processing(#[from] ProcessingError),
}
